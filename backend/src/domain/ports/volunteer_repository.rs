//! Port reading volunteer groups and memberships.

use async_trait::async_trait;

use crate::domain::{UserId, VolunteerGroup, VolunteerMembership};

use super::define_port_error;

define_port_error! {
    /// Errors raised by volunteer repository adapters.
    pub enum VolunteerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "volunteer repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "volunteer repository query failed: {message}",
    }
}

/// Read access to volunteer data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    /// Active groups ordered by name.
    async fn active_groups(&self) -> Result<Vec<VolunteerGroup>, VolunteerRepositoryError>;

    /// Memberships held by `user`, ordered by group name.
    async fn memberships_for(
        &self,
        user: UserId,
    ) -> Result<Vec<VolunteerMembership>, VolunteerRepositoryError>;
}
