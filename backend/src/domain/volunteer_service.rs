//! Volunteer group lookups.

use std::sync::Arc;

use crate::domain::ports::{VolunteerRepository, VolunteerRepositoryError};
use crate::domain::{Error, UserId, VolunteerGroup, VolunteerMembership};

/// Read-only access to volunteer groups.
#[derive(Clone)]
pub struct VolunteerService {
    repository: Arc<dyn VolunteerRepository>,
}

impl VolunteerService {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<dyn VolunteerRepository>) -> Self {
        Self { repository }
    }

    fn map_repository_error(error: VolunteerRepositoryError) -> Error {
        match error {
            VolunteerRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("volunteer repository unavailable: {message}"))
            }
            VolunteerRepositoryError::Query { message } => {
                Error::internal(format!("volunteer repository error: {message}"))
            }
        }
    }

    /// Active groups ordered by name.
    pub async fn groups(&self) -> Result<Vec<VolunteerGroup>, Error> {
        self.repository
            .active_groups()
            .await
            .map_err(Self::map_repository_error)
    }

    /// Memberships held by `user`.
    pub async fn memberships(&self, user: UserId) -> Result<Vec<VolunteerMembership>, Error> {
        self.repository
            .memberships_for(user)
            .await
            .map_err(Self::map_repository_error)
    }
}
