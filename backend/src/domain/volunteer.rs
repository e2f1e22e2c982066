//! Volunteer groups and the members assigned to them.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A volunteer group managed by editors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerGroup {
    /// Storage identity.
    pub id: i64,
    /// Unique display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Stored logo path, if any.
    pub logo: Option<String>,
}

/// Role a member holds inside a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolunteerRole {
    /// Regular member.
    #[default]
    Member,
    /// Group lead.
    Lead,
    /// Cross-group coordinator.
    Coordinator,
}

/// Returned when a stored role is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown volunteer role: {0}")]
pub struct UnknownVolunteerRole(pub String);

impl FromStr for VolunteerRole {
    type Err = UnknownVolunteerRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "member" => Ok(Self::Member),
            "lead" => Ok(Self::Lead),
            "coordinator" => Ok(Self::Coordinator),
            other => Err(UnknownVolunteerRole(other.to_owned())),
        }
    }
}

/// A member's place in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerMembership {
    /// Group identity.
    pub group_id: i64,
    /// Group display name.
    pub group_name: String,
    /// Role held.
    pub role: VolunteerRole,
    /// When the member joined.
    pub added_at: DateTime<Utc>,
}
