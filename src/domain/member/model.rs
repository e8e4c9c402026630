//! Member (socio) domain entity

use chrono::{DateTime, Utc};

/// Member account status.
///
/// Maintained independently of invoice status: marking a member `Overdue`
/// is an explicit administrative action, never derived automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Overdue,
    Inactive,
}

impl Default for MemberStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Overdue => write!(f, "overdue"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

/// A member (socio) of the water committee.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    /// Chilean tax identifier, unique per member, e.g. "12.345.678-9"
    pub rut: String,
    pub name: String,
    pub address: String,
    pub meter_number: String,
    pub status: MemberStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
