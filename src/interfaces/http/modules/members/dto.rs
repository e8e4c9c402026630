//! Member DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Member, MemberStatus};

/// Member (socio) API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MemberDto {
    pub id: i32,
    pub rut: String,
    pub name: String,
    pub address: String,
    pub meter_number: String,
    /// "active" | "overdue" | "inactive"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberDto {
    fn from(m: Member) -> Self {
        Self {
            id: m.id,
            rut: m.rut,
            name: m.name,
            address: m.address,
            meter_number: m.meter_number,
            status: m.status.to_string(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn parse_member_status(s: &str) -> MemberStatus {
    match s {
        "overdue" => MemberStatus::Overdue,
        "inactive" => MemberStatus::Inactive,
        _ => MemberStatus::Active,
    }
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 20, message = "rut is required"))]
    pub rut: String,
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "address is required"))]
    pub address: String,
    #[validate(length(min = 1, max = 50, message = "meter number is required"))]
    pub meter_number: String,
    /// Defaults to "active"
    pub status: Option<String>,
}

/// Update member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub meter_number: Option<String>,
    pub status: Option<String>,
}

/// Explicit status transition request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetMemberStatusRequest {
    /// "active" | "overdue" | "inactive"
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}
