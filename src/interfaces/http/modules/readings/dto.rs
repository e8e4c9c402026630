//! Reading DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Reading;

/// Meter reading API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReadingDto {
    pub id: i32,
    pub member_id: i32,
    pub previous_reading: i64,
    pub current_reading: i64,
    pub consumption: i64,
    /// Meter appeared to run backwards; flagged for manual review
    pub anomaly: bool,
    pub reading_date: DateTime<Utc>,
    pub recorded_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Reading> for ReadingDto {
    fn from(r: Reading) -> Self {
        Self {
            id: r.id,
            member_id: r.member_id,
            previous_reading: r.previous_reading,
            current_reading: r.current_reading,
            consumption: r.consumption,
            anomaly: r.anomaly,
            reading_date: r.reading_date,
            recorded_by: r.recorded_by,
            notes: r.notes,
            created_at: r.created_at,
        }
    }
}

/// Register reading request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReadingRequest {
    pub member_id: i32,
    #[validate(range(min = 0, message = "current_reading must be non-negative"))]
    pub current_reading: i64,
    /// When omitted, the member's latest reading (or 0) is used
    #[validate(range(min = 0, message = "previous_reading must be non-negative"))]
    pub previous_reading: Option<i64>,
    /// When omitted, "now"
    pub reading_date: Option<DateTime<Utc>>,
    #[validate(length(min = 1, max = 50, message = "recorded_by is required"))]
    pub recorded_by: String,
    pub notes: Option<String>,
}
