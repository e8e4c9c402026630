//! Dashboard DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::services::accounts::{ActivityEntry, DashboardStats};
use crate::interfaces::http::modules::invoices::AccountSummaryDto;

/// Headline numbers for the landing page
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub total_members: u64,
    pub active_members: u64,
    pub overdue_members: u64,
    /// Total consumption (m3) registered this calendar month
    pub monthly_consumption: i64,
    pub readings_this_month: u64,
    /// Active members still without a reading this month
    pub pending_readings: u64,
    pub billing: AccountSummaryDto,
}

impl From<DashboardStats> for DashboardSummaryDto {
    fn from(s: DashboardStats) -> Self {
        Self {
            total_members: s.total_members,
            active_members: s.active_members,
            overdue_members: s.overdue_members,
            monthly_consumption: s.monthly_consumption,
            readings_this_month: s.readings_this_month,
            pending_readings: s.pending_readings,
            billing: AccountSummaryDto::from(s.billing),
        }
    }
}

/// One row of the recent-activity feed
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    /// "member" | "reading" | "payment"
    pub kind: String,
    pub description: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityEntry> for ActivityDto {
    fn from(e: ActivityEntry) -> Self {
        Self {
            kind: e.kind.to_string(),
            description: e.description,
            detail: e.detail,
            timestamp: e.timestamp,
        }
    }
}
