//! Dashboard endpoints

pub mod dto;
pub mod handlers;

pub use dto::{ActivityDto, DashboardSummaryDto};
pub use handlers::{dashboard_summary, recent_activity, DashboardState};
