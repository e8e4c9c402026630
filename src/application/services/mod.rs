//! Application services

pub mod accounts;
pub mod billing;
pub mod members;
pub mod overdue_monitor;
pub mod readings;

pub use accounts::{AccountService, ActivityEntry, DashboardStats};
pub use billing::BillingService;
pub use members::MemberService;
pub use overdue_monitor::{OverdueConfig, OverdueMonitor};
pub use readings::{ReadingService, RegisterReading};
