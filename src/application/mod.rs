//! Application layer: services orchestrating repositories and events

pub mod identity;
pub mod services;

pub use identity::UserService;
pub use services::{
    AccountService, BillingService, MemberService, OverdueConfig, OverdueMonitor, ReadingService,
    RegisterReading,
};
