//! Member aggregate

pub mod model;
pub mod repository;

pub use model::{Member, MemberStatus};
pub use repository::{MemberPatch, MemberRepository, NewMember};
