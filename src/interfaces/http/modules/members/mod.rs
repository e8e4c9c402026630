//! Member registry endpoints

pub mod dto;
pub mod handlers;

pub use dto::{CreateMemberRequest, MemberDto, SetMemberStatusRequest, UpdateMemberRequest};
pub use handlers::{
    create_member, delete_member, get_member, list_members, set_member_status, update_member,
    MemberHandlerState,
};
