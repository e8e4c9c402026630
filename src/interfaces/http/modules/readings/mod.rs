//! Meter reading endpoints

pub mod dto;
pub mod handlers;

pub use dto::{CreateReadingRequest, ReadingDto};
pub use handlers::{
    create_reading, get_reading, list_member_readings, list_readings, ReadingHandlerState,
};
