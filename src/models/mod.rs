//! Database models and API types

pub mod booking;
pub mod spot;
pub mod user;
