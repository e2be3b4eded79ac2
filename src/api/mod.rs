//! API handlers for CampSpot REST endpoints

pub mod bookings;
pub mod health;
pub mod openapi;
pub mod spots;
pub mod users;

use serde::Serialize;
use utoipa::ToSchema;

/// Plain status message body returned by the create endpoints
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
