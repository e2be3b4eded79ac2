//! Camping spot model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Camping spot model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CampingSpot {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub price_per_night: Decimal,
    pub facilities: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub spot_type: String,
    pub province: String,
}

/// Camping spot joined with its owner's public contact fields
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SpotWithOwner {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub location: String,
    pub price_per_night: Decimal,
    pub facilities: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub spot_type: String,
    pub province: String,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

/// Create camping spot request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSpotRequest {
    pub owner_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price_per_night: Option<Decimal>,
    pub facilities: Option<String>,
    #[serde(rename = "type")]
    pub spot_type: Option<String>,
    pub province: Option<String>,
}
