//! Booking model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Which overlap test the admission check applies.
///
/// The legacy test only checks whether either requested endpoint lands
/// inside an existing booking, which misses a request that strictly
/// contains an existing stay. Both behaviors are selectable so clients
/// relying on the legacy wire behavior keep seeing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Conflict iff a requested endpoint falls inclusively within an
    /// existing range (compatibility default)
    LegacyPartial,
    /// Conflict iff the intervals intersect at all
    FullInterval,
}

impl OverlapPolicy {
    /// Does the requested stay `[req_start, req_end]` conflict with an
    /// existing booking `[start, end]`? All bounds inclusive.
    pub fn conflicts(
        self,
        start: NaiveDate,
        end: NaiveDate,
        req_start: NaiveDate,
        req_end: NaiveDate,
    ) -> bool {
        match self {
            OverlapPolicy::LegacyPartial => {
                (req_start >= start && req_start <= end) || (req_end >= start && req_end <= end)
            }
            OverlapPolicy::FullInterval => req_start <= end && req_end >= start,
        }
    }
}

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Booking model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub camping_spot_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: BookingStatus,
}

/// Create booking request
///
/// Fields are optional at the serde level so a missing field surfaces as a
/// 400 with a message instead of a body-rejection error.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    pub user_id: Option<i32>,
    pub camping_spot_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

/// Validated booking creation payload handed to the admission check
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub camping_spot_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: BookingStatus,
}

/// A booked date range, date-only, used by clients to grey out unavailable
/// dates before submitting a booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookedRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A user's booking joined with its camping spot
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserBooking {
    pub id: i32,
    pub spot_name: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: BookingStatus,
}
