//! Booking admission service
//!
//! The admission check decides whether a requested stay may be created by
//! testing it for date overlap against the spot's existing non-cancelled
//! bookings.

use crate::{
    config::BookingsConfig,
    error::{AppError, AppResult},
    models::booking::{
        BookedRange, BookingStatus, CreateBookingRequest, NewBooking, OverlapPolicy, UserBooking,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    policy: OverlapPolicy,
}

impl BookingsService {
    pub fn new(repository: Repository, config: BookingsConfig) -> Self {
        Self {
            repository,
            policy: config.overlap_policy,
        }
    }

    /// Run the admission check for a requested stay and insert the booking
    /// if it passes; returns the new booking's id
    pub async fn request_booking(&self, request: CreateBookingRequest) -> AppResult<i32> {
        let booking = NewBooking {
            user_id: require(request.user_id, "user_id")?,
            camping_spot_id: require(request.camping_spot_id, "camping_spot_id")?,
            start_date: require(request.start_date, "start_date")?,
            end_date: require(request.end_date, "end_date")?,
            status: request.status.unwrap_or(BookingStatus::Pending),
        };

        self.repository.bookings.create(&booking, self.policy).await
    }

    /// Booked date ranges for a spot; advisory, the admission check is the
    /// authority
    pub async fn booked_dates(&self, spot_id: i32) -> AppResult<Vec<BookedRange>> {
        self.repository.bookings.booked_ranges(spot_id).await
    }

    /// Bookings for a user joined with spot details
    pub async fn get_user_bookings(&self, user_id: i32) -> AppResult<Vec<UserBooking>> {
        self.repository.bookings.get_user_bookings(user_id).await
    }
}

fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {}", field)))
}
