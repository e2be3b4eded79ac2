//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{BookedRange, CreateBookingRequest, UserBooking},
};

use super::MessageResponse;

/// Booked date ranges for a spot, date-only, for the booking calendar
#[utoipa::path(
    get,
    path = "/booked-dates/{spot_id}",
    tag = "bookings",
    params(
        ("spot_id" = i32, Path, description = "Camping spot ID")
    ),
    responses(
        (status = 200, description = "Booked date ranges", body = Vec<BookedRange>),
        (status = 500, description = "Storage error")
    )
)]
pub async fn booked_dates(
    State(state): State<crate::AppState>,
    Path(spot_id): Path<i32>,
) -> AppResult<Json<Vec<BookedRange>>> {
    let ranges = state.services.bookings.booked_dates(spot_id).await?;
    Ok(Json(ranges))
}

/// Request a booking; runs the admission check against existing bookings
/// for the spot
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = MessageResponse),
        (status = 400, description = "Missing field or dates already booked"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.bookings.request_booking(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Booking created successfully")),
    ))
}

/// All bookings for a user, joined with spot name and location
#[utoipa::path(
    get,
    path = "/bookings/{user_id}",
    tag = "bookings",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's bookings", body = Vec<UserBooking>),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_user_bookings(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<UserBooking>>> {
    let bookings = state.services.bookings.get_user_bookings(user_id).await?;
    Ok(Json(bookings))
}
