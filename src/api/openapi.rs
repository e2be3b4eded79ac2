//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{bookings, health, spots, users, MessageResponse};
use crate::error::ErrorResponse;
use crate::models::{
    booking::{BookedRange, BookingStatus, CreateBookingRequest, UserBooking},
    spot::{CampingSpot, CreateSpotRequest, SpotWithOwner},
    user::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile, UserRole, UserSummary},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CampSpot API",
        version = "1.0.0",
        description = "Camping Marketplace REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Accounts
        users::register_user,
        users::register_owner,
        users::login_user,
        users::login_owner,
        users::get_user_info,
        users::update_user_info,
        // Spots
        spots::list_spots,
        spots::get_spot,
        spots::list_owner_spots,
        spots::create_spot,
        // Bookings
        bookings::booked_dates,
        bookings::create_booking,
        bookings::get_user_bookings,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            UserProfile,
            UserSummary,
            UserRole,
            users::UserLoginResponse,
            users::OwnerLoginResponse,
            CampingSpot,
            SpotWithOwner,
            CreateSpotRequest,
            BookedRange,
            BookingStatus,
            CreateBookingRequest,
            UserBooking,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "users", description = "Accounts and profiles"),
        (name = "spots", description = "Camping spot listings"),
        (name = "bookings", description = "Booking admission and queries")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
