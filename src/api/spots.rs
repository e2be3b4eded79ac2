//! Camping spot endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::spot::{CampingSpot, CreateSpotRequest, SpotWithOwner},
};

use super::MessageResponse;

/// List all camping spots with owner contact details
#[utoipa::path(
    get,
    path = "/campingspots",
    tag = "spots",
    responses(
        (status = 200, description = "All camping spots", body = Vec<SpotWithOwner>),
        (status = 500, description = "Storage error")
    )
)]
pub async fn list_spots(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<SpotWithOwner>>> {
    let spots = state.services.spots.get_all().await?;
    Ok(Json(spots))
}

/// Get a camping spot by ID
#[utoipa::path(
    get,
    path = "/campingspots/{spot_id}",
    tag = "spots",
    params(
        ("spot_id" = i32, Path, description = "Camping spot ID")
    ),
    responses(
        (status = 200, description = "Camping spot", body = SpotWithOwner),
        (status = 404, description = "Camping spot not found")
    )
)]
pub async fn get_spot(
    State(state): State<crate::AppState>,
    Path(spot_id): Path<i32>,
) -> AppResult<Json<SpotWithOwner>> {
    let spot = state.services.spots.get_by_id(spot_id).await?;
    Ok(Json(spot))
}

/// List an owner's camping spots
#[utoipa::path(
    get,
    path = "/owner/campingspots/{owner_id}",
    tag = "spots",
    params(
        ("owner_id" = i32, Path, description = "Owner ID")
    ),
    responses(
        (status = 200, description = "Owner's camping spots", body = Vec<CampingSpot>),
        (status = 500, description = "Storage error")
    )
)]
pub async fn list_owner_spots(
    State(state): State<crate::AppState>,
    Path(owner_id): Path<i32>,
) -> AppResult<Json<Vec<CampingSpot>>> {
    let spots = state.services.spots.get_by_owner(owner_id).await?;
    Ok(Json(spots))
}

/// Create a new camping spot listing
#[utoipa::path(
    post,
    path = "/owner/campingspots",
    tag = "spots",
    request_body = CreateSpotRequest,
    responses(
        (status = 201, description = "Camping spot created", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn create_spot(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateSpotRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.spots.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Camping spot created successfully")),
    ))
}
