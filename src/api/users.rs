//! Account endpoints: registration, login and profile

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{
        LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile, UserRole, UserSummary,
    },
};

use super::MessageResponse;

/// User login response
#[derive(Serialize, ToSchema)]
pub struct UserLoginResponse {
    pub user: UserSummary,
}

/// Owner login response
#[derive(Serialize, ToSchema)]
pub struct OwnerLoginResponse {
    pub owner: UserSummary,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn register_user(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.users.register(request, None).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Register a new owner account; the role is forced regardless of payload
#[utoipa::path(
    post,
    path = "/owners",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Owner registered", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn register_owner(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .services
        .users
        .register(request, Some(UserRole::Owner))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Owner registered successfully")),
    ))
}

/// Log a user in
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserLoginResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 404, description = "User not found")
    )
)]
pub async fn login_user(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<UserLoginResponse>> {
    let user = state
        .services
        .users
        .login(&request.email, &request.password, UserRole::User)
        .await?;

    Ok(Json(UserLoginResponse { user }))
}

/// Log an owner in
#[utoipa::path(
    post,
    path = "/owners/login",
    tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = OwnerLoginResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 404, description = "Owner not found")
    )
)]
pub async fn login_owner(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<OwnerLoginResponse>> {
    let owner = state
        .services
        .users
        .login(&request.email, &request.password, UserRole::Owner)
        .await?;

    Ok(Json(OwnerLoginResponse { owner }))
}

/// Get profile fields for the account page
#[utoipa::path(
    get,
    path = "/user-info/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Profile fields", body = UserProfile),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_info(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let profile = state.services.users.get_profile(user_id).await?;
    Ok(Json(profile))
}

/// Update profile fields
#[utoipa::path(
    put,
    path = "/user-info/{user_id}",
    tag = "users",
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = MessageResponse),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user_info(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
    Json(request): Json<UpdateProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.services.users.update_profile(user_id, request).await?;

    Ok(Json(MessageResponse::new("Profile updated successfully")))
}
