//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::AppState;
use crate::domain::{RegisterRequest, UserDetail, UserResponse};
use crate::errors::AppResult;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user_detail))
        .route("/add", post(add_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>),
        (status = 500, description = "Repository unavailable")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_all().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user details with aggregated cost total
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User detail with total", body = UserDetail),
        (status = 400, description = "Invalid user ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserDetail>> {
    let detail = state.user_service.get_detail(&id).await?;
    Ok(Json(detail))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/add",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error or duplicate user")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
