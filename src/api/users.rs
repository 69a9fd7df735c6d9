//! Member management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::{
    error::AppResult,
    models::user::{CreateMember, Member},
};

/// Register a new member
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid input or username already exists")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let today = Utc::now().date_naive();
    let member = state.services.members.create(request, today).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// List all members
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All members", body = Vec<Member>)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members.list().await?;
    Ok(Json(members))
}

/// Get member by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Member username")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_by_username(&username).await?;
    Ok(Json(member))
}
