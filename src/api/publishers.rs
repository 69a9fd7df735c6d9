//! Publisher endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::publisher::{CreatePublisher, Publisher},
};

/// Create a new publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "catalog",
    request_body = CreatePublisher,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Invalid input or name already exists")
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    Json(request): Json<CreatePublisher>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let publisher = state.services.catalog.create_publisher(request).await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "catalog",
    responses(
        (status = 200, description = "All publishers", body = Vec<Publisher>)
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state.services.catalog.list_publishers().await?;
    Ok(Json(publishers))
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "catalog",
    params(
        ("id" = i64, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 404, description = "Publisher not found")
    )
)]
pub async fn get_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.catalog.get_publisher(id).await?;
    Ok(Json(publisher))
}
