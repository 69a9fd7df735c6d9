//! Magazine catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::magazine::{CreateMagazine, Magazine},
};

/// Add a magazine to the catalog
#[utoipa::path(
    post,
    path = "/magazines",
    tag = "catalog",
    request_body = CreateMagazine,
    responses(
        (status = 201, description = "Magazine created", body = Magazine),
        (status = 400, description = "Invalid input or ISSN already exists"),
        (status = 404, description = "Referenced genre or publisher not found")
    )
)]
pub async fn create_magazine(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateMagazine>,
) -> AppResult<(StatusCode, Json<Magazine>)> {
    let magazine = state.services.catalog.create_magazine(request).await?;
    Ok((StatusCode::CREATED, Json(magazine)))
}

/// List all magazines
#[utoipa::path(
    get,
    path = "/magazines",
    tag = "catalog",
    responses(
        (status = 200, description = "All magazines", body = Vec<Magazine>)
    )
)]
pub async fn list_magazines(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Magazine>>> {
    let magazines = state.services.catalog.list_magazines().await?;
    Ok(Json(magazines))
}

/// Get magazine by ISSN
#[utoipa::path(
    get,
    path = "/magazines/{issn}",
    tag = "catalog",
    params(
        ("issn" = String, Path, description = "ISSN number")
    ),
    responses(
        (status = 200, description = "Magazine details", body = Magazine),
        (status = 404, description = "Magazine not found")
    )
)]
pub async fn get_magazine(
    State(state): State<crate::AppState>,
    Path(issn): Path<String>,
) -> AppResult<Json<Magazine>> {
    let magazine = state.services.catalog.get_magazine(&issn).await?;
    Ok(Json(magazine))
}
