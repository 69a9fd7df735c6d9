//! Librarian account endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::librarian::{CreateLibrarian, Librarian, LibrarianLogin},
};

/// Register a new librarian
#[utoipa::path(
    post,
    path = "/librarians",
    tag = "librarians",
    request_body = CreateLibrarian,
    responses(
        (status = 201, description = "Librarian created", body = Librarian),
        (status = 400, description = "Invalid input or name/email already exists")
    )
)]
pub async fn create_librarian(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateLibrarian>,
) -> AppResult<(StatusCode, Json<Librarian>)> {
    let librarian = state.services.librarians.create(request).await?;
    Ok((StatusCode::CREATED, Json(librarian)))
}

/// List all librarians
#[utoipa::path(
    get,
    path = "/librarians",
    tag = "librarians",
    responses(
        (status = 200, description = "All librarians", body = Vec<Librarian>)
    )
)]
pub async fn list_librarians(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Librarian>>> {
    let librarians = state.services.librarians.list().await?;
    Ok(Json(librarians))
}

/// Verify librarian credentials
#[utoipa::path(
    post,
    path = "/librarians/login",
    tag = "librarians",
    request_body = LibrarianLogin,
    responses(
        (status = 200, description = "Credentials valid", body = Librarian),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LibrarianLogin>,
) -> AppResult<Json<Librarian>> {
    let librarian = state
        .services
        .librarians
        .verify_credentials(&request.email, &request.password)
        .await?;
    Ok(Json(librarian))
}
