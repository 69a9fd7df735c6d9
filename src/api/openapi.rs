//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{books, genres, health, librarians, loans, magazines, publishers, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca API",
        version = "0.3.0",
        description = "Library Circulation Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Catalog
        publishers::create_publisher,
        publishers::list_publishers,
        publishers::get_publisher,
        genres::create_genre,
        genres::list_genres,
        genres::get_genre,
        books::create_book,
        books::list_books,
        books::get_book,
        magazines::create_magazine,
        magazines::list_magazines,
        magazines::get_magazine,
        // Members
        users::create_user,
        users::list_users,
        users::get_user,
        // Librarians
        librarians::create_librarian,
        librarians::list_librarians,
        librarians::login,
        // Circulation
        loans::issue_book,
        loans::return_book,
        loans::issue_magazine,
        loans::return_magazine,
        loans::get_user_loans,
        loans::get_user_records,
        loans::list_open_loans,
    ),
    components(
        schemas(
            // Catalog
            crate::models::publisher::Publisher,
            crate::models::publisher::CreatePublisher,
            crate::models::genre::Genre,
            crate::models::genre::CreateGenre,
            crate::models::book::Book,
            crate::models::book::CreateBook,
            crate::models::magazine::Magazine,
            crate::models::magazine::CreateMagazine,
            // Members
            crate::models::user::Member,
            crate::models::user::CreateMember,
            // Librarians
            crate::models::librarian::Librarian,
            crate::models::librarian::CreateLibrarian,
            crate::models::librarian::LibrarianLogin,
            // Circulation
            crate::models::record::Record,
            crate::models::record::LoanDetails,
            loans::IssueBookRequest,
            loans::ReturnBookRequest,
            loans::IssueMagazineRequest,
            loans::ReturnMagazineRequest,
            loans::IssueResponse,
            loans::ReturnResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "catalog", description = "Publisher, genre, book and magazine management"),
        (name = "users", description = "Member management"),
        (name = "librarians", description = "Librarian accounts"),
        (name = "loans", description = "Circulation: issue and return")
    )
)]
pub struct ApiDoc;

/// Router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
