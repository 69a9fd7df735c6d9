//! API handlers for the Biblioteca REST endpoints

pub mod books;
pub mod genres;
pub mod health;
pub mod librarians;
pub mod loans;
pub mod magazines;
pub mod openapi;
pub mod publishers;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// API v1 router; the binary nests it under /api/v1
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route(
            "/publishers",
            post(publishers::create_publisher).get(publishers::list_publishers),
        )
        .route("/publishers/:id", get(publishers::get_publisher))
        .route("/genres", post(genres::create_genre).get(genres::list_genres))
        .route("/genres/:id", get(genres::get_genre))
        .route("/books", post(books::create_book).get(books::list_books))
        .route("/books/:isbn", get(books::get_book))
        .route(
            "/magazines",
            post(magazines::create_magazine).get(magazines::list_magazines),
        )
        .route("/magazines/:issn", get(magazines::get_magazine))
        // Members
        .route("/users", post(users::create_user).get(users::list_users))
        .route("/users/:username", get(users::get_user))
        .route("/users/:username/loans", get(loans::get_user_loans))
        .route("/users/:username/records", get(loans::get_user_records))
        // Librarians
        .route(
            "/librarians",
            post(librarians::create_librarian).get(librarians::list_librarians),
        )
        .route("/librarians/login", post(librarians::login))
        // Circulation
        .route("/loans", get(loans::list_open_loans))
        .route("/loans/books", post(loans::issue_book))
        .route("/loans/books/return", post(loans::return_book))
        .route("/loans/magazines", post(loans::issue_magazine))
        .route("/loans/magazines/return", post(loans::return_magazine))
        .with_state(state)
}
