//! Shared test fixtures: in-memory database, seeded catalog rows and
//! request helpers for router-level tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use tower::ServiceExt;

use biblioteca_server::{
    config::{AppConfig, DatabaseConfig, LoansConfig, LoggingConfig, ServerConfig},
    models::{
        book::{Book, CreateBook},
        genre::CreateGenre,
        magazine::{CreateMagazine, Magazine},
        user::CreateMember,
    },
    repository::{self, Repository},
    services::Services,
    AppState,
};

/// A single connection keeps every handle on the same in-memory database.
pub fn test_database_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    }
}

pub async fn test_services() -> Services {
    let database = test_database_config();
    let pool = repository::connect(&database)
        .await
        .expect("open in-memory database");
    Services::new(Repository::new(pool), LoansConfig::default())
}

pub async fn test_app() -> axum::Router {
    let config = AppConfig {
        server: ServerConfig::default(),
        database: test_database_config(),
        loans: LoansConfig::default(),
        logging: LoggingConfig::default(),
    };
    let pool = repository::connect(&config.database)
        .await
        .expect("open in-memory database");
    let services = Services::new(Repository::new(pool), config.loans.clone());

    biblioteca_server::api::router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
    .merge(biblioteca_server::api::openapi::create_openapi_router())
}

pub fn day(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub async fn seed_member(services: &Services, username: &str) {
    services
        .members
        .create(
            CreateMember {
                username: username.to_string(),
                email: format!("{}@example.org", username),
                address: "12 Harbour Lane".to_string(),
                phone_number: None,
            },
            day("2026-01-01"),
        )
        .await
        .expect("seed member");
}

/// Create a book with its own genre and the given number of copies
pub async fn seed_book(services: &Services, isbn: &str, copies: i64) -> Book {
    let genre = services
        .catalog
        .create_genre(CreateGenre {
            name: format!("genre for {}", isbn),
        })
        .await
        .expect("seed genre");

    services
        .catalog
        .create_book(CreateBook {
            isbn_number: isbn.to_string(),
            title: format!("Book {}", isbn),
            author: None,
            price: 300,
            genre_id: Some(genre.id),
            publisher_id: None,
            available_number: copies,
        })
        .await
        .expect("seed book")
}

pub async fn seed_magazine(services: &Services, issn: &str, copies: i64) -> Magazine {
    let genre = services
        .catalog
        .create_genre(CreateGenre {
            name: format!("genre for {}", issn),
        })
        .await
        .expect("seed genre");

    services
        .catalog
        .create_magazine(CreateMagazine {
            issn_number: issn.to_string(),
            title: format!("Magazine {}", issn),
            editor: None,
            price: 120,
            genre_id: Some(genre.id),
            publisher_id: None,
            available_number: copies,
        })
        .await
        .expect("seed magazine")
}

/// Send a JSON request through the router and decode the JSON response
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("decode body")
    };
    (status, value)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("decode body")
    };
    (status, value)
}
