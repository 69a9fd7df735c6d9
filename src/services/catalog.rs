//! Catalog service: publishers, genres, books and magazines

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook},
        genre::{CreateGenre, Genre},
        magazine::{CreateMagazine, Magazine},
        publisher::{CreatePublisher, Publisher},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create_publisher(&self, request: CreatePublisher) -> AppResult<Publisher> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.publishers.create(&request).await
    }

    pub async fn list_publishers(&self) -> AppResult<Vec<Publisher>> {
        self.repository.publishers.list().await
    }

    pub async fn get_publisher(&self, id: i64) -> AppResult<Publisher> {
        self.repository.publishers.get_by_id(id).await
    }

    pub async fn create_genre(&self, request: CreateGenre) -> AppResult<Genre> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.genres.create(&request).await
    }

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres.list().await
    }

    pub async fn get_genre(&self, id: i64) -> AppResult<Genre> {
        self.repository.genres.get_by_id(id).await
    }

    /// Create a book. Referenced genre and publisher must already exist.
    pub async fn create_book(&self, request: CreateBook) -> AppResult<Book> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.check_references(request.genre_id, request.publisher_id)
            .await?;
        self.repository.books.create(&request).await
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    pub async fn get_book(&self, isbn: &str) -> AppResult<Book> {
        self.repository.books.get_by_isbn(isbn).await
    }

    /// Create a magazine. Referenced genre and publisher must already exist.
    pub async fn create_magazine(&self, request: CreateMagazine) -> AppResult<Magazine> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.check_references(request.genre_id, request.publisher_id)
            .await?;
        self.repository.magazines.create(&request).await
    }

    pub async fn list_magazines(&self) -> AppResult<Vec<Magazine>> {
        self.repository.magazines.list().await
    }

    pub async fn get_magazine(&self, issn: &str) -> AppResult<Magazine> {
        self.repository.magazines.get_by_issn(issn).await
    }

    async fn check_references(
        &self,
        genre_id: Option<i64>,
        publisher_id: Option<i64>,
    ) -> AppResult<()> {
        if let Some(genre_id) = genre_id {
            self.repository.genres.get_by_id(genre_id).await?;
        }
        if let Some(publisher_id) = publisher_id {
            self.repository.publishers.get_by_id(publisher_id).await?;
        }
        Ok(())
    }
}
