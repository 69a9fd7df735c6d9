//! Repository layer for database operations

pub mod books;
pub mod genres;
pub mod librarians;
pub mod magazines;
pub mod publishers;
pub mod records;
pub mod users;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Sqlite, SqlitePool, Transaction,
};
use std::str::FromStr;

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// Embedded schema migrations, applied on connect
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open the connection pool and bring the schema up to date
pub async fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(AppError::from)?
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    Ok(pool)
}

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub publishers: publishers::PublishersRepository,
    pub genres: genres::GenresRepository,
    pub books: books::BooksRepository,
    pub magazines: magazines::MagazinesRepository,
    pub users: users::UsersRepository,
    pub librarians: librarians::LibrariansRepository,
    pub records: records::RecordsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            publishers: publishers::PublishersRepository::new(pool.clone()),
            genres: genres::GenresRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            magazines: magazines::MagazinesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            librarians: librarians::LibrariansRepository::new(pool.clone()),
            records: records::RecordsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a transaction scoped to a single circulation operation.
    /// Dropping it without commit rolls back every mutation made through it.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// True when the database answers a trivial query
    pub async fn ping(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
