//! Shared item view for the loan ledger

use sqlx::FromRow;

/// Which circulating item table a loan targets. Books and magazines are
/// interchangeable for ledger purposes aside from their key type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Book,
    Magazine,
}

impl ItemKind {
    /// Item table name
    pub fn table(self) -> &'static str {
        match self {
            ItemKind::Book => "books",
            ItemKind::Magazine => "magazines",
        }
    }

    /// Natural-key column on the item table
    pub fn key_column(self) -> &'static str {
        match self {
            ItemKind::Book => "isbn_number",
            ItemKind::Magazine => "issn_number",
        }
    }

    /// Foreign-key column on the records table
    pub fn record_column(self) -> &'static str {
        match self {
            ItemKind::Book => "book_id",
            ItemKind::Magazine => "magazine_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Book => "book",
            ItemKind::Magazine => "magazine",
        }
    }

    pub fn key_label(self) -> &'static str {
        match self {
            ItemKind::Book => "ISBN number",
            ItemKind::Magazine => "ISSN number",
        }
    }
}

/// The columns the loan ledger needs, identical for books and magazines
#[derive(Debug, Clone, FromRow)]
pub struct ItemSummary {
    pub key: String,
    pub title: String,
    pub genre_id: Option<i64>,
    pub available_number: i64,
}
