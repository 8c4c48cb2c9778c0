//! Entity Row Types
//!
//! Defines the stored representation of each catalog entity and the seed
//! document format used to populate the store at startup.

use serde::{Deserialize, Serialize};

/// A book as persisted in the catalog.
///
/// Carries its association sets inline: `author_ids` (many-to-many),
/// `genre_ids`, and an optional `series_id` (a book belongs to at most one
/// series). `book_order` is the position hint within that series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skin_image: String,
    pub book_order: Option<i64>,
    pub series_id: Option<i64>,
    pub author_ids: Vec<i64>,
    pub genre_ids: Vec<i64>,
}

/// An author as persisted in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub photo: String,
    /// ISO-8601 date string, unknown for some authors.
    pub birthdate: Option<String>,
    pub country: Option<String>,
}

/// A series as persisted in the catalog.
///
/// The series' author set and book count are never stored; both are derived
/// from the books referencing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skin_image: String,
    pub is_finished: bool,
}

/// A genre tag referenced by books.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreRow {
    pub id: i64,
    pub name: String,
}

/// Edition metadata attached to a single book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationRow {
    pub id: i64,
    pub book_id: i64,
    pub publisher: String,
    pub year: Option<u32>,
    pub isbn: Option<String>,
}

/// The seed document loaded into the store at startup.
///
/// Mirrors the table layout one-to-one so a catalog dump can be written by
/// hand or exported from the upstream system without translation.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub books: Vec<BookRow>,
    #[serde(default)]
    pub authors: Vec<AuthorRow>,
    #[serde(default)]
    pub series: Vec<SeriesRow>,
    #[serde(default)]
    pub genres: Vec<GenreRow>,
    #[serde(default)]
    pub publications: Vec<PublicationRow>,
}
