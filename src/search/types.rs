//! Search Data Types
//!
//! Defines the projection types and Data Transfer Objects (DTOs) for the
//! query API.
//!
//! Two projection depths exist for every entity kind: a *preview* carries just
//! enough to render a list item (ids, display names, image references), a
//! *detail* carries the complete entity with its relations materialized.
//! Heterogeneous results are modeled as tagged unions, so the aggregation
//! output stays statically checkable instead of degrading to loose maps.

use serde::{Deserialize, Serialize};

/// Fallback page size when the client does not send `limit`.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Lightweight author back-reference embedded in previews and series payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthorRef {
    pub id: i64,
    pub name: String,
}

/// Lightweight series back-reference. Carries id/title depth only, never the
/// series' books.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesRef {
    pub id: i64,
    pub title: String,
}

/// Genre tag as returned inside a hydrated book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Edition metadata as returned inside a hydrated book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub id: i64,
    pub publisher: String,
    pub year: Option<u32>,
    pub isbn: Option<String>,
}

// --- Preview projections ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookPreview {
    pub id: i64,
    pub title: String,
    pub skin_image: String,
    pub book_order: Option<i64>,
    pub series: Option<SeriesRef>,
    pub authors: Vec<AuthorRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorPreview {
    pub id: i64,
    pub name: String,
    pub photo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPreview {
    pub id: i64,
    pub title: String,
    pub skin_image: String,
    pub books_count: usize,
    pub authors: Vec<AuthorRef>,
}

// --- Detail projections ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skin_image: String,
    pub book_order: Option<i64>,
    pub genres: Vec<Genre>,
    pub authors: Vec<AuthorDetail>,
    pub series: Option<SeriesRef>,
    pub publications: Vec<Publication>,
}

/// Full author payload. An author hydrates to scalar fields only; books and
/// series never nest an author's own works back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub photo: String,
    pub birthdate: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub skin_image: String,
    pub is_finished: bool,
    pub books_count: usize,
    pub authors: Vec<AuthorDetail>,
}

// --- Tagged unions ---

/// One item of a multi-kind search result. The `type` tag discriminates the
/// payload shape on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHit {
    Book(BookPreview),
    Author(AuthorPreview),
    Series(SeriesPreview),
}

/// A fully hydrated entity, the payload of the single-entity endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEntity {
    Book(BookDetail),
    Author(AuthorDetail),
    Series(SeriesDetail),
}

// --- Request DTOs ---

/// The generic filter map accepted by every preview query.
///
/// All keys are optional; the resolver in `filter` decides which single key
/// wins per entity kind. `filtered_books` is service-internal and only
/// consulted when resolving author and series queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub skip: Option<bool>,
    pub search: Option<String>,
    pub book_id: Option<i64>,
    pub author_id: Option<i64>,
    pub series_id: Option<i64>,
    pub filtered_books: Option<Vec<i64>>,
    pub sort: Option<String>,
}

/// Which entity kinds a main search should fan out over.
#[derive(Debug, Clone, Copy, Default)]
pub struct KindSelection {
    pub find_book: bool,
    pub find_author: bool,
    pub find_series: bool,
}

/// Query parameters of the `/main` endpoint.
#[derive(Debug, Deserialize)]
pub struct MainSearchParams {
    #[serde(default)]
    pub find_book: bool,
    #[serde(default)]
    pub find_author: bool,
    #[serde(default)]
    pub find_series: bool,
    pub skip: Option<bool>,
    pub search: Option<String>,
    pub book_id: Option<i64>,
    pub author_id: Option<i64>,
    pub series_id: Option<i64>,
    pub sort: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl MainSearchParams {
    pub fn selection(&self) -> KindSelection {
        KindSelection {
            find_book: self.find_book,
            find_author: self.find_author,
            find_series: self.find_series,
        }
    }

    /// The shared filter map handed to every invoked kind.
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            skip: self.skip,
            search: self.search.clone(),
            book_id: self.book_id,
            author_id: self.author_id,
            series_id: self.series_id,
            filtered_books: None,
            sort: self.sort.clone(),
        }
    }
}

/// Error payload returned on non-2xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
