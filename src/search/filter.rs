//! Filter Resolver
//!
//! Turns the generic filter map into one entity-specific predicate per query.
//!
//! Resolution is strict, short-circuiting precedence: the first key present
//! wins and every later key is ignored. Keys are never combined into AND/OR
//! conjunctions. Per kind the order is `skip`, `search`, the kind's own id,
//! the cross-entity joins, and finally the unfiltered fallback.

use super::types::SearchFilters;

/// Resolved predicate for book queries.
#[derive(Debug, Clone, PartialEq)]
pub enum BookFilter {
    /// Resolve to an empty result without touching the store.
    Skip,
    /// Case-insensitive substring match on the title.
    TitleSearch(String),
    /// Exactly the book with this primary key.
    ById(i64),
    /// Books associated with this author.
    ByAuthor(i64),
    /// Books belonging to this series.
    BySeries(i64),
    /// All books.
    All,
}

/// Resolved predicate for author queries.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorFilter {
    Skip,
    NameSearch(String),
    ById(i64),
    /// Authors associated, through Book, with any id in the set.
    ByBooks(Vec<i64>),
    All,
}

/// Resolved predicate for series queries.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesFilter {
    Skip,
    TitleSearch(String),
    ById(i64),
    /// Series this author contributed to, through Book.
    ByAuthor(i64),
    /// Series containing any book id in the set.
    ByBooks(Vec<i64>),
    All,
}

/// Result ordering for preview queries. Ties always break by ascending
/// primary key, so equal sort keys keep a stable order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SortOrder {
    /// Ascending by primary key, the default.
    #[default]
    IdAsc,
    /// Descending lexicographic by display name or title.
    NameDesc,
}

/// The `search` key counts only when present and non-empty.
fn active_search(filters: &SearchFilters) -> Option<&str> {
    filters.search.as_deref().filter(|needle| !needle.is_empty())
}

pub fn resolve_book_filter(filters: &SearchFilters) -> BookFilter {
    if filters.skip == Some(true) {
        return BookFilter::Skip;
    }
    if let Some(needle) = active_search(filters) {
        return BookFilter::TitleSearch(needle.to_string());
    }
    if let Some(id) = filters.book_id {
        return BookFilter::ById(id);
    }
    if let Some(id) = filters.author_id {
        return BookFilter::ByAuthor(id);
    }
    if let Some(id) = filters.series_id {
        return BookFilter::BySeries(id);
    }
    BookFilter::All
}

pub fn resolve_author_filter(filters: &SearchFilters) -> AuthorFilter {
    if filters.skip == Some(true) {
        return AuthorFilter::Skip;
    }
    if let Some(needle) = active_search(filters) {
        return AuthorFilter::NameSearch(needle.to_string());
    }
    if let Some(id) = filters.author_id {
        return AuthorFilter::ById(id);
    }
    if let Some(book_ids) = &filters.filtered_books {
        return AuthorFilter::ByBooks(book_ids.clone());
    }
    AuthorFilter::All
}

pub fn resolve_series_filter(filters: &SearchFilters) -> SeriesFilter {
    if filters.skip == Some(true) {
        return SeriesFilter::Skip;
    }
    if let Some(needle) = active_search(filters) {
        return SeriesFilter::TitleSearch(needle.to_string());
    }
    if let Some(id) = filters.series_id {
        return SeriesFilter::ById(id);
    }
    if let Some(id) = filters.author_id {
        return SeriesFilter::ByAuthor(id);
    }
    if let Some(book_ids) = &filters.filtered_books {
        return SeriesFilter::ByBooks(book_ids.clone());
    }
    SeriesFilter::All
}

/// Resolves the `sort` key. Unrecognized keys fall back to the default order,
/// the filter surface stays forgiving for callers.
pub fn resolve_sort(filters: &SearchFilters) -> SortOrder {
    match filters.sort.as_deref() {
        Some("name_desc") | Some("title_desc") => SortOrder::NameDesc,
        _ => SortOrder::IdAsc,
    }
}

/// Case-insensitive substring match used by the search predicates.
pub fn matches_search(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(&needle.to_lowercase())
}
