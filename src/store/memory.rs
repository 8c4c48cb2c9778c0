use super::types::{AuthorRow, BookRow, CatalogData, GenreRow, PublicationRow, SeriesRow};
use dashmap::DashMap;

/// In-memory relational store for the catalog.
///
/// One keyed table per entity kind. Rows are cloned out on every read, so the
/// maps are never borrowed across calls. After `load` the store is treated as
/// read-only; there is no mutation path in the query service.
pub struct CatalogStore {
    books: DashMap<i64, BookRow>,
    authors: DashMap<i64, AuthorRow>,
    series: DashMap<i64, SeriesRow>,
    genres: DashMap<i64, GenreRow>,
    publications: DashMap<i64, PublicationRow>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
            authors: DashMap::new(),
            series: DashMap::new(),
            genres: DashMap::new(),
            publications: DashMap::new(),
        }
    }

    /// Populates the tables from a seed document. Rows with duplicate ids
    /// overwrite earlier ones, last write wins.
    pub fn load(&self, data: CatalogData) {
        for row in data.books {
            self.books.insert(row.id, row);
        }
        for row in data.authors {
            self.authors.insert(row.id, row);
        }
        for row in data.series {
            self.series.insert(row.id, row);
        }
        for row in data.genres {
            self.genres.insert(row.id, row);
        }
        for row in data.publications {
            self.publications.insert(row.id, row);
        }
    }

    pub fn book(&self, id: i64) -> Option<BookRow> {
        self.books.get(&id).map(|row| row.clone())
    }

    pub fn author(&self, id: i64) -> Option<AuthorRow> {
        self.authors.get(&id).map(|row| row.clone())
    }

    pub fn series(&self, id: i64) -> Option<SeriesRow> {
        self.series.get(&id).map(|row| row.clone())
    }

    pub fn genre(&self, id: i64) -> Option<GenreRow> {
        self.genres.get(&id).map(|row| row.clone())
    }

    pub fn scan_books(&self) -> Vec<BookRow> {
        self.books.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn scan_authors(&self) -> Vec<AuthorRow> {
        self.authors.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn scan_series(&self) -> Vec<SeriesRow> {
        self.series.iter().map(|entry| entry.value().clone()).collect()
    }

    /// All books whose `series_id` matches, in no particular order.
    pub fn books_in_series(&self, series_id: i64) -> Vec<BookRow> {
        self.books
            .iter()
            .filter(|entry| entry.value().series_id == Some(series_id))
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// All publications attached to a book, ascending by publication id.
    pub fn publications_of(&self, book_id: i64) -> Vec<PublicationRow> {
        let mut rows: Vec<PublicationRow> = self
            .publications
            .iter()
            .filter(|entry| entry.value().book_id == book_id)
            .map(|entry| entry.value().clone())
            .collect();
        rows.sort_by_key(|row| row.id);
        rows
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
