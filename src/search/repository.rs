use super::filter::{
    AuthorFilter, BookFilter, SeriesFilter, SortOrder, matches_search, resolve_author_filter,
    resolve_book_filter, resolve_series_filter, resolve_sort,
};
use super::types::{
    AuthorDetail, AuthorPreview, AuthorRef, BookDetail, BookPreview, Genre, Publication,
    SearchFilters, SeriesDetail, SeriesPreview, SeriesRef,
};
use crate::store::memory::CatalogStore;
use crate::store::types::{AuthorRow, BookRow, SeriesRow};
use anyhow::Result;
use std::collections::BTreeSet;
use std::sync::Arc;

/// The preview query engine and detail hydrator.
///
/// Every query resolves its filter map to a single predicate, evaluates it
/// against the store, and maps matched rows to projections. Relation joins
/// are strict: a dangling reference fails the whole call instead of
/// producing a partially populated projection.
pub struct SearchRepository {
    store: Arc<CatalogStore>,
}

impl SearchRepository {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    // --- Preview queries ---

    pub async fn get_filtered_books(
        &self,
        filters: &SearchFilters,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<BookPreview>> {
        let rows = match resolve_book_filter(filters) {
            BookFilter::Skip => Vec::new(),
            BookFilter::TitleSearch(needle) => self
                .store
                .scan_books()
                .into_iter()
                .filter(|book| matches_search(&book.title, &needle))
                .collect(),
            BookFilter::ById(id) => self.store.book(id).into_iter().collect(),
            BookFilter::ByAuthor(author_id) => self
                .store
                .scan_books()
                .into_iter()
                .filter(|book| book.author_ids.contains(&author_id))
                .collect(),
            BookFilter::BySeries(series_id) => self.store.books_in_series(series_id),
            BookFilter::All => self.store.scan_books(),
        };

        let rows = order_and_page(
            rows,
            resolve_sort(filters),
            offset,
            limit,
            |book| book.id,
            |book| book.title.as_str(),
        );
        rows.into_iter().map(|row| self.book_preview(row)).collect()
    }

    pub async fn get_filtered_authors(
        &self,
        filters: &SearchFilters,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<AuthorPreview>> {
        let rows = match resolve_author_filter(filters) {
            AuthorFilter::Skip => Vec::new(),
            AuthorFilter::NameSearch(needle) => self
                .store
                .scan_authors()
                .into_iter()
                .filter(|author| matches_search(&author.name, &needle))
                .collect(),
            AuthorFilter::ById(id) => self.store.author(id).into_iter().collect(),
            AuthorFilter::ByBooks(book_ids) => self.authors_of_books(&book_ids)?,
            AuthorFilter::All => self.store.scan_authors(),
        };

        let rows = order_and_page(
            rows,
            resolve_sort(filters),
            offset,
            limit,
            |author| author.id,
            |author| author.name.as_str(),
        );
        Ok(rows.into_iter().map(author_preview).collect())
    }

    pub async fn get_filtered_series(
        &self,
        filters: &SearchFilters,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<SeriesPreview>> {
        let rows = match resolve_series_filter(filters) {
            SeriesFilter::Skip => Vec::new(),
            SeriesFilter::TitleSearch(needle) => self
                .store
                .scan_series()
                .into_iter()
                .filter(|series| matches_search(&series.title, &needle))
                .collect(),
            SeriesFilter::ById(id) => self.store.series(id).into_iter().collect(),
            SeriesFilter::ByAuthor(author_id) => {
                let series_ids: BTreeSet<i64> = self
                    .store
                    .scan_books()
                    .into_iter()
                    .filter(|book| book.author_ids.contains(&author_id))
                    .filter_map(|book| book.series_id)
                    .collect();
                self.series_rows(&series_ids)?
            }
            SeriesFilter::ByBooks(book_ids) => {
                let series_ids: BTreeSet<i64> = book_ids
                    .iter()
                    .filter_map(|&book_id| self.store.book(book_id))
                    .filter_map(|book| book.series_id)
                    .collect();
                self.series_rows(&series_ids)?
            }
            SeriesFilter::All => self.store.scan_series(),
        };

        let rows = order_and_page(
            rows,
            resolve_sort(filters),
            offset,
            limit,
            |series| series.id,
            |series| series.title.as_str(),
        );
        rows.into_iter().map(|row| self.series_preview(row)).collect()
    }

    // --- Detail hydration ---

    pub async fn get_full_book(&self, id: i64) -> Result<Option<BookDetail>> {
        let Some(row) = self.store.book(id) else {
            return Ok(None);
        };

        let genres = row
            .genre_ids
            .iter()
            .map(|&genre_id| {
                self.store
                    .genre(genre_id)
                    .map(|genre| Genre {
                        id: genre.id,
                        name: genre.name,
                    })
                    .ok_or_else(|| anyhow::anyhow!("book {} references missing genre {}", id, genre_id))
            })
            .collect::<Result<Vec<Genre>>>()?;

        let authors = self
            .author_rows(&row.author_ids)?
            .into_iter()
            .map(author_detail)
            .collect();

        let series = self.series_ref(&row)?;

        let publications = self
            .store
            .publications_of(id)
            .into_iter()
            .map(|publication| Publication {
                id: publication.id,
                publisher: publication.publisher,
                year: publication.year,
                isbn: publication.isbn,
            })
            .collect();

        Ok(Some(BookDetail {
            id: row.id,
            title: row.title,
            description: row.description,
            skin_image: row.skin_image,
            book_order: row.book_order,
            genres,
            authors,
            series,
            publications,
        }))
    }

    pub async fn get_full_author(&self, id: i64) -> Result<Option<AuthorDetail>> {
        Ok(self.store.author(id).map(author_detail))
    }

    pub async fn get_full_series(&self, id: i64) -> Result<Option<SeriesDetail>> {
        let Some(row) = self.store.series(id) else {
            return Ok(None);
        };

        let books = self.store.books_in_series(id);
        let books_count = books.len();
        let author_ids: BTreeSet<i64> = books
            .iter()
            .flat_map(|book| book.author_ids.iter().copied())
            .collect();
        let authors = self
            .author_rows(&author_ids.into_iter().collect::<Vec<i64>>())?
            .into_iter()
            .map(author_detail)
            .collect();

        Ok(Some(SeriesDetail {
            id: row.id,
            title: row.title,
            description: row.description,
            skin_image: row.skin_image,
            is_finished: row.is_finished,
            books_count,
            authors,
        }))
    }

    // --- Projection helpers ---

    fn book_preview(&self, row: BookRow) -> Result<BookPreview> {
        let series = self.series_ref(&row)?;
        let authors = self
            .author_rows(&row.author_ids)?
            .into_iter()
            .map(|author| AuthorRef {
                id: author.id,
                name: author.name,
            })
            .collect();

        Ok(BookPreview {
            id: row.id,
            title: row.title,
            skin_image: row.skin_image,
            book_order: row.book_order,
            series,
            authors,
        })
    }

    fn series_preview(&self, row: SeriesRow) -> Result<SeriesPreview> {
        let books = self.store.books_in_series(row.id);
        let author_ids: BTreeSet<i64> = books
            .iter()
            .flat_map(|book| book.author_ids.iter().copied())
            .collect();
        let authors = self
            .author_rows(&author_ids.into_iter().collect::<Vec<i64>>())?
            .into_iter()
            .map(|author| AuthorRef {
                id: author.id,
                name: author.name,
            })
            .collect();

        Ok(SeriesPreview {
            id: row.id,
            title: row.title,
            skin_image: row.skin_image,
            books_count: books.len(),
            authors,
        })
    }

    /// The authors of all books in the set, deduplicated, ascending by id.
    fn authors_of_books(&self, book_ids: &[i64]) -> Result<Vec<AuthorRow>> {
        let author_ids: BTreeSet<i64> = book_ids
            .iter()
            .filter_map(|&book_id| self.store.book(book_id))
            .flat_map(|book| book.author_ids)
            .collect();
        self.author_rows(&author_ids.into_iter().collect::<Vec<i64>>())
    }

    /// Fetches every author row or fails on the first dangling reference.
    fn author_rows(&self, ids: &[i64]) -> Result<Vec<AuthorRow>> {
        ids.iter()
            .map(|&author_id| {
                self.store
                    .author(author_id)
                    .ok_or_else(|| anyhow::anyhow!("missing author row {}", author_id))
            })
            .collect()
    }

    fn series_rows(&self, ids: &BTreeSet<i64>) -> Result<Vec<SeriesRow>> {
        ids.iter()
            .map(|&series_id| {
                self.store
                    .series(series_id)
                    .ok_or_else(|| anyhow::anyhow!("missing series row {}", series_id))
            })
            .collect()
    }

    fn series_ref(&self, row: &BookRow) -> Result<Option<SeriesRef>> {
        match row.series_id {
            Some(series_id) => {
                let series = self.store.series(series_id).ok_or_else(|| {
                    anyhow::anyhow!("book {} references missing series {}", row.id, series_id)
                })?;
                Ok(Some(SeriesRef {
                    id: series.id,
                    title: series.title,
                }))
            }
            None => Ok(None),
        }
    }
}

fn author_preview(row: AuthorRow) -> AuthorPreview {
    AuthorPreview {
        id: row.id,
        name: row.name,
        photo: row.photo,
    }
}

fn author_detail(row: AuthorRow) -> AuthorDetail {
    AuthorDetail {
        id: row.id,
        name: row.name,
        description: row.description,
        photo: row.photo,
        birthdate: row.birthdate,
        country: row.country,
    }
}

/// Sorts matched rows and applies offset-based pagination.
///
/// Equal sort keys keep a stable order: ties always break by ascending
/// primary key.
fn order_and_page<T>(
    mut rows: Vec<T>,
    sort: SortOrder,
    offset: usize,
    limit: usize,
    id_of: impl Fn(&T) -> i64,
    label_of: impl Fn(&T) -> &str,
) -> Vec<T> {
    match sort {
        SortOrder::IdAsc => rows.sort_by_key(|row| id_of(row)),
        SortOrder::NameDesc => rows.sort_by(|a, b| {
            label_of(b)
                .cmp(label_of(a))
                .then_with(|| id_of(a).cmp(&id_of(b)))
        }),
    }
    rows.into_iter().skip(offset).take(limit).collect()
}
