//! Store Module Tests
//!
//! Validates table mechanics of the in-memory entity store.
//!
//! ## Test Scopes
//! - **Lookup**: Single-row fetch by primary key, present and absent.
//! - **Scans**: Full-table scans and the association scans used for joins.
//! - **Seeding**: Loading a `CatalogData` document, including overwrite
//!   semantics and empty sections.

#[cfg(test)]
mod tests {
    use crate::store::memory::CatalogStore;
    use crate::store::types::{
        AuthorRow, BookRow, CatalogData, GenreRow, PublicationRow, SeriesRow,
    };

    fn sample_catalog() -> CatalogData {
        CatalogData {
            books: vec![
                BookRow {
                    id: 1,
                    title: "book1".to_string(),
                    description: "first".to_string(),
                    skin_image: "covers/1.png".to_string(),
                    book_order: Some(1),
                    series_id: Some(1),
                    author_ids: vec![1],
                    genre_ids: vec![1],
                },
                BookRow {
                    id: 2,
                    title: "book2".to_string(),
                    description: "second".to_string(),
                    skin_image: "covers/2.png".to_string(),
                    book_order: Some(2),
                    series_id: Some(1),
                    author_ids: vec![1],
                    genre_ids: vec![],
                },
                BookRow {
                    id: 3,
                    title: "book3".to_string(),
                    description: "third".to_string(),
                    skin_image: "covers/3.png".to_string(),
                    book_order: None,
                    series_id: None,
                    author_ids: vec![2],
                    genre_ids: vec![],
                },
            ],
            authors: vec![
                AuthorRow {
                    id: 1,
                    name: "author1".to_string(),
                    description: "bio".to_string(),
                    photo: "photos/1.png".to_string(),
                    birthdate: Some("1950-02-11".to_string()),
                    country: Some("PL".to_string()),
                },
                AuthorRow {
                    id: 2,
                    name: "author2".to_string(),
                    description: "bio".to_string(),
                    photo: "photos/2.png".to_string(),
                    birthdate: None,
                    country: None,
                },
            ],
            series: vec![SeriesRow {
                id: 1,
                title: "series1".to_string(),
                description: "the saga".to_string(),
                skin_image: "covers/s1.png".to_string(),
                is_finished: false,
            }],
            genres: vec![GenreRow {
                id: 1,
                name: "fantasy".to_string(),
            }],
            publications: vec![
                PublicationRow {
                    id: 1,
                    book_id: 1,
                    publisher: "paper house".to_string(),
                    year: Some(2001),
                    isbn: Some("83-0000-001".to_string()),
                },
                PublicationRow {
                    id: 2,
                    book_id: 1,
                    publisher: "reprint co".to_string(),
                    year: Some(2015),
                    isbn: None,
                },
            ],
        }
    }

    fn seeded_store() -> CatalogStore {
        let store = CatalogStore::new();
        store.load(sample_catalog());
        store
    }

    // ============================================================
    // LOOKUP TESTS
    // ============================================================

    #[test]
    fn test_book_fetch_by_id() {
        let store = seeded_store();

        let book = store.book(1).expect("book 1 should exist");
        assert_eq!(book.id, 1);
        assert_eq!(book.title, "book1");
        assert_eq!(book.series_id, Some(1));
    }

    #[test]
    fn test_book_fetch_absent() {
        let store = seeded_store();
        assert!(store.book(10).is_none());
    }

    #[test]
    fn test_author_and_series_fetch() {
        let store = seeded_store();

        let author = store.author(2).expect("author 2 should exist");
        assert_eq!(author.name, "author2");
        assert!(author.birthdate.is_none());

        let series = store.series(1).expect("series 1 should exist");
        assert_eq!(series.title, "series1");
        assert!(!series.is_finished);

        assert!(store.author(99).is_none());
        assert!(store.series(99).is_none());
    }

    #[test]
    fn test_genre_fetch() {
        let store = seeded_store();

        assert_eq!(store.genre(1).unwrap().name, "fantasy");
        assert!(store.genre(2).is_none());
    }

    // ============================================================
    // SCAN AND JOIN TESTS
    // ============================================================

    #[test]
    fn test_scan_counts() {
        let store = seeded_store();

        assert_eq!(store.scan_books().len(), 3);
        assert_eq!(store.scan_authors().len(), 2);
        assert_eq!(store.scan_series().len(), 1);
        assert_eq!(store.book_count(), 3);
        assert_eq!(store.author_count(), 2);
        assert_eq!(store.series_count(), 1);
    }

    #[test]
    fn test_books_in_series() {
        let store = seeded_store();

        let mut ids: Vec<i64> = store.books_in_series(1).iter().map(|b| b.id).collect();
        ids.sort();
        assert_eq!(ids, vec![1, 2]);

        assert!(store.books_in_series(7).is_empty(), "unknown series has no books");
    }

    #[test]
    fn test_publications_of_book_ordered() {
        let store = seeded_store();

        let pubs = store.publications_of(1);
        assert_eq!(pubs.len(), 2);
        // Ascending by publication id regardless of insertion order
        assert_eq!(pubs[0].id, 1);
        assert_eq!(pubs[1].id, 2);

        assert!(store.publications_of(3).is_empty());
    }

    // ============================================================
    // SEEDING TESTS
    // ============================================================

    #[test]
    fn test_load_overwrites_duplicate_ids() {
        let store = seeded_store();

        store.load(CatalogData {
            books: vec![BookRow {
                id: 1,
                title: "book1 revised".to_string(),
                description: "re-seeded".to_string(),
                skin_image: "covers/1.png".to_string(),
                book_order: None,
                series_id: None,
                author_ids: vec![],
                genre_ids: vec![],
            }],
            ..CatalogData::default()
        });

        assert_eq!(store.book_count(), 3, "overwrite must not add a row");
        assert_eq!(store.book(1).unwrap().title, "book1 revised");
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::new();

        assert_eq!(store.book_count(), 0);
        assert!(store.scan_books().is_empty());
        assert!(store.book(1).is_none());
    }

    #[test]
    fn test_catalog_data_from_json_defaults() {
        // Sections omitted from the seed file deserialize as empty tables
        let data: CatalogData =
            serde_json::from_str(r#"{"books": [], "authors": []}"#).expect("seed should parse");

        assert!(data.series.is_empty());
        assert!(data.genres.is_empty());
        assert!(data.publications.is_empty());
    }
}
