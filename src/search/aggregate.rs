use super::repository::SearchRepository;
use super::types::{KindSelection, SearchFilters, SearchHit};
use anyhow::Result;

/// The multi-kind aggregation dispatcher behind the `/main` endpoint.
///
/// For every selected kind the *same* shared filter map is handed to the
/// preview query engine; each kind honors only the keys relevant to it. The
/// three queries are disjoint, so they run concurrently and the tagged
/// results are concatenated without cross-kind deduplication (a book and an
/// author may legitimately share a primary key value and both appear).
pub async fn search_catalog(
    repo: &SearchRepository,
    selection: KindSelection,
    filters: &SearchFilters,
    offset: usize,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    let (books, authors, series) = tokio::join!(
        async {
            if selection.find_book {
                repo.get_filtered_books(filters, offset, limit).await
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if selection.find_author {
                repo.get_filtered_authors(filters, offset, limit).await
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if selection.find_series {
                repo.get_filtered_series(filters, offset, limit).await
            } else {
                Ok(Vec::new())
            }
        },
    );

    let mut hits = Vec::new();
    hits.extend(books?.into_iter().map(SearchHit::Book));
    hits.extend(authors?.into_iter().map(SearchHit::Author));
    hits.extend(series?.into_iter().map(SearchHit::Series));
    Ok(hits)
}
