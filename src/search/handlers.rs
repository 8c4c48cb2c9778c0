use super::aggregate::search_catalog;
use super::repository::SearchRepository;
use super::types::{CatalogEntity, DEFAULT_PAGE_LIMIT, ErrorBody, MainSearchParams};
use crate::auth::validator::Identity;
use crate::events::producer::EventProducer;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_get_book(
    identity: Identity,
    Path(id): Path<i64>,
    Extension(repo): Extension<Arc<SearchRepository>>,
) -> Response {
    tracing::debug!("book {} requested by {}", id, identity.subject);

    match repo.get_full_book(id).await {
        Ok(Some(book)) => (StatusCode::OK, Json(CatalogEntity::Book(book))).into_response(),
        Ok(None) => not_found("book", id),
        Err(e) => store_failure(e),
    }
}

pub async fn handle_get_author(
    identity: Identity,
    Path(id): Path<i64>,
    Extension(repo): Extension<Arc<SearchRepository>>,
) -> Response {
    tracing::debug!("author {} requested by {}", id, identity.subject);

    match repo.get_full_author(id).await {
        Ok(Some(author)) => (StatusCode::OK, Json(CatalogEntity::Author(author))).into_response(),
        Ok(None) => not_found("author", id),
        Err(e) => store_failure(e),
    }
}

pub async fn handle_get_series(
    identity: Identity,
    Path(id): Path<i64>,
    Extension(repo): Extension<Arc<SearchRepository>>,
) -> Response {
    tracing::debug!("series {} requested by {}", id, identity.subject);

    match repo.get_full_series(id).await {
        Ok(Some(series)) => (StatusCode::OK, Json(CatalogEntity::Series(series))).into_response(),
        Ok(None) => not_found("series", id),
        Err(e) => store_failure(e),
    }
}

pub async fn handle_main(
    identity: Identity,
    Query(params): Query<MainSearchParams>,
    Extension(repo): Extension<Arc<SearchRepository>>,
    Extension(producer): Extension<Arc<dyn EventProducer>>,
) -> Response {
    let selection = params.selection();
    let filters = params.filters();
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);

    match search_catalog(&repo, selection, &filters, offset, limit).await {
        Ok(hits) => {
            let event = serde_json::json!({
                "subject": identity.subject,
                "filters": filters,
                "find_book": selection.find_book,
                "find_author": selection.find_author,
                "find_series": selection.find_series,
                "results": hits.len(),
            });
            if let Err(e) = producer.produce("catalog.search", event).await {
                tracing::error!("Failed to produce search event: {:?}", e);
            }
            (StatusCode::OK, Json(hits)).into_response()
        }
        Err(e) => store_failure(e),
    }
}

/// Absent entities respond 500 with an error payload.
fn not_found(kind: &str, id: i64) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: format!("{} {} not found", kind, id),
        }),
    )
        .into_response()
}

fn store_failure(e: anyhow::Error) -> Response {
    tracing::error!("store failure: {:#}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "store failure".to_string(),
        }),
    )
        .into_response()
}
