//! Search Service Module
//!
//! The core component responsible for answering catalog queries.
//!
//! ## Overview
//! This module implements the filter-and-aggregation engine of the service.
//! It bridges the HTTP API layer with the underlying entity store, turning
//! generic filter maps into entity-specific queries and assembling preview
//! lists and fully hydrated entities.
//!
//! ## Responsibilities
//! - **Filter resolution**: Mapping a generic filter map to a single resolved
//!   predicate per entity kind, with a fixed precedence order.
//! - **Preview queries**: Filtered, sorted, paginated list projections for
//!   books, authors and series.
//! - **Detail hydration**: Full single-entity payloads with their relations
//!   eagerly materialized.
//! - **Aggregation**: The multi-kind "main" search that fans out over the
//!   requested kinds and merges the tagged results.
//! - **API**: Exposing all of the above via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`filter`**: The filter resolver and sort-key resolution.
//! - **`repository`**: The preview query engine and detail hydrator.
//! - **`aggregate`**: The multi-kind aggregation dispatcher.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Projection types and Data Transfer Objects (DTOs).

pub mod aggregate;
pub mod filter;
pub mod handlers;
pub mod repository;
pub mod types;
