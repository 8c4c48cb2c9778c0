//! Catalog Search Service Library
//!
//! This library crate defines the modules that make up the catalog query service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`store`**: The entity store. An in-memory relational layer holding Book,
//!   Author, Series, Genre and Publication rows plus their associations, seeded
//!   once at startup and read-only afterwards.
//! - **`search`**: The core query logic. Contains the filter resolver, the preview
//!   query engine, the detail hydrator, the multi-kind aggregation dispatcher and
//!   the HTTP handlers exposing them.
//! - **`auth`**: The token validation layer. Produces a request `Identity` from a
//!   bearer token; every handler consumes it through an extractor.
//! - **`events`**: The usage-event production layer. A narrow producer interface
//!   used to publish search events without coupling the core to a message bus.

pub mod auth;
pub mod events;
pub mod search;
pub mod store;
