//! Entity Store Module
//!
//! Implements the relational persistence layer for the catalog.
//!
//! ## Core Concepts
//! - **Tables**: Book, Author, Series, Genre and Publication rows live in keyed
//!   in-memory tables (`DashMap`), one per entity kind.
//! - **Associations**: Book carries its author and genre id sets, Publication
//!   carries its book id, so joins are resolved by scanning and matching ids.
//! - **Seeding**: The store is populated once at startup from a `CatalogData`
//!   document and is read-only for the lifetime of the process.
//! - **Access**: `CatalogStore` hands out cloned rows, so callers never hold
//!   references into the underlying maps.

pub mod memory;
pub mod types;

#[cfg(test)]
mod tests;
