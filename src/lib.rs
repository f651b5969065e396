//! Catalog Client
//!
//! Client-side core of a product catalog UI: a normalized state container
//! synchronized with a REST `/products` backend.
//!
//! ## Features
//! - Product and comment data model (camelCase JSON wire shapes)
//! - REST backend client (list, get, create, update, delete)
//! - Async CRUD operations driving a reducer-based state store
//! - Pure client-side sorting (by name, by count)
//!
//! The presentation layer is an external consumer: it reads state through the
//! selectors on [`store::CatalogState`] and invokes the operations on
//! [`catalog::Catalog`].

use thiserror::Error;

pub mod catalog;
pub mod client;
pub mod domain;
pub mod sort;
pub mod store;

pub use catalog::Catalog;
pub use client::ProductsClient;
pub use domain::{Comment, NewProduct, Product, ProductPatch, Size};
pub use sort::{sort_products, SortOption};
pub use store::{Action, CatalogState, Operation, Status};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A backend call failed at the transport or HTTP level. The message stays
    /// generic per operation; the underlying cause is chained as the source.
    #[error("Failed to {operation}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// add-comment targeted a product id absent from current state.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product draft failed the form-level checks.
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
