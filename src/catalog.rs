//! Async CRUD operations
//!
//! Each operation dispatches its pending phase synchronously on entry, runs
//! one backend call, then dispatches exactly one fulfilled or rejected phase
//! once the call settles. Nothing serializes or deduplicates concurrent
//! invocations: two edits to the same product race and the last write wins at
//! the store layer.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::client::ProductsClient;
use crate::domain::{Comment, Product, ProductPatch};
use crate::store::{Action, CatalogState, Operation};
use crate::{CatalogError, Result};

/// Owns the store document and the backend client. Exactly one writer: all
/// mutation goes through `&mut self` and lands in the reducer.
pub struct Catalog {
    client: ProductsClient,
    state: CatalogState,
}

impl Catalog {
    pub fn new(client: ProductsClient) -> Self {
        Self { client, state: CatalogState::new() }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn client(&self) -> &ProductsClient {
        &self.client
    }

    // -------------------------------------------------------------------------
    // Synchronous setters
    // -------------------------------------------------------------------------

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.state.apply(Action::SetProducts(products));
    }

    pub fn set_current_product(&mut self, product: Option<Product>) {
        self.state.apply(Action::SetCurrentProduct(product));
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Fetch the whole collection; on success the list is replaced wholesale.
    pub async fn fetch_products(&mut self) -> Result<()> {
        self.state.apply(Action::Pending(Operation::FetchProducts));
        match self.client.list_all().await {
            Ok(products) => {
                info!(count = products.len(), "fetched product list");
                self.state.apply(Action::ProductsFetched(products));
                Ok(())
            }
            Err(err) => Err(self.reject(Operation::FetchProducts, err)),
        }
    }

    /// Fetch one product; on success it is upserted into the list and becomes
    /// the current product.
    pub async fn fetch_product_by_id(&mut self, product_id: &str) -> Result<Product> {
        self.state.apply(Action::Pending(Operation::FetchProductById));
        match self.client.get_by_id(product_id).await {
            Ok(product) => {
                self.state.apply(Action::ProductFetched(product.clone()));
                Ok(product)
            }
            Err(err) => Err(self.reject(Operation::FetchProductById, err)),
        }
    }

    /// Create a product; the server's echo is appended to the list.
    pub async fn add_product(&mut self, product: Product) -> Result<Product> {
        self.state.apply(Action::Pending(Operation::AddProduct));
        match self.client.create(&product).await {
            Ok(created) => {
                info!(id = %created.id, "product added");
                self.state.apply(Action::ProductAdded(created.clone()));
                Ok(created)
            }
            Err(err) => Err(self.reject(Operation::AddProduct, err)),
        }
    }

    /// Update a product; the server result replaces the matching list entry.
    pub async fn edit_product(&mut self, product_id: &str, patch: ProductPatch) -> Result<Product> {
        self.state.apply(Action::Pending(Operation::EditProduct));
        match self.client.update(product_id, &patch).await {
            Ok(edited) => {
                self.state.apply(Action::ProductEdited(edited.clone()));
                Ok(edited)
            }
            Err(err) => Err(self.reject(Operation::EditProduct, err)),
        }
    }

    /// Delete a product and drop it from the list.
    pub async fn delete_product(&mut self, product_id: &str) -> Result<()> {
        self.state.apply(Action::Pending(Operation::DeleteProduct));
        match self.client.remove(product_id).await {
            Ok(()) => {
                info!(id = %product_id, "product deleted");
                self.state.apply(Action::ProductDeleted(product_id.to_string()));
                Ok(())
            }
            Err(err) => Err(self.reject(Operation::DeleteProduct, err)),
        }
    }

    /// Attach a comment to a product already held in state.
    ///
    /// Builds the comment locally, then pushes the whole product (comment
    /// included) through `update`. The server's echo is discarded: state keeps
    /// the locally built comment, so the two can diverge if the server
    /// rewrites it.
    pub async fn add_comment(
        &mut self,
        product_id: &str,
        description: &str,
        date: DateTime<Utc>,
    ) -> Result<Comment> {
        self.state.apply(Action::Pending(Operation::AddComment));

        let Some(mut product) = self.state.product_by_id(product_id).cloned() else {
            let err = CatalogError::ProductNotFound(product_id.to_string());
            return Err(self.reject(Operation::AddComment, err));
        };

        let comment = Comment::new(product_id, description, date);
        product.comments.push(comment.clone());

        match self.client.update(product_id, &ProductPatch::from(&product)).await {
            Ok(_) => {
                self.state.apply(Action::CommentAdded {
                    product_id: product_id.to_string(),
                    comment: comment.clone(),
                });
                Ok(comment)
            }
            Err(CatalogError::Transport { source, .. }) => {
                // Re-label so the stored message names this operation, not
                // the underlying update call.
                let err = CatalogError::Transport { operation: "add comment", source };
                Err(self.reject(Operation::AddComment, err))
            }
            Err(err) => Err(self.reject(Operation::AddComment, err)),
        }
    }

    fn reject(&mut self, operation: Operation, err: CatalogError) -> CatalogError {
        warn!(?operation, error = %err, "operation rejected");
        self.state.apply(Action::Rejected { operation, error: err.to_string() });
        err
    }
}
