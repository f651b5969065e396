//! REST backend client
//!
//! Thin wrapper over the `/products` resource. Transport errors and non-2xx
//! statuses both collapse into one generic per-operation message, with the
//! original `reqwest` error chained as the source for diagnostics.

use reqwest::Client;
use tracing::debug;

use crate::domain::{Product, ProductPatch};
use crate::{CatalogError, Result};

/// Default backend origin when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct ProductsClient {
    http: Client,
    base_url: String,
}

impl ProductsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    /// Read the backend origin from `CATALOG_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// `GET /products`
    pub async fn list_all(&self) -> Result<Vec<Product>> {
        const OP: &str = "fetch products";
        debug!(url = %self.collection_url(), "listing products");
        let resp = self
            .http
            .get(self.collection_url())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| CatalogError::Transport { operation: OP, source })?;
        resp.json()
            .await
            .map_err(|source| CatalogError::Transport { operation: OP, source })
    }

    /// `GET /products/{id}`
    pub async fn get_by_id(&self, id: &str) -> Result<Product> {
        const OP: &str = "fetch product";
        debug!(%id, "fetching product");
        let resp = self
            .http
            .get(self.item_url(id))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| CatalogError::Transport { operation: OP, source })?;
        resp.json()
            .await
            .map_err(|source| CatalogError::Transport { operation: OP, source })
    }

    /// `POST /products` — the server echoes the stored representation.
    pub async fn create(&self, product: &Product) -> Result<Product> {
        const OP: &str = "add product";
        debug!(id = %product.id, name = %product.name, "creating product");
        let resp = self
            .http
            .post(self.collection_url())
            .json(product)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| CatalogError::Transport { operation: OP, source })?;
        resp.json()
            .await
            .map_err(|source| CatalogError::Transport { operation: OP, source })
    }

    /// `PUT /products/{id}` — partial-update semantics are the server's call.
    pub async fn update(&self, id: &str, patch: &ProductPatch) -> Result<Product> {
        const OP: &str = "update product";
        debug!(%id, "updating product");
        let resp = self
            .http
            .put(self.item_url(id))
            .json(patch)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| CatalogError::Transport { operation: OP, source })?;
        resp.json()
            .await
            .map_err(|source| CatalogError::Transport { operation: OP, source })
    }

    /// `DELETE /products/{id}`
    pub async fn remove(&self, id: &str) -> Result<()> {
        const OP: &str = "delete product";
        debug!(%id, "deleting product");
        self.http
            .delete(self.item_url(id))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| CatalogError::Transport { operation: OP, source })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let client = ProductsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.item_url("7"), "http://localhost:3000/products/7");
    }
}
