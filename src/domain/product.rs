//! Catalog domain types
//!
//! These are the wire shapes the REST backend speaks (camelCase JSON) and the
//! shapes the state store holds. Validation lives on [`NewProduct`] only; the
//! store and client accept whatever the backend hands back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Catalog item with physical attributes and an attached comment list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub count: u32,
    pub size: Size,
    pub weight: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Size {
    #[validate(range(min = 1, message = "Width must be greater than zero"))]
    pub width: u32,
    #[validate(range(min = 1, message = "Height must be greater than zero"))]
    pub height: u32,
}

/// Timestamped free-text note attached to a product.
///
/// `product_id` is kept as a string to match `Product::id`; ids are opaque and
/// not necessarily numeric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub product_id: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    /// Build a comment with a client-generated `comment-<unix-millis>` id.
    pub fn new(
        product_id: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("comment-{}", Utc::now().timestamp_millis()),
            product_id: product_id.into(),
            description: description.into(),
            date,
        }
    }
}

/// Form-level draft of a product, validated before it is sent anywhere.
#[derive(Clone, Debug, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub image_url: String,
    #[validate(range(min = 1, message = "Count must be greater than zero"))]
    pub count: u32,
    #[validate]
    pub size: Size,
    #[validate(length(min = 1, message = "Weight is required"))]
    pub weight: String,
}

impl NewProduct {
    /// Promote the draft to a full product with a client-generated id and an
    /// empty comment list. The backend may replace the id with its own.
    pub fn into_product(self) -> Product {
        self.build()
    }

    /// Validate the draft first; the store and client never re-check.
    pub fn try_into_product(self) -> crate::Result<Product> {
        self.validate()?;
        Ok(self.build())
    }

    fn build(self) -> Product {
        Product {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            image_url: self.image_url,
            count: self.count,
            size: self.size,
            weight: self.weight,
            comments: vec![],
        }
    }
}

/// Partial update body for `PUT /products/{id}`. Absent fields are omitted
/// from the JSON so the backend keeps its current values for them.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl From<&Product> for ProductPatch {
    fn from(product: &Product) -> Self {
        Self {
            name: Some(product.name.clone()),
            image_url: Some(product.image_url.clone()),
            count: Some(product.count),
            size: Some(product.size),
            weight: Some(product.weight.clone()),
            comments: Some(product.comments.clone()),
        }
    }
}
