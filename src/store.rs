//! Reducer-based state store
//!
//! Single mutable document describing the catalog UI's world: the product
//! list, the product currently in view, and the outcome of the most recent
//! async operation. All writes funnel through [`CatalogState::apply`]; readers
//! go through the selector methods and never mutate. `status` and `error` are
//! global, so a later operation's phases overwrite an earlier one's.

use crate::domain::{Comment, Product};

/// Lifecycle of the most recently settled or in-flight operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// The six async operations the store observes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    FetchProducts,
    FetchProductById,
    AddProduct,
    EditProduct,
    DeleteProduct,
    AddComment,
}

/// Everything that may mutate the store: the two synchronous setters plus the
/// pending/fulfilled/rejected phases of each operation. Fulfilled phases carry
/// their operation's payload.
#[derive(Clone, Debug)]
pub enum Action {
    SetProducts(Vec<Product>),
    SetCurrentProduct(Option<Product>),
    Pending(Operation),
    Rejected { operation: Operation, error: String },
    ProductsFetched(Vec<Product>),
    ProductFetched(Product),
    ProductAdded(Product),
    ProductEdited(Product),
    ProductDeleted(String),
    CommentAdded { product_id: String, comment: Comment },
}

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    current_product: Option<Product>,
    status: Status,
    error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Selectors
    // -------------------------------------------------------------------------

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.current_product.as_ref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // -------------------------------------------------------------------------
    // Reducer
    // -------------------------------------------------------------------------

    /// Apply one transition. Each call is atomic from the point of view of
    /// readers; concurrent operations interleave only at this granularity.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetProducts(products) => {
                self.products = products;
            }
            Action::SetCurrentProduct(product) => {
                self.current_product = product;
            }
            Action::Pending(operation) => {
                self.status = Status::Loading;
                if operation == Operation::FetchProductById {
                    self.current_product = None;
                }
            }
            Action::Rejected { operation, error } => {
                self.status = Status::Failed;
                self.error = Some(error);
                if operation == Operation::FetchProductById {
                    self.current_product = None;
                }
            }
            Action::ProductsFetched(products) => {
                self.status = Status::Succeeded;
                self.products = products;
            }
            Action::ProductFetched(product) => {
                self.status = Status::Succeeded;
                // Upsert: overwrite in place so list position is preserved.
                match self.products.iter_mut().find(|p| p.id == product.id) {
                    Some(slot) => *slot = product.clone(),
                    None => self.products.push(product.clone()),
                }
                self.current_product = Some(product);
            }
            Action::ProductAdded(product) => {
                self.status = Status::Succeeded;
                self.products.push(product);
            }
            Action::ProductEdited(product) => {
                self.status = Status::Succeeded;
                // Fields in the server result win; an id we no longer hold is
                // dropped silently.
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *slot = product;
                }
            }
            Action::ProductDeleted(id) => {
                self.status = Status::Succeeded;
                self.products.retain(|p| p.id != id);
            }
            Action::CommentAdded { product_id, comment } => {
                self.status = Status::Succeeded;
                if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
                    product.comments.push(comment.clone());
                    // The in-view copy is a separate value; keep it in step
                    // when it shows the same product.
                    if let Some(current) = self.current_product.as_mut() {
                        if current.id == product_id {
                            current.comments.push(comment);
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Size;
    use chrono::Utc;

    fn product(id: &str, name: &str, count: u32) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            image_url: format!("http://img/{id}.png"),
            count,
            size: Size { width: 10, height: 20 },
            weight: "1kg".into(),
            comments: vec![],
        }
    }

    fn seeded() -> CatalogState {
        let mut state = CatalogState::new();
        state.apply(Action::SetProducts(vec![
            product("1", "B", 5),
            product("2", "A", 5),
        ]));
        state
    }

    #[test]
    fn test_pending_sets_loading() {
        let mut state = CatalogState::new();
        state.apply(Action::Pending(Operation::FetchProducts));
        assert_eq!(state.status(), Status::Loading);
    }

    #[test]
    fn test_fetch_by_id_pending_clears_current() {
        let mut state = seeded();
        state.apply(Action::SetCurrentProduct(Some(product("1", "B", 5))));
        state.apply(Action::Pending(Operation::FetchProductById));
        assert!(state.current_product().is_none());
        assert_eq!(state.status(), Status::Loading);
    }

    #[test]
    fn test_fetched_list_replaces_wholesale() {
        let mut state = seeded();
        state.apply(Action::ProductsFetched(vec![product("9", "Z", 1)]));
        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products()[0].id, "9");
        assert_eq!(state.status(), Status::Succeeded);
    }

    #[test]
    fn test_upsert_existing_keeps_length_and_position() {
        let mut state = seeded();
        let mut updated = product("1", "B refreshed", 7);
        updated.weight = "2kg".into();
        state.apply(Action::ProductFetched(updated.clone()));

        assert_eq!(state.products().len(), 2);
        assert_eq!(state.products()[0], updated);
        assert_eq!(state.current_product(), Some(&updated));
    }

    #[test]
    fn test_upsert_absent_appends() {
        let mut state = seeded();
        state.apply(Action::ProductFetched(product("3", "C", 1)));
        assert_eq!(state.products().len(), 3);
        assert_eq!(state.products()[2].id, "3");
        assert_eq!(state.current_product().unwrap().id, "3");
    }

    #[test]
    fn test_delete_removes_only_matching_entry() {
        let mut state = seeded();
        state.apply(Action::ProductDeleted("2".into()));

        assert_eq!(state.products().len(), 1);
        assert_eq!(state.products()[0].id, "1");
        assert_eq!(state.status(), Status::Succeeded);
        assert!(state.product_by_id("2").is_none());
    }

    #[test]
    fn test_edit_overwrites_in_place() {
        let mut state = seeded();
        let edited = product("2", "A2", 9);
        state.apply(Action::ProductEdited(edited.clone()));
        assert_eq!(state.products()[1], edited);
        assert_eq!(state.products().len(), 2);
    }

    #[test]
    fn test_edit_for_unknown_id_is_a_no_op_on_data() {
        let mut state = seeded();
        state.apply(Action::ProductEdited(product("404", "ghost", 1)));
        assert_eq!(state.products().len(), 2);
        assert_eq!(state.status(), Status::Succeeded);
    }

    #[test]
    fn test_comment_dual_write_when_current_matches() {
        let mut state = seeded();
        state.apply(Action::SetCurrentProduct(Some(product("1", "B", 5))));
        let comment = Comment::new("1", "great", Utc::now());
        state.apply(Action::CommentAdded { product_id: "1".into(), comment: comment.clone() });

        assert_eq!(state.product_by_id("1").unwrap().comments.last(), Some(&comment));
        assert_eq!(state.current_product().unwrap().comments.last(), Some(&comment));
    }

    #[test]
    fn test_comment_skips_mismatched_current() {
        let mut state = seeded();
        state.apply(Action::SetCurrentProduct(Some(product("2", "A", 5))));
        let comment = Comment::new("1", "great", Utc::now());
        state.apply(Action::CommentAdded { product_id: "1".into(), comment: comment.clone() });

        assert_eq!(state.product_by_id("1").unwrap().comments.len(), 1);
        assert!(state.current_product().unwrap().comments.is_empty());
    }

    #[test]
    fn test_rejection_sets_error_and_preserves_data() {
        let mut state = seeded();
        state.apply(Action::Rejected {
            operation: Operation::DeleteProduct,
            error: "Failed to delete product".into(),
        });

        assert_eq!(state.status(), Status::Failed);
        assert_eq!(state.error(), Some("Failed to delete product"));
        assert_eq!(state.products().len(), 2);
    }

    #[test]
    fn test_fetch_by_id_rejection_clears_current() {
        let mut state = seeded();
        state.apply(Action::SetCurrentProduct(Some(product("1", "B", 5))));
        state.apply(Action::Rejected {
            operation: Operation::FetchProductById,
            error: "Failed to fetch product".into(),
        });
        assert!(state.current_product().is_none());
        assert_eq!(state.status(), Status::Failed);
    }

    #[test]
    fn test_current_product_is_not_invalidated_by_delete() {
        let mut state = seeded();
        state.apply(Action::SetCurrentProduct(Some(product("2", "A", 5))));
        state.apply(Action::ProductDeleted("2".into()));
        // No automatic invalidation: the viewer keeps its stale copy.
        assert_eq!(state.current_product().unwrap().id, "2");
    }
}
