//! Client-side product ordering
//!
//! Pure comparator over a product collection. Never touches the store; callers
//! get a freshly ordered copy and the input stays as-is.

use std::cmp::Ordering;

use crate::domain::Product;

/// Sort keys understood by [`sort_products`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOption {
    /// Lexicographic ascending by name.
    Name,
    /// Ascending by count, ties broken by name ascending.
    CountAsc,
    /// Descending by count, ties broken by name ascending.
    CountDesc,
}

impl SortOption {
    /// Parse a user-supplied key. Unknown keys yield `None` so callers can
    /// fall back to the unsorted input.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "count-asc" => Some(Self::CountAsc),
            "count-desc" => Some(Self::CountDesc),
            _ => None,
        }
    }
}

/// Return a newly ordered copy of `products` under the given key.
pub fn sort_products(products: &[Product], by: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match by {
        SortOption::Name => sorted.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortOption::CountAsc => sorted.sort_by(|a, b| {
            a.count
                .cmp(&b.count)
                .then_with(|| compare_names(&a.name, &b.name))
        }),
        SortOption::CountDesc => sorted.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| compare_names(&a.name, &b.name))
        }),
    }
    sorted
}

// Case-insensitive lexicographic compare, with a raw compare as tiebreak so
// the ordering stays total and deterministic.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
