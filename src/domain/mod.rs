//! Domain types
pub mod product;

pub use product::{Comment, NewProduct, Product, ProductPatch, Size};
