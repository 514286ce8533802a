// storefront_core/src/catalog/mod.rs

//! The catalog store: an immutable product table loaded once from a source,
//! queried with optional filters.

pub mod filter;
pub mod model;
pub mod source;
pub mod store;

pub use filter::ProductFilter;
pub use model::{CatalogSnapshot, Category, CategoryId, Product, ProductId};
pub use source::{load_store, CatalogSource, JsonDirSource, SqlTableSource};
pub use store::CatalogStore;
