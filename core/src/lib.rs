// storefront_core/src/lib.rs

//! Core of the storefront service.
//!
//!  - `catalog`: products and categories, read once from a JSON data
//!    directory or a SQLite database into an immutable in-memory store,
//!    with category / keyword / price-range filtering.
//!  - `cart`: per-session carts that accumulate quantities and price
//!    themselves against the catalog.
//!  - `flow`: named-step flows over shared context data, with a registry
//!    that dispatches on the context's type. Multi-step operations such as
//!    checkout are written as flows.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod flow;

pub use crate::cart::{Cart, CartLine, CartSessions, CartSummary, PricedLine, SessionId};
pub use crate::catalog::{
  load_store, CatalogSnapshot, CatalogSource, CatalogStore, Category, CategoryId, JsonDirSource, Product,
  ProductFilter, ProductId, SqlTableSource,
};
pub use crate::error::{FlowError, FlowResult, StoreError, StoreResult};
pub use crate::flow::{ContextData, Flow, FlowControl, FlowOutcome, FlowRegistry, Handler};

pub use rust_decimal::Decimal;
