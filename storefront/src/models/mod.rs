// storefront/src/models/mod.rs

//! Response-side records the service produces. Catalog and cart types
//! live in `storefront_core`.

pub mod order;

pub use order::OrderReceipt;
