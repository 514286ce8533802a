// storefront/src/services/mod.rs

pub mod catalog_loader;
pub mod order_log;
pub mod seed;
