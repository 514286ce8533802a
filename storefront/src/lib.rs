// storefront/src/lib.rs

//! HTTP storefront over `storefront_core`: browse and search the catalog,
//! keep a cart per session, and check out.

pub mod config;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::AppError;
pub use crate::state::AppState;
