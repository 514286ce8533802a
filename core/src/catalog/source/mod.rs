// storefront_core/src/catalog/source/mod.rs

//! Where catalog data comes from. A source is read once at startup; the
//! resulting `CatalogStore` never goes back to it.

use crate::catalog::model::CatalogSnapshot;
use crate::catalog::store::CatalogStore;
use crate::error::StoreResult;
use async_trait::async_trait;
use tracing::{info, instrument};

pub mod json;
pub mod sql;

pub use json::JsonDirSource;
pub use sql::SqlTableSource;

#[async_trait]
pub trait CatalogSource: Send + Sync {
  /// Short label used in logs and errors.
  fn name(&self) -> &str;

  /// Reads products and categories.
  ///
  /// Missing or unreadable collections come back empty. An `Err` means the
  /// source itself is unusable (e.g. the database cannot be reached).
  async fn load(&self) -> StoreResult<CatalogSnapshot>;
}

/// Reads `source` and builds the in-memory store from it.
#[instrument(name = "catalog::load_store", skip_all, fields(source = %source.name()))]
pub async fn load_store(source: &dyn CatalogSource) -> StoreResult<CatalogStore> {
  let snapshot = source.load().await?;
  info!(
    products = snapshot.products.len(),
    categories = snapshot.categories.len(),
    "Catalog snapshot loaded."
  );
  Ok(CatalogStore::from_snapshot(snapshot))
}
