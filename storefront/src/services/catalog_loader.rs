// storefront/src/services/catalog_loader.rs

use storefront_core::{load_store, CatalogSource, CatalogStore, JsonDirSource, SqlTableSource};
use tracing::{info, instrument, warn};

use crate::config::{AppConfig, CatalogBackend};
use crate::errors::Result as AppResult;
use crate::services::seed::seed_json_catalog;

/// Loads the catalog once from the configured backend. With seeding on, an
/// empty catalog is replaced by the demo catalog written to the data directory.
#[instrument(name = "catalog::open", skip(config), fields(backend = ?config.catalog))]
pub async fn open_catalog(config: &AppConfig) -> AppResult<CatalogStore> {
  let source: Box<dyn CatalogSource> = match &config.catalog {
    CatalogBackend::Json { data_dir } => Box::new(JsonDirSource::new(data_dir.clone())),
    CatalogBackend::Sqlite { database_url } => Box::new(SqlTableSource::connect(database_url).await?),
  };

  let store = load_store(source.as_ref()).await?;
  if !store.is_empty() || !config.seed_catalog {
    if store.is_empty() {
      warn!(source = source.name(), "Catalog is empty and seeding is disabled.");
    }
    return Ok(store);
  }

  info!(source = source.name(), "Catalog is empty, seeding demo products.");
  let seeded = seed_json_catalog(&JsonDirSource::new(config.data_dir.clone())).await?;
  Ok(CatalogStore::from_snapshot(seeded))
}
