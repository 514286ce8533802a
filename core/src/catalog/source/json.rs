// storefront_core/src/catalog/source/json.rs

use crate::catalog::model::{CatalogSnapshot, Category, Product};
use crate::catalog::source::CatalogSource;
use crate::error::{StoreError, StoreResult};
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

pub const PRODUCTS_FILE: &str = "products.json";
pub const CATEGORIES_FILE: &str = "categories.json";

/// `products.json` and `categories.json` in one data directory, each a JSON array.
///
/// This type is the only writer of those files.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
  data_dir: PathBuf,
}

impl JsonDirSource {
  pub fn new(data_dir: impl Into<PathBuf>) -> Self {
    Self {
      data_dir: data_dir.into(),
    }
  }

  pub fn data_dir(&self) -> &Path {
    &self.data_dir
  }

  pub fn products_path(&self) -> PathBuf {
    self.data_dir.join(PRODUCTS_FILE)
  }

  pub fn categories_path(&self) -> PathBuf {
    self.data_dir.join(CATEGORIES_FILE)
  }

  pub async fn write_products(&self, products: &[Product]) -> StoreResult<()> {
    self.write_collection(&self.products_path(), products).await
  }

  pub async fn write_categories(&self, categories: &[Category]) -> StoreResult<()> {
    self.write_collection(&self.categories_path(), categories).await
  }

  async fn write_collection<T: Serialize>(&self, path: &Path, items: &[T]) -> StoreResult<()> {
    let result: anyhow::Result<()> = async {
      tokio::fs::create_dir_all(&self.data_dir)
        .await
        .with_context(|| format!("creating data directory {}", self.data_dir.display()))?;
      let bytes = serde_json::to_vec_pretty(items).context("serializing catalog collection")?;
      tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
      Ok::<(), anyhow::Error>(())
    }
    .await;

    result.map_err(|source| StoreError::Source {
      source_name: self.name().to_string(),
      source,
    })?;
    info!(path = %path.display(), count = items.len(), "Catalog collection written.");
    Ok(())
  }

  /// Reads one collection. A missing file is created holding `[]`; a corrupt
  /// file is reported and treated as empty.
  async fn load_collection<T: DeserializeOwned>(&self, path: &Path) -> Vec<T> {
    match tokio::fs::read(path).await {
      Ok(bytes) => match serde_json::from_slice::<Vec<T>>(&bytes) {
        Ok(items) => items,
        Err(e) => {
          warn!(path = %path.display(), error = %e, "Catalog file is corrupt, using an empty collection.");
          Vec::new()
        }
      },
      Err(e) if e.kind() == ErrorKind::NotFound => {
        info!(path = %path.display(), "Catalog file missing, creating it empty.");
        if let Err(e) = tokio::fs::write(path, b"[]").await {
          warn!(path = %path.display(), error = %e, "Could not create empty catalog file.");
        }
        Vec::new()
      }
      Err(e) => {
        warn!(path = %path.display(), error = %e, "Catalog file unreadable, using an empty collection.");
        Vec::new()
      }
    }
  }
}

#[async_trait]
impl CatalogSource for JsonDirSource {
  fn name(&self) -> &str {
    "json"
  }

  #[instrument(name = "JsonDirSource::load", skip(self), fields(data_dir = %self.data_dir.display()))]
  async fn load(&self) -> StoreResult<CatalogSnapshot> {
    if let Err(e) = tokio::fs::create_dir_all(&self.data_dir).await {
      warn!(error = %e, "Could not create data directory.");
    }
    let products = self.load_collection::<Product>(&self.products_path()).await;
    let categories = self.load_collection::<Category>(&self.categories_path()).await;
    Ok(CatalogSnapshot { products, categories })
  }
}
