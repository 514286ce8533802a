// storefront_core/src/catalog/source/sql.rs

use crate::catalog::model::{CatalogSnapshot, Category, Product};
use crate::catalog::source::CatalogSource;
use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use tracing::{instrument, warn};

/// Reads the `products` and `categories` tables of a SQLite database.
///
/// Only `id`, `name` and `price` are required on `products`; a missing
/// `category_id` reads as 0 and missing `description`/`image` as absent.
#[derive(Debug, Clone)]
pub struct SqlTableSource {
  pool: SqlitePool,
}

impl SqlTableSource {
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> StoreResult<Self> {
    let pool = SqlitePool::connect(database_url).await.map_err(|e| StoreError::Source {
      source_name: "sqlite".to_string(),
      source: anyhow::Error::new(e).context(format!("connecting to {database_url}")),
    })?;
    Ok(Self::new(pool))
  }

  pub fn pool(&self) -> &SqlitePool {
    &self.pool
  }

  async fn fetch_rows(&self, table: &str) -> Vec<SqliteRow> {
    // Table names are fixed identifiers, never request input.
    let query = format!("SELECT * FROM {table}");
    match sqlx::query(&query).fetch_all(&self.pool).await {
      Ok(rows) => rows,
      Err(e) => {
        warn!(table, error = %e, "Catalog table unreadable, using an empty collection.");
        Vec::new()
      }
    }
  }
}

fn decode_price(row: &SqliteRow) -> Option<Decimal> {
  if let Ok(text) = row.try_get::<String, _>("price") {
    return Decimal::from_str(text.trim()).ok();
  }
  if let Ok(whole) = row.try_get::<i64, _>("price") {
    return Some(Decimal::from(whole));
  }
  // f64's shortest round-trip text gives 19.99 back as "19.99".
  row
    .try_get::<f64, _>("price")
    .ok()
    .and_then(|float| Decimal::from_str(&float.to_string()).ok())
}

fn decode_product(row: &SqliteRow) -> Option<Product> {
  let id = row.try_get::<i64, _>("id").ok()?;
  let name = row.try_get::<String, _>("name").ok()?;
  let price = decode_price(row)?;
  Some(Product {
    id,
    name,
    price,
    category_id: row.try_get::<Option<i64>, _>("category_id").ok().flatten().unwrap_or(0),
    description: row.try_get::<Option<String>, _>("description").ok().flatten(),
    image: row.try_get::<Option<String>, _>("image").ok().flatten(),
  })
}

fn decode_category(row: &SqliteRow) -> Option<Category> {
  Some(Category {
    id: row.try_get::<i64, _>("id").ok()?,
    name: row.try_get::<String, _>("name").ok()?,
  })
}

#[async_trait]
impl CatalogSource for SqlTableSource {
  fn name(&self) -> &str {
    "sqlite"
  }

  #[instrument(name = "SqlTableSource::load", skip(self))]
  async fn load(&self) -> StoreResult<CatalogSnapshot> {
    let mut products = Vec::new();
    for row in self.fetch_rows("products").await {
      match decode_product(&row) {
        Some(product) => products.push(product),
        None => warn!("Skipping products row with missing or malformed id/name/price."),
      }
    }

    let mut categories = Vec::new();
    for row in self.fetch_rows("categories").await {
      match decode_category(&row) {
        Some(category) => categories.push(category),
        None => warn!("Skipping categories row with missing or malformed id/name."),
      }
    }

    Ok(CatalogSnapshot { products, categories })
  }
}
