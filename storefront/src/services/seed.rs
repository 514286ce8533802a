// storefront/src/services/seed.rs

use rust_decimal::Decimal;
use storefront_core::{CatalogSnapshot, Category, JsonDirSource, Product};
use tracing::info;

use crate::errors::Result as AppResult;

/// A small catalog to start from when the data directory has no products.
pub fn demo_catalog() -> CatalogSnapshot {
  let product = |id: i64, name: &str, cents: i64, category_id: i64, description: &str| Product {
    id,
    name: name.to_string(),
    price: Decimal::new(cents, 2),
    category_id,
    description: Some(description.to_string()),
    image: None,
  };

  CatalogSnapshot {
    products: vec![
      product(1, "Electric Kettle", 3990, 1, "1.7 L, stainless steel."),
      product(2, "French Press", 2450, 1, "Eight cups, borosilicate glass."),
      product(3, "Ceramic Pour-over Cone", 1999, 1, "Fits size 02 filters."),
      product(4, "Cast Iron Skillet", 5425, 2, "Pre-seasoned, 26 cm."),
      product(5, "Linen Apron", 1800, 2, "Adjustable neck strap."),
    ],
    categories: vec![
      Category {
        id: 1,
        name: "Coffee & Tea".to_string(),
      },
      Category {
        id: 2,
        name: "Kitchen".to_string(),
      },
    ],
  }
}

/// Writes the demo catalog through `source` and returns it.
pub async fn seed_json_catalog(source: &JsonDirSource) -> AppResult<CatalogSnapshot> {
  let snapshot = demo_catalog();
  source.write_products(&snapshot.products).await?;
  source.write_categories(&snapshot.categories).await?;
  info!(
    data_dir = %source.data_dir().display(),
    products = snapshot.products.len(),
    "Seeded demo catalog."
  );
  Ok(snapshot)
}
