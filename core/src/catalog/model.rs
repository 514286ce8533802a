// storefront_core/src/catalog/model.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = i64;
pub type CategoryId = i64;

/// A purchasable product as stored in `products.json` or the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub name: String,
  pub price: Decimal,
  pub category_id: CategoryId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: CategoryId,
  pub name: String,
}

/// Everything a catalog source loads in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
  pub products: Vec<Product>,
  pub categories: Vec<Category>,
}

impl CatalogSnapshot {
  pub fn is_empty(&self) -> bool {
    self.products.is_empty() && self.categories.is_empty()
  }
}
