// storefront_core/src/catalog/store.rs

use crate::catalog::filter::ProductFilter;
use crate::catalog::model::{CatalogSnapshot, Category, CategoryId, Product, ProductId};
use std::collections::HashMap;
use tracing::{info, warn};

/// Immutable in-memory product table, built once from a `CatalogSnapshot`.
///
/// Products keep backing-store order. When the backing data repeats an id,
/// the first occurrence wins.
#[derive(Debug, Default)]
pub struct CatalogStore {
  products: Vec<Product>,
  by_id: HashMap<ProductId, usize>,
  categories: Vec<Category>,
  category_by_id: HashMap<CategoryId, usize>,
}

impl CatalogStore {
  pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
    let mut products = Vec::with_capacity(snapshot.products.len());
    let mut by_id = HashMap::with_capacity(snapshot.products.len());
    for product in snapshot.products {
      if by_id.contains_key(&product.id) {
        warn!(product_id = product.id, name = %product.name, "Duplicate product id in catalog data, keeping the first.");
        continue;
      }
      by_id.insert(product.id, products.len());
      products.push(product);
    }

    let mut categories = Vec::with_capacity(snapshot.categories.len());
    let mut category_by_id = HashMap::with_capacity(snapshot.categories.len());
    for category in snapshot.categories {
      if category_by_id.contains_key(&category.id) {
        warn!(category_id = category.id, "Duplicate category id in catalog data, keeping the first.");
        continue;
      }
      category_by_id.insert(category.id, categories.len());
      categories.push(category);
    }

    info!(
      products = products.len(),
      categories = categories.len(),
      "Catalog store built."
    );
    Self {
      products,
      by_id,
      categories,
      category_by_id,
    }
  }

  pub fn empty() -> Self {
    Self::default()
  }

  /// Products matching `filter`, or every product when no filter is given.
  pub fn list(&self, filter: Option<&ProductFilter>) -> Vec<&Product> {
    match filter {
      Some(f) if !f.is_unrestricted() => self.products.iter().filter(|p| f.matches(p)).collect(),
      _ => self.products.iter().collect(),
    }
  }

  pub fn get(&self, id: ProductId) -> Option<&Product> {
    self.by_id.get(&id).map(|&idx| &self.products[idx])
  }

  pub fn contains(&self, id: ProductId) -> bool {
    self.by_id.contains_key(&id)
  }

  pub fn categories(&self) -> &[Category] {
    &self.categories
  }

  pub fn category(&self, id: CategoryId) -> Option<&Category> {
    self.category_by_id.get(&id).map(|&idx| &self.categories[idx])
  }

  pub fn len(&self) -> usize {
    self.products.len()
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}
