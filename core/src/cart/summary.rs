// storefront_core/src/cart/summary.rs

use crate::cart::CartLine;
use crate::catalog::{CatalogStore, ProductId};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// A cart line joined with its product's name and price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedLine {
  pub product_id: ProductId,
  pub name: String,
  pub unit_price: Decimal,
  pub quantity: u32,
  pub subtotal: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CartSummary {
  pub lines: Vec<PricedLine>,
  pub item_count: u64,
  pub total: Decimal,
}

impl CartSummary {
  /// Prices `lines` against `catalog`. A line whose product is gone is left
  /// out and logged.
  pub fn price(lines: &[CartLine], catalog: &CatalogStore) -> Self {
    let mut summary = CartSummary::default();
    for line in lines {
      let Some(product) = catalog.get(line.product_id) else {
        warn!(product_id = line.product_id, "Cart line refers to an unknown product, leaving it out.");
        continue;
      };
      let subtotal = product.price * Decimal::from(line.quantity);
      summary.total += subtotal;
      summary.item_count += u64::from(line.quantity);
      summary.lines.push(PricedLine {
        product_id: product.id,
        name: product.name.clone(),
        unit_price: product.price,
        quantity: line.quantity,
        subtotal,
      });
    }
    summary
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}
