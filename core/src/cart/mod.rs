// storefront_core/src/cart/mod.rs

//! The cart aggregator: product id → quantity, at most one line per product.

pub mod sessions;
pub mod summary;

pub use sessions::{CartSessions, SessionId};
pub use summary::{CartSummary, PricedLine};

use crate::catalog::{CatalogStore, ProductId};
use crate::error::{StoreError, StoreResult};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartLine {
  pub product_id: ProductId,
  /// Always at least 1; a line at 0 is removed instead.
  pub quantity: u32,
}

/// Lines are kept in the order products were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
  lines: Vec<CartLine>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
    self.lines.iter().find(|l| l.product_id == product_id)
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|l| u64::from(l.quantity)).sum()
  }

  fn position(&self, product_id: ProductId) -> Option<usize> {
    self.lines.iter().position(|l| l.product_id == product_id)
  }

  /// Adds `quantity` of a catalog product, accumulating onto an existing line.
  pub fn add(&mut self, catalog: &CatalogStore, product_id: ProductId, quantity: u32) -> StoreResult<CartLine> {
    if quantity == 0 {
      return Err(StoreError::InvalidQuantity { quantity: 0 });
    }
    if !catalog.contains(product_id) {
      return Err(StoreError::ProductNotFound { product_id });
    }

    match self.position(product_id) {
      Some(idx) => {
        let line = &mut self.lines[idx];
        line.quantity = line
          .quantity
          .checked_add(quantity)
          .ok_or(StoreError::QuantityOverflow { product_id })?;
        Ok(*line)
      }
      None => {
        let line = CartLine { product_id, quantity };
        self.lines.push(line);
        Ok(line)
      }
    }
  }

  /// Sets a line's quantity; 0 removes it. Products not in the cart are ignored.
  ///
  /// Returns the line as it now stands, or `None` if there is no line.
  pub fn update(&mut self, product_id: ProductId, quantity: u32) -> Option<CartLine> {
    let idx = self.position(product_id)?;
    if quantity == 0 {
      self.lines.remove(idx);
      return None;
    }
    self.lines[idx].quantity = quantity;
    Some(self.lines[idx])
  }

  pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
    self.position(product_id).map(|idx| self.lines.remove(idx))
  }

  pub fn clear(&mut self) {
    self.lines.clear();
  }

  /// Sum of price × quantity over every line.
  pub fn total(&self, catalog: &CatalogStore) -> Decimal {
    CartSummary::price(&self.lines, catalog).total
  }

  pub fn summarize(&self, catalog: &CatalogStore) -> CartSummary {
    CartSummary::price(&self.lines, catalog)
  }

  /// Empties the cart and hands its lines to the caller. Fails on an empty cart.
  pub fn claim_lines(&mut self) -> StoreResult<Vec<CartLine>> {
    if self.lines.is_empty() {
      return Err(StoreError::EmptyCart);
    }
    Ok(std::mem::take(&mut self.lines))
  }

  /// Puts previously claimed lines back, merging with anything added since.
  pub fn restore(&mut self, lines: Vec<CartLine>) {
    for restored in lines {
      match self.position(restored.product_id) {
        Some(idx) => {
          let line = &mut self.lines[idx];
          line.quantity = line.quantity.saturating_add(restored.quantity);
        }
        None => self.lines.push(restored),
      }
    }
  }

  /// Prices every line, then clears the cart.
  pub fn checkout(&mut self, catalog: &CatalogStore) -> StoreResult<CartSummary> {
    let lines = self.claim_lines()?;
    Ok(CartSummary::price(&lines, catalog))
  }
}
