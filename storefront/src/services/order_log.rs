// storefront/src/services/order_log.rs

//! Simulated order processing. Nothing is charged or shipped: each order is
//! written to the log line by line and kept in memory.

use crate::models::OrderReceipt;
use parking_lot::RwLock;
use tracing::info;

#[derive(Debug, Default)]
pub struct OrderLog {
  orders: RwLock<Vec<OrderReceipt>>,
}

impl OrderLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&self, receipt: OrderReceipt) {
    info!(
      order_id = %receipt.order_id,
      session_id = %receipt.session_id,
      "Order processed (simulated). Order details:"
    );
    for line in &receipt.lines {
      info!(
        order_id = %receipt.order_id,
        "- {}: {} x {} = {}",
        line.name, line.quantity, line.unit_price, line.subtotal
      );
    }
    info!(order_id = %receipt.order_id, total = %receipt.total, "Order total: {}", receipt.total);
    self.orders.write().push(receipt);
  }

  pub fn len(&self) -> usize {
    self.orders.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.orders.read().is_empty()
  }
}
