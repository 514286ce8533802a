// storefront/src/models/order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use storefront_core::{CartSummary, PricedLine, SessionId};
use uuid::Uuid;

/// What a processed order reports back: every line and the grand total.
#[derive(Debug, Clone, Serialize)]
pub struct OrderReceipt {
  pub order_id: Uuid,
  pub session_id: SessionId,
  pub placed_at: DateTime<Utc>,
  pub lines: Vec<PricedLine>,
  pub item_count: u64,
  pub total: Decimal,
}

impl OrderReceipt {
  pub fn new(session_id: SessionId, summary: CartSummary) -> Self {
    Self {
      order_id: Uuid::new_v4(),
      session_id,
      placed_at: Utc::now(),
      lines: summary.lines,
      item_count: summary.item_count,
      total: summary.total,
    }
  }
}
