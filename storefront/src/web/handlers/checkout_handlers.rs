// storefront/src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use storefront_core::{ContextData, FlowOutcome};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::pipelines::contexts::CheckoutCtxData;
use crate::state::AppState;
use crate::web::session::CartSession;

/// Shows what would be ordered. Rejects an empty cart.
#[instrument(name = "handler::checkout_summary", skip(app_state, session), fields(session_id = %session.id))]
pub async fn checkout_summary_handler(
  app_state: web::Data<AppState>,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  let summary = app_state
    .carts
    .existing(session.id)
    .map(|cart| cart.read().summarize(&app_state.catalog))
    .filter(|summary| !summary.is_empty())
    .ok_or(AppError::EmptyCart)?;

  Ok(session.respond().json(json!({
      "cart": summary,
      "total": summary.total,
  })))
}

#[instrument(name = "handler::process_order", skip(app_state, session), fields(session_id = %session.id))]
pub async fn process_order_handler(
  app_state: web::Data<AppState>,
  session: CartSession,
) -> Result<HttpResponse, AppError> {
  if app_state.carts.existing(session.id).is_none() {
    return Err(AppError::EmptyCart);
  }

  let ctx_data = ContextData::new(CheckoutCtxData::new(app_state.get_ref().clone(), session.id));
  let result = app_state.flows.run(ctx_data.clone()).await;

  // Anything claimed but not turned into a receipt goes back into the cart.
  let unfinished = {
    let mut guard = ctx_data.write();
    if guard.receipt.is_none() {
      std::mem::take(&mut guard.claimed_lines)
    } else {
      Vec::new()
    }
  };
  if !unfinished.is_empty() {
    warn!(lines = unfinished.len(), "Checkout did not finish, restoring claimed lines.");
    let cart = ctx_data.read().cart.clone();
    cart.write().restore(unfinished);
  }

  match result? {
    FlowOutcome::Completed => {
      let receipt = ctx_data.read().receipt.clone().ok_or_else(|| {
        warn!("Checkout flow completed but no receipt was recorded.");
        AppError::Internal("Order processed, but the receipt is unavailable.".to_string())
      })?;
      info!(order_id = %receipt.order_id, total = %receipt.total, "Order placed.");

      Ok(session.respond().json(json!({
          "message": "Thank you for your order!",
          "order": receipt,
      })))
    }
    FlowOutcome::Stopped => {
      warn!("Checkout flow was stopped by a handler.");
      Err(AppError::Internal("Order processing was halted.".to_string()))
    }
  }
}
