// storefront/src/pipelines/checkout_pipeline.rs

use crate::errors::AppError;
use crate::models::OrderReceipt;
use crate::pipelines::contexts::CheckoutCtxData;
use storefront_core::{CartSummary, ContextData, Flow, FlowControl, FlowRegistry};
use tracing::{info, warn};

pub fn register_checkout_flow(registry: &FlowRegistry<AppError>) -> Result<(), AppError> {
  let mut flow = Flow::<CheckoutCtxData, AppError>::new(
    "checkout",
    &[
      ("claim_cart_lines", false),
      ("price_order_lines", false),
      ("record_order", false),
    ],
  );

  // Step 1: take the lines out of the session cart in one locked operation,
  // so lines added by a concurrent request are not cleared unseen.
  flow.on("claim_cart_lines", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let (cart, session_id) = {
      let guard = ctx_data.read();
      (guard.cart.clone(), guard.session_id)
    };
    let lines = cart.write().claim_lines()?;
    info!(%session_id, lines = lines.len(), "Checkout: cart lines claimed.");
    ctx_data.write().claimed_lines = lines;
    Ok::<_, AppError>(FlowControl::Continue)
  })?;

  // Step 2: price every claimed line against the catalog.
  flow.on("price_order_lines", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let summary = {
      let guard = ctx_data.read();
      CartSummary::price(&guard.claimed_lines, &guard.app_state.catalog)
    };
    if summary.is_empty() {
      warn!("Checkout: no claimed line could be priced.");
      return Err(AppError::Internal("None of the cart lines could be priced.".to_string()));
    }
    info!(total = %summary.total, items = summary.item_count, "Checkout: order priced.");
    ctx_data.write().summary = Some(summary);
    Ok::<_, AppError>(FlowControl::Continue)
  })?;

  // Step 3: simulated order processing.
  flow.on("record_order", |ctx_data: ContextData<CheckoutCtxData>| async move {
    let (orders, session_id, summary) = {
      let guard = ctx_data.read();
      (guard.app_state.orders.clone(), guard.session_id, guard.summary.clone())
    };
    let summary = summary.ok_or_else(|| AppError::Internal("Checkout: order was not priced.".to_string()))?;

    let receipt = OrderReceipt::new(session_id, summary);
    orders.record(receipt.clone());
    ctx_data.write().receipt = Some(receipt);
    Ok::<_, AppError>(FlowControl::Continue)
  })?;

  registry.register(flow);
  info!("Checkout flow registered.");
  Ok(())
}
