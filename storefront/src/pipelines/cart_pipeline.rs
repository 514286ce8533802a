// storefront/src/pipelines/cart_pipeline.rs

use crate::errors::AppError;
use crate::pipelines::contexts::AddToCartCtxData;
use storefront_core::{ContextData, Flow, FlowControl, FlowRegistry, StoreError};
use tracing::{info, warn};

pub fn register_add_to_cart_flow(registry: &FlowRegistry<AppError>) -> Result<(), AppError> {
  let mut flow = Flow::<AddToCartCtxData, AppError>::new(
    "add_to_cart",
    &[("validate_cart_input", false), ("merge_into_cart", false)],
  );

  // Step 1: the submitted quantity must be positive and fit a cart line.
  flow.on("validate_cart_input", |ctx_data: ContextData<AddToCartCtxData>| async move {
    let requested = ctx_data.read().requested_quantity;
    if requested < 1 {
      warn!(requested, "Add to Cart: rejecting non-positive quantity.");
      return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
    }
    let quantity = u32::try_from(requested)
      .map_err(|_| AppError::Validation(format!("Quantity {} is too large.", requested)))?;
    ctx_data.write().quantity = Some(quantity);
    Ok::<_, AppError>(FlowControl::Continue)
  })?;

  // Step 2: look the product up and add it, accumulating onto an existing line.
  // The session's cart is only opened once the product is known to exist.
  flow.on("merge_into_cart", |ctx_data: ContextData<AddToCartCtxData>| async move {
    let (app_state, session_id, product_id, quantity) = {
      let guard = ctx_data.read();
      (guard.app_state.clone(), guard.session_id, guard.product_id, guard.quantity)
    };
    let quantity =
      quantity.ok_or_else(|| AppError::Internal("Add to Cart: quantity was not validated.".to_string()))?;
    if !app_state.catalog.contains(product_id) {
      warn!(product_id, "Add to Cart: product not in catalog.");
      return Err(StoreError::ProductNotFound { product_id }.into());
    }

    let cart = app_state.carts.cart(session_id);
    let line = cart.write().add(&app_state.catalog, product_id, quantity)?;
    info!(
      %session_id,
      product_id,
      added = quantity,
      line_quantity = line.quantity,
      "Add to Cart: line updated."
    );
    ctx_data.write().updated_line = Some(line);
    Ok::<_, AppError>(FlowControl::Continue)
  })?;

  registry.register(flow);
  info!("Add to Cart flow registered.");
  Ok(())
}
