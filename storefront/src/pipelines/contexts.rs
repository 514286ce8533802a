// storefront/src/pipelines/contexts.rs

//! Data the flows run against. Handlers receive these wrapped in
//! `storefront_core::ContextData`.

use crate::models::OrderReceipt;
use crate::state::AppState;
use storefront_core::{Cart, CartLine, CartSummary, ContextData, ProductId, SessionId};

#[derive(Clone)]
pub struct AddToCartCtxData {
  pub app_state: AppState,
  pub session_id: SessionId,
  pub product_id: ProductId,
  /// As submitted; may be zero, negative or out of range.
  pub requested_quantity: i64,
  /// Set once `validate_cart_input` accepts `requested_quantity`.
  pub quantity: Option<u32>,
  pub updated_line: Option<CartLine>,
}

impl AddToCartCtxData {
  pub fn new(app_state: AppState, session_id: SessionId, product_id: ProductId, requested_quantity: i64) -> Self {
    Self {
      app_state,
      session_id,
      product_id,
      requested_quantity,
      quantity: None,
      updated_line: None,
    }
  }
}

#[derive(Clone)]
pub struct CheckoutCtxData {
  pub app_state: AppState,
  pub session_id: SessionId,
  pub cart: ContextData<Cart>,
  /// Lines taken out of the cart by `claim_cart_lines`.
  pub claimed_lines: Vec<CartLine>,
  pub summary: Option<CartSummary>,
  pub receipt: Option<OrderReceipt>,
}

impl CheckoutCtxData {
  pub fn new(app_state: AppState, session_id: SessionId) -> Self {
    let cart = app_state.carts.cart(session_id);
    Self {
      app_state,
      session_id,
      cart,
      claimed_lines: Vec::new(),
      summary: None,
      receipt: None,
    }
  }
}
