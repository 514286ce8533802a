// storefront_core/src/error.rs
use crate::catalog::ProductId;
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures raised by the catalog and the cart aggregator.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Product {product_id} not found")]
  ProductNotFound { product_id: ProductId },

  #[error("Invalid quantity {quantity}: must be at least 1")]
  InvalidQuantity { quantity: i64 },

  #[error("Quantity for product {product_id} would exceed the line limit")]
  QuantityOverflow { product_id: ProductId },

  #[error("The cart is empty")]
  EmptyCart,

  #[error("Catalog source '{source_name}' failed. Source: {source}")]
  Source {
    source_name: String,
    #[source]
    source: AnyhowError,
  },
}

/// Failures raised by the flow engine itself, as opposed to its handlers.
#[derive(Debug, Error)]
pub enum FlowError {
  #[error("Step not found: {step_name}")]
  StepNotFound { step_name: String },

  #[error("Handler missing for non-optional step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("No flow registered for context type {type_name}")]
  NotRegistered { type_name: String },

  #[error("Type mismatch during context downcast (expected {expected_type})")]
  TypeMismatch { expected_type: String },

  #[error("Internal flow error: {0}")]
  Internal(String),
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;
