// storefront/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use storefront_core::{FlowError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Your cart is empty.")]
  EmptyCart,

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Catalog Error: {0}")]
  Catalog(String),

  #[error("Flow Error: {source}")]
  Flow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::ProductNotFound { product_id } => AppError::NotFound(format!("Product {} does not exist.", product_id)),
      StoreError::InvalidQuantity { quantity } => {
        AppError::Validation(format!("Quantity must be a positive number, got {}.", quantity))
      }
      StoreError::QuantityOverflow { product_id } => {
        AppError::Validation(format!("Quantity for product {} is too large.", product_id))
      }
      StoreError::EmptyCart => AppError::EmptyCart,
      source @ StoreError::Source { .. } => AppError::Catalog(source.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::EmptyCart => StatusCode::CONFLICT,
      AppError::Config(_) | AppError::Catalog(_) | AppError::Flow { .. } | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::info!(application_error = %self, "Rejecting request");
    }
    match self {
      AppError::Validation(m) | AppError::NotFound(m) => HttpResponse::build(status).json(json!({"error": m})),
      AppError::EmptyCart => HttpResponse::build(status).json(json!({"error": self.to_string()})),
      AppError::Config(m) => HttpResponse::build(status).json(json!({"error": "Configuration issue", "detail": m})),
      AppError::Catalog(m) => HttpResponse::build(status).json(json!({"error": "Catalog unavailable", "detail": m})),
      AppError::Flow { source } => {
        HttpResponse::build(status).json(json!({"error": "Order processing error", "detail": source.to_string()}))
      }
      AppError::Internal(m) => {
        HttpResponse::build(status).json(json!({"error": "An internal error occurred", "detail": m}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
