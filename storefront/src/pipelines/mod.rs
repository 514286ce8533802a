// storefront/src/pipelines/mod.rs

//! Defines and registers the flows behind the multi-step cart operations.

use crate::errors::AppError;
use storefront_core::FlowRegistry;

pub mod contexts;

pub mod cart_pipeline;
pub mod checkout_pipeline;

/// Registers every flow with `registry`. Called once while building `AppState`.
pub fn register_all_flows(registry: &FlowRegistry<AppError>) -> Result<(), AppError> {
  tracing::info!("Registering storefront flows...");

  cart_pipeline::register_add_to_cart_flow(registry)?;
  checkout_pipeline::register_checkout_flow(registry)?;

  tracing::info!(flows = registry.len(), "Storefront flows registered.");
  Ok(())
}
