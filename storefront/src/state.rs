// storefront/src/state.rs
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::order_log::OrderLog;
use std::sync::Arc;
use storefront_core::{CartSessions, CatalogStore, FlowRegistry};

#[derive(Clone)]
pub struct AppState {
  /// Loaded once at startup, never mutated.
  pub catalog: Arc<CatalogStore>,
  pub carts: Arc<CartSessions>,
  pub orders: Arc<OrderLog>,
  pub flows: Arc<FlowRegistry<AppError>>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  /// State around `catalog` with empty carts, an empty order log and all
  /// flows registered.
  pub fn new(catalog: CatalogStore, config: AppConfig) -> Result<Self, AppError> {
    let state = AppState {
      catalog: Arc::new(catalog),
      carts: Arc::new(CartSessions::new()),
      orders: Arc::new(OrderLog::new()),
      flows: Arc::new(FlowRegistry::new()),
      config: Arc::new(config),
    };
    crate::pipelines::register_all_flows(&state.flows)?;
    Ok(state)
  }
}
