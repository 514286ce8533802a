// tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use std::str::FromStr;
use storefront_core::{
  CatalogSnapshot, CatalogStore, Category, ContextData, Decimal, FlowControl, FlowError, Handler, Product,
};
use tracing::Level;

// --- Catalog fixtures ---

pub fn dec(raw: &str) -> Decimal {
  Decimal::from_str(raw).expect("valid decimal literal")
}

pub fn product(id: i64, name: &str, price: &str, category_id: i64) -> Product {
  Product {
    id,
    name: name.to_string(),
    price: dec(price),
    category_id,
    description: None,
    image: None,
  }
}

/// Two categories, five products, deliberately out of id order.
pub fn sample_snapshot() -> CatalogSnapshot {
  CatalogSnapshot {
    products: vec![
      product(3, "Espresso Machine", "249.00", 1),
      product(1, "Electric Kettle", "39.90", 1),
      product(2, "French Press", "24.50", 1),
      product(10, "Linen Apron", "18.00", 2),
      product(11, "Cast Iron Skillet", "54.25", 2),
    ],
    categories: vec![
      Category {
        id: 1,
        name: "Coffee & Tea".to_string(),
      },
      Category {
        id: 2,
        name: "Kitchen".to_string(),
      },
    ],
  }
}

pub fn sample_store() -> CatalogStore {
  CatalogStore::from_snapshot(sample_snapshot())
}

// --- Flow fixtures ---

#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("Flow framework error: {0}")]
  Flow(String),

  #[error("Test handler failed: {0}")]
  Handler(String),
}

impl From<FlowError> for TestError {
  fn from(fe: FlowError) -> Self {
    TestError::Flow(format!("{:?}", fe))
  }
}

pub fn recording_handler(step_name: &'static str) -> Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.steps_executed.push(step_name.to_string());
      if guard.should_stop_at.as_deref() == Some(step_name) {
        return Ok(FlowControl::Stop);
      }
      Ok(FlowControl::Continue)
    })
  })
}

pub fn failing_handler(step_name: &'static str, message: &'static str) -> Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      Err(TestError::Handler(message.to_string()))
    })
  })
}

// --- Tracing (once per test binary) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
