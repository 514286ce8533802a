// tests/registry_tests.rs
mod common;

use common::*;
use storefront_core::{ContextData, Flow, FlowControl, FlowOutcome, FlowRegistry};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AlphaContext {
  val: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct BetaContext {
  num: i32,
}

#[tokio::test]
async fn test_registry_dispatches_by_context_type() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();

  let mut alpha = Flow::<AlphaContext, TestError>::new("alpha", &[("alpha_task", false)]);
  alpha
    .on("alpha_task", |ctx: ContextData<AlphaContext>| async move {
      ctx.write().val = "alpha_processed".to_string();
      Ok::<_, TestError>(FlowControl::Continue)
    })
    .unwrap();
  registry.register(alpha);

  let mut beta = Flow::<BetaContext, TestError>::new("beta", &[("beta_task", false)]);
  beta
    .on("beta_task", |ctx: ContextData<BetaContext>| async move {
      ctx.write().num = 100;
      Ok::<_, TestError>(FlowControl::Continue)
    })
    .unwrap();
  registry.register(beta);

  assert_eq!(registry.len(), 2);
  assert!(registry.is_registered::<AlphaContext>());

  let ctx_alpha = ContextData::new(AlphaContext::default());
  assert_eq!(registry.run(ctx_alpha.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx_alpha.read().val, "alpha_processed");

  let ctx_beta = ContextData::new(BetaContext::default());
  assert_eq!(registry.run(ctx_beta.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx_beta.read().num, 100);
}

#[tokio::test]
async fn test_registry_rejects_unregistered_context() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();
  assert!(registry.is_empty());

  let err = registry.run(ContextData::new(AlphaContext::default())).await.unwrap_err();
  match err {
    TestError::Flow(msg) => assert!(msg.contains("NotRegistered"), "unexpected: {msg}"),
    other => panic!("expected a flow error, got {other:?}"),
  }
}

#[tokio::test]
async fn test_registering_again_replaces_flow() {
  setup_tracing();
  let registry = FlowRegistry::<TestError>::new();

  for label in ["old", "new"] {
    let mut flow = Flow::<AlphaContext, TestError>::new(label, &[("write", false)]);
    flow
      .on("write", move |ctx: ContextData<AlphaContext>| async move {
        ctx.write().val = label.to_string();
        Ok::<_, TestError>(FlowControl::Continue)
      })
      .unwrap();
    registry.register(flow);
  }

  let ctx = ContextData::new(AlphaContext::default());
  registry.run(ctx.clone()).await.unwrap();
  assert_eq!(registry.len(), 1);
  assert_eq!(ctx.read().val, "new");
}
