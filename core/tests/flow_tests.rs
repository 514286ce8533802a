// tests/flow_tests.rs
mod common;

use common::*;
use serial_test::serial;
use storefront_core::{ContextData, Flow, FlowControl, FlowError, FlowOutcome};

#[tokio::test]
#[serial]
async fn test_flow_runs_steps_in_order() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("ordered", &[("one", false), ("two", false), ("three", false)]);
  flow.on("one", recording_handler("one")).unwrap();
  flow.on("two", recording_handler("two")).unwrap();
  flow.on("three", recording_handler("three")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Completed);
  let guard = ctx.read();
  assert_eq!(guard.counter, 3);
  assert_eq!(guard.steps_executed, vec!["one", "two", "three"]);
}

#[tokio::test]
#[serial]
async fn test_flow_stops_on_stop_signal() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("stopping", &[("a", false), ("halt", false), ("c", false)]);
  flow.on("a", recording_handler("a")).unwrap();
  flow.on("halt", recording_handler("halt")).unwrap();
  flow.on("c", recording_handler("c")).unwrap();

  let ctx = ContextData::new(TestContext {
    should_stop_at: Some("halt".to_string()),
    ..Default::default()
  });
  let outcome = flow.run(ctx.clone()).await.unwrap();

  assert_eq!(outcome, FlowOutcome::Stopped);
  assert_eq!(ctx.read().steps_executed, vec!["a", "halt"]);
}

#[tokio::test]
#[serial]
async fn test_flow_propagates_handler_error() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("failing", &[("good", false), ("bad", false), ("never", false)]);
  flow.on("good", recording_handler("good")).unwrap();
  flow.on("bad", failing_handler("bad", "boom")).unwrap();
  flow.on("never", recording_handler("never")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  let err = flow.run(ctx.clone()).await.unwrap_err();

  assert_eq!(err, TestError::Handler("boom".to_string()));
  assert_eq!(ctx.read().steps_executed, vec!["good", "bad"]);
}

#[tokio::test]
#[serial]
async fn test_missing_handler_on_required_step_fails() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("incomplete", &[("present", false), ("absent", false)]);
  flow.on("present", recording_handler("present")).unwrap();

  let err = flow.run(ContextData::new(TestContext::default())).await.unwrap_err();
  match err {
    TestError::Flow(msg) => assert!(msg.contains("HandlerMissing"), "unexpected: {msg}"),
    other => panic!("expected a flow error, got {other:?}"),
  }
}

#[tokio::test]
#[serial]
async fn test_optional_step_without_handler_is_skipped() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("optional", &[("maybe", true), ("always", false)]);
  flow.on("always", recording_handler("always")).unwrap();

  let ctx = ContextData::new(TestContext::default());
  assert_eq!(flow.run(ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().steps_executed, vec!["always"]);
}

#[tokio::test]
#[serial]
async fn test_handlers_on_one_step_run_in_registration_order() {
  setup_tracing();
  let mut flow = Flow::<TestContext, TestError>::new("multi", &[("step", false)]);
  flow
    .on("step", |ctx: ContextData<TestContext>| async move {
      ctx.write().steps_executed.push("first".to_string());
      Ok::<_, TestError>(FlowControl::Continue)
    })
    .unwrap()
    .on("step", |ctx: ContextData<TestContext>| async move {
      ctx.write().steps_executed.push("second".to_string());
      Ok::<_, FlowError>(FlowControl::Continue)
    })
    .unwrap();

  let ctx = ContextData::new(TestContext::default());
  flow.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().steps_executed, vec!["first", "second"]);
}

#[test]
fn test_registering_on_unknown_step_is_rejected() {
  let mut flow = Flow::<TestContext, TestError>::new("strict", &[("known", false)]);
  let err = flow.on("typo", recording_handler("typo")).err();
  assert!(matches!(err, Some(FlowError::StepNotFound { step_name }) if step_name == "typo"));
  assert_eq!(flow.step_names().collect::<Vec<_>>(), vec!["known"]);
}
