// storefront_core/src/flow/control.rs

//! Signals a step handler returns, and the outcome of a whole flow run.

/// Returned by a handler to say whether the flow should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
  /// Run the remaining handlers of this step and the following steps.
  Continue,
  /// Halt the flow here. No further handlers run.
  Stop,
}

/// Outcome of a flow run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  /// Every step ran.
  Completed,
  /// A handler returned `FlowControl::Stop`.
  Stopped,
}
