// storefront_core/src/flow/mod.rs

//! A small step-flow engine: multi-step operations (adding to a cart,
//! checking out) are written as named steps over shared context data.

pub mod context_data;
pub mod control;
pub mod definition;
pub mod execution;
pub mod registry;

pub use context_data::ContextData;
pub use control::{FlowControl, FlowOutcome};
pub use definition::{Flow, Handler, StepDef};
pub use registry::FlowRegistry;
