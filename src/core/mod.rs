//! Core vocabulary shared by every machine.
//!
//! - Labels for states and symbols via the `Label` trait
//! - Transition events and their ordered history
//! - Sinks that observe transitions without influencing them

mod event;
mod label;
mod sink;

pub use event::{TransitionEvent, TransitionHistory};
pub use label::Label;
pub(crate) use sink::BoxedSink;
pub use sink::{HistoryRecorder, TransitionSink};
