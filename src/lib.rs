//! Statecraft: a generic deterministic finite automaton engine
//!
//! A machine is described by plain data: states, an input alphabet, an
//! initial state, accepting states and a partial transition table. The
//! description is validated once, when the machine is constructed, and only
//! a consistent description yields a machine. From then on the only thing
//! that changes is the cursor tracking the current state.
//!
//! # Core Concepts
//!
//! - **Labels**: any `Clone + Eq + Hash + Debug` type names a state or symbol
//! - **Configuration**: [`MachineConfig`], loadable from JSON
//! - **Machine**: [`Machine`] steps, runs, resets and asserts acceptance
//! - **Sinks**: observers of successful transitions, unable to affect them
//! - **ModThree**: a fixed three-state machine computing `n mod 3`
//!
//! # Example
//!
//! ```rust
//! use statecraft::{transition_table, Machine, MachineError};
//!
//! let mut machine = Machine::from_parts(
//!     ["S0", "S1", "S2"],
//!     ['0', '1'],
//!     "S0",
//!     ["S2"],
//!     transition_table! {
//!         "S0" => { '0' => "S0", '1' => "S1" },
//!         "S1" => { '0' => "S2", '1' => "S1" },
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(machine.run("110".chars()).unwrap(), "S2");
//!
//! // S2 has no outgoing transitions.
//! assert!(matches!(
//!     machine.run("1100".chars()),
//!     Err(MachineError::NoTransitionsDefined { .. })
//! ));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod mod_three;

// Re-export commonly used types
pub use builder::MachineBuilder;
pub use config::{ConfigError, MachineConfig, TransitionTable};
pub use core::{HistoryRecorder, Label, TransitionEvent, TransitionHistory, TransitionSink};
pub use machine::{Machine, MachineError};
pub use mod_three::{ModThree, Residue};
