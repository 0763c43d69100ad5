//! Execution of validated configurations.
//!
//! # Key Concepts
//!
//! - **Cursor**: the current state, the only thing that changes after
//!   construction
//! - **Step**: one symbol consumed via [`Machine::transition`]
//! - **Run**: reset, then a whole sequence, aborting at the first failure
//! - **Acceptance**: [`Machine::final_state`] asserts the cursor is accepting

mod engine;
mod error;

pub use engine::Machine;
pub use error::MachineError;
