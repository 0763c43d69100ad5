//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and a table macro for assembling
//! configurations with minimal boilerplate. Everything built here goes
//! through the same validation as [`Machine::new`](crate::Machine::new).

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
