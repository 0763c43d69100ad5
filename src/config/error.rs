//! Configuration errors.

use thiserror::Error;

/// Errors that prevent a machine from being constructed.
///
/// Labels are carried in their `Debug` rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid initial state: {state} is not a declared state")]
    UnknownInitialState { state: String },

    #[error("Invalid final state: {state} is not a declared state")]
    UnknownFinalState { state: String },

    #[error("No transitions defined. Add at least one transition")]
    EmptyTransitionTable,

    #[error("Transitions defined from undeclared state {state}")]
    UnknownSourceState { state: String },

    #[error("Transition from {state} uses symbol {symbol} outside the alphabet")]
    UnknownSymbol { state: String, symbol: String },

    #[error("Transition from {state} on {symbol} targets undeclared state {target}")]
    UnknownTargetState {
        state: String,
        symbol: String,
        target: String,
    },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// Configuration could not be written as JSON
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Configuration JSON was malformed or did not match the label types
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
