//! Errors raised while a machine consumes input.

use thiserror::Error;

/// Run-time failures of a configured machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError {
    #[error("Invalid input symbol: {symbol}")]
    InvalidSymbol { symbol: String },

    #[error("No transitions defined from current state: {state}")]
    NoTransitionsDefined { state: String },

    #[error("No transition for symbol {symbol} from state {state}")]
    NoTransitionForSymbol { state: String, symbol: String },

    #[error("Current state {state} is not an accepting state")]
    NotAccepting { state: String },
}
