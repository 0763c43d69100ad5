//! Consistency checks for machine configurations.
//!
//! Two entry points share one set of checks:
//!
//! - [`validate`] stops at the first problem, in invariant order: initial
//!   state, final states, table emptiness, source states, symbols, targets.
//! - [`audit`] accumulates every problem using Stillwater's `Validation`,
//!   for tooling that wants to report a broken configuration in one pass.

use crate::config::error::ConfigError;
use crate::config::MachineConfig;
use crate::core::Label;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a configuration, returning the first violation found.
///
/// # Example
///
/// ```rust
/// use statecraft::config::{validate, ConfigError, MachineConfig};
/// use statecraft::transition_table;
///
/// let config = MachineConfig::new(
///     ["S0", "S1"],
///     ['0', '1'],
///     "SX",
///     ["S1"],
///     transition_table! { "S0" => { '1' => "S1" } },
/// );
///
/// assert!(matches!(
///     validate(&config),
///     Err(ConfigError::UnknownInitialState { .. })
/// ));
/// ```
pub fn validate<S: Label, Y: Label>(config: &MachineConfig<S, Y>) -> Result<(), ConfigError> {
    match violations(config).into_iter().next() {
        Some(error) => Err(error),
        None => {
            log::debug!(
                "validated machine config: {} states, {} symbols, {} accepting",
                config.states.len(),
                config.alphabet.len(),
                config.finals.len()
            );
            Ok(())
        }
    }
}

/// Check a configuration, accumulating ALL violations.
///
/// Returns `Validation::Success(())` when the configuration is consistent.
pub fn audit<S: Label, Y: Label>(
    config: &MachineConfig<S, Y>,
) -> Validation<(), NonEmptyVec<ConfigError>> {
    let checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = violations(config)
        .into_iter()
        .map(Validation::fail)
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Every violation, grouped by invariant in checking order.
fn violations<S: Label, Y: Label>(config: &MachineConfig<S, Y>) -> Vec<ConfigError> {
    let states: HashSet<&S> = config.states.iter().collect();
    let alphabet: HashSet<&Y> = config.alphabet.iter().collect();
    let mut found = Vec::new();

    if !states.contains(&config.initial) {
        found.push(ConfigError::UnknownInitialState {
            state: config.initial.describe(),
        });
    }

    for state in config.finals.iter().filter(|s| !states.contains(s)) {
        found.push(ConfigError::UnknownFinalState {
            state: state.describe(),
        });
    }

    if config.transitions.values().all(|row| row.is_empty()) {
        found.push(ConfigError::EmptyTransitionTable);
    }

    for source in config.transitions.keys().filter(|s| !states.contains(s)) {
        found.push(ConfigError::UnknownSourceState {
            state: source.describe(),
        });
    }

    for (source, row) in &config.transitions {
        for symbol in row.keys().filter(|y| !alphabet.contains(y)) {
            found.push(ConfigError::UnknownSymbol {
                state: source.describe(),
                symbol: symbol.describe(),
            });
        }
    }

    for (source, row) in &config.transitions {
        for (symbol, target) in row.iter().filter(|(_, t)| !states.contains(t)) {
            found.push(ConfigError::UnknownTargetState {
                state: source.describe(),
                symbol: symbol.describe(),
                target: target.describe(),
            });
        }
    }

    found
}
