//! Machine configuration: the immutable description a machine runs.
//!
//! A [`MachineConfig`] is plain data. It can be written by hand, assembled
//! with [`MachineBuilder`](crate::builder::MachineBuilder), or loaded from
//! JSON. Nothing about it is checked until it is validated, which happens
//! automatically when a [`Machine`](crate::Machine) is constructed.
//!
//! # Example
//!
//! ```rust
//! use statecraft::config::MachineConfig;
//! use statecraft::Machine;
//!
//! let json = r#"{
//!     "states": ["locked", "unlocked"],
//!     "alphabet": ["coin", "push"],
//!     "initial": "locked",
//!     "finals": ["locked"],
//!     "transitions": {
//!         "locked": { "coin": "unlocked", "push": "locked" },
//!         "unlocked": { "coin": "unlocked", "push": "locked" }
//!     }
//! }"#;
//!
//! let config: MachineConfig<String, String> = MachineConfig::from_json(json).unwrap();
//! let mut turnstile = Machine::new(config).unwrap();
//!
//! let end = turnstile
//!     .run(["coin", "push"].map(String::from))
//!     .unwrap();
//! assert_eq!(end, "locked");
//! ```

pub mod error;
pub mod validate;

pub use error::ConfigError;
pub use validate::{audit, validate};

use crate::core::Label;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Partial transition function: source state -> symbol -> target state.
///
/// Either level may omit entries.
pub type TransitionTable<S, Y> = HashMap<S, HashMap<Y, S>>;

/// Declared states, alphabet, initial and accepting states, and transitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, Y: Serialize",
    deserialize = "S: Deserialize<'de>, Y: Deserialize<'de>"
))]
pub struct MachineConfig<S: Label, Y: Label> {
    /// Every state the machine may occupy
    pub states: Vec<S>,
    /// Symbols accepted as input
    pub alphabet: Vec<Y>,
    /// State the cursor starts in and returns to on reset
    pub initial: S,
    /// Accepting states, possibly none
    #[serde(default)]
    pub finals: Vec<S>,
    /// Partial transition function
    #[serde(default)]
    pub transitions: TransitionTable<S, Y>,
}

impl<S: Label, Y: Label> MachineConfig<S, Y> {
    pub fn new(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = Y>,
        initial: S,
        finals: impl IntoIterator<Item = S>,
        transitions: TransitionTable<S, Y>,
    ) -> Self {
        Self {
            states: states.into_iter().collect(),
            alphabet: alphabet.into_iter().collect(),
            initial,
            finals: finals.into_iter().collect(),
            transitions,
        }
    }

    /// Load a configuration from JSON.
    ///
    /// Only the shape is checked here; call [`validate`] or construct a
    /// machine to check consistency.
    pub fn from_json(json: &str) -> Result<Self, ConfigError>
    where
        S: DeserializeOwned,
        Y: DeserializeOwned,
    {
        serde_json::from_str(json).map_err(|e| ConfigError::DeserializationFailed(e.to_string()))
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError>
    where
        S: Serialize,
        Y: Serialize,
    {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationFailed(e.to_string()))
    }

    /// Drop repeated states, symbols and finals, keeping first occurrences.
    pub(crate) fn deduplicated(mut self) -> Self {
        dedup_in_order(&mut self.states);
        dedup_in_order(&mut self.alphabet);
        dedup_in_order(&mut self.finals);
        self
    }
}

fn dedup_in_order<T: Label>(items: &mut Vec<T>) {
    let mut seen = HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition_table;

    fn sample() -> MachineConfig<String, String> {
        MachineConfig::new(
            ["S0", "S1"].map(String::from),
            ["a", "b"].map(String::from),
            "S0".to_string(),
            ["S1".to_string()],
            transition_table! {
                "S0".to_string() => { "a".to_string() => "S1".to_string() },
            },
        )
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = sample();
        let json = config.to_json().unwrap();
        let restored = MachineConfig::from_json(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn missing_finals_and_transitions_default_to_empty() {
        let json = r#"{ "states": ["A"], "alphabet": ["x"], "initial": "A" }"#;
        let config: MachineConfig<String, String> = MachineConfig::from_json(json).unwrap();

        assert!(config.finals.is_empty());
        assert!(config.transitions.is_empty());
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = MachineConfig::<String, String>::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn missing_initial_is_a_deserialization_error() {
        let json = r#"{ "states": ["A"], "alphabet": ["x"] }"#;
        let result = MachineConfig::<String, String>::from_json(json);
        assert!(matches!(result, Err(ConfigError::DeserializationFailed(_))));
    }

    #[test]
    fn deduplicated_keeps_first_occurrence_order() {
        let config = MachineConfig::new(
            ["S1", "S0", "S1", "S0"],
            ['1', '0', '1'],
            "S0",
            ["S1", "S1"],
            transition_table! { "S0" => { '0' => "S1" } },
        )
        .deduplicated();

        assert_eq!(config.states, vec!["S1", "S0"]);
        assert_eq!(config.alphabet, vec!['1', '0']);
        assert_eq!(config.finals, vec!["S1"]);
    }
}
