//! Builder for constructing machines.

use crate::config::{ConfigError, MachineConfig, TransitionTable};
use crate::core::{BoxedSink, Label, TransitionSink};
use crate::machine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```
/// use statecraft::builder::MachineBuilder;
///
/// let mut parity = MachineBuilder::new()
///     .states(["even", "odd"])
///     .alphabet([0u8, 1])
///     .initial("even")
///     .finals(["even"])
///     .transition("even", 0, "even")
///     .transition("even", 1, "odd")
///     .transition("odd", 0, "odd")
///     .transition("odd", 1, "even")
///     .build()
///     .unwrap();
///
/// assert!(parity.accepts([1u8, 0, 1]).unwrap());
/// assert!(!parity.accepts([1u8, 1, 1]).unwrap());
/// ```
pub struct MachineBuilder<S: Label, Y: Label> {
    states: Vec<S>,
    alphabet: Vec<Y>,
    initial: Option<S>,
    finals: Vec<S>,
    transitions: TransitionTable<S, Y>,
    sink: Option<BoxedSink<S, Y>>,
}

impl<S: Label, Y: Label> MachineBuilder<S, Y> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            initial: None,
            finals: Vec::new(),
            transitions: TransitionTable::new(),
            sink: None,
        }
    }

    /// Declare states, in addition to any declared earlier.
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare input symbols, in addition to any declared earlier.
    pub fn alphabet(mut self, symbols: impl IntoIterator<Item = Y>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark states as accepting.
    pub fn finals(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.finals.extend(states);
        self
    }

    /// Add one transition. A later entry for the same pair replaces the
    /// earlier one.
    pub fn transition(mut self, from: S, symbol: Y, to: S) -> Self {
        self.transitions.entry(from).or_default().insert(symbol, to);
        self
    }

    /// Add a whole table at once, merging row by row.
    pub fn transitions(mut self, table: TransitionTable<S, Y>) -> Self {
        for (from, row) in table {
            self.transitions.entry(from).or_default().extend(row);
        }
        self
    }

    /// Attach a transition sink (optional).
    pub fn sink(mut self, sink: impl TransitionSink<S, Y> + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// The configuration collected so far, without validating it.
    pub fn config(self) -> Result<MachineConfig<S, Y>, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        Ok(MachineConfig {
            states: self.states,
            alphabet: self.alphabet,
            initial,
            finals: self.finals,
            transitions: self.transitions,
        })
    }

    /// Validate and build the machine.
    pub fn build(mut self) -> Result<Machine<S, Y>, ConfigError> {
        let sink = self.sink.take();
        let machine = Machine::new(self.config()?)?;

        Ok(match sink {
            Some(sink) => machine.with_boxed_sink(sink),
            None => machine,
        })
    }
}

impl<S: Label, Y: Label> Default for MachineBuilder<S, Y> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryRecorder;
    use crate::transition_table;

    #[test]
    fn builder_requires_initial_state() {
        let result = MachineBuilder::<&str, char>::new()
            .states(["A"])
            .alphabet(['x'])
            .transition("A", 'x', "A")
            .build();

        assert!(matches!(result, Err(ConfigError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_transitions() {
        let result = MachineBuilder::<&str, char>::new()
            .states(["A"])
            .alphabet(['x'])
            .initial("A")
            .build();

        assert!(matches!(result, Err(ConfigError::EmptyTransitionTable)));
    }

    #[test]
    fn builder_validates_configuration() {
        let result = MachineBuilder::new()
            .states(["A"])
            .alphabet(['x'])
            .initial("A")
            .transition("A", 'x', "B")
            .build();

        assert!(matches!(result, Err(ConfigError::UnknownTargetState { .. })));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .states(["A", "B"])
            .alphabet(['x'])
            .initial("A")
            .finals(["B"])
            .transition("A", 'x', "B")
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), &"A");
        assert_eq!(machine.final_states(), &["B"]);
    }

    #[test]
    fn later_transition_replaces_earlier() {
        let mut machine = MachineBuilder::new()
            .states(["A", "B", "C"])
            .alphabet(['x'])
            .initial("A")
            .transition("A", 'x', "B")
            .transition("A", 'x', "C")
            .build()
            .unwrap();

        assert_eq!(machine.run(['x']), Ok("C"));
    }

    #[test]
    fn transitions_merge_with_single_entries() {
        let config = MachineBuilder::new()
            .states(["A", "B"])
            .alphabet(['x', 'y'])
            .initial("A")
            .transition("A", 'x', "B")
            .transitions(transition_table! { "A" => { 'y' => "A" } })
            .config()
            .unwrap();

        assert_eq!(config.transitions["A"].len(), 2);
    }

    #[test]
    fn builder_attaches_sink() {
        let recorder = HistoryRecorder::new();
        let mut machine = MachineBuilder::new()
            .states(["A", "B"])
            .alphabet(['x'])
            .initial("A")
            .transition("A", 'x', "B")
            .sink(recorder.clone())
            .build()
            .unwrap();

        machine.run(['x']).unwrap();

        assert_eq!(recorder.len(), 1);
    }
}
