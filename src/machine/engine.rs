//! Deterministic machine executing a validated configuration.

use crate::config::{validate, ConfigError, MachineConfig, TransitionTable};
use crate::core::{BoxedSink, Label, TransitionEvent, TransitionSink};
use crate::machine::error::MachineError;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// A deterministic finite automaton with a mutable cursor.
///
/// The configuration is validated once, at construction, and never changes
/// afterwards. The only thing that moves is the current state.
///
/// A machine is an ordinary mutable value: give each thread its own
/// instance or guard a shared one with a lock.
///
/// # Example
///
/// ```rust
/// use statecraft::{transition_table, Machine, MachineError};
///
/// let mut machine = Machine::from_parts(
///     ["S0", "S1", "S2"],
///     ['0', '1'],
///     "S0",
///     ["S2"],
///     transition_table! {
///         "S0" => { '0' => "S0", '1' => "S1" },
///         "S1" => { '0' => "S2", '1' => "S1" },
///         "S2" => { '0' => "S2", '1' => "S2" },
///     },
/// )
/// .unwrap();
///
/// assert_eq!(machine.run("10".chars()).unwrap(), "S2");
/// assert_eq!(machine.final_state().unwrap(), &"S2");
///
/// machine.run("1".chars()).unwrap();
/// assert!(matches!(
///     machine.final_state(),
///     Err(MachineError::NotAccepting { .. })
/// ));
/// ```
pub struct Machine<S: Label, Y: Label> {
    config: MachineConfig<S, Y>,
    alphabet: HashSet<Y>,
    finals: HashSet<S>,
    current: S,
    sink: Option<BoxedSink<S, Y>>,
}

impl<S: Label, Y: Label> Machine<S, Y> {
    /// Validate a configuration and position a new machine at its initial
    /// state.
    ///
    /// Repeated states, symbols or finals are tolerated and collapsed to
    /// their first occurrence.
    pub fn new(config: MachineConfig<S, Y>) -> Result<Self, ConfigError> {
        let config = config.deduplicated();
        validate(&config)?;

        Ok(Self {
            alphabet: config.alphabet.iter().cloned().collect(),
            finals: config.finals.iter().cloned().collect(),
            current: config.initial.clone(),
            config,
            sink: None,
        })
    }

    /// Positional form of [`Machine::new`].
    pub fn from_parts(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = Y>,
        initial: S,
        finals: impl IntoIterator<Item = S>,
        transitions: TransitionTable<S, Y>,
    ) -> Result<Self, ConfigError> {
        Self::new(MachineConfig::new(
            states,
            alphabet,
            initial,
            finals,
            transitions,
        ))
    }

    /// Attach a sink that observes every successful transition.
    pub fn with_sink(self, sink: impl TransitionSink<S, Y> + Send + 'static) -> Self {
        self.with_boxed_sink(Box::new(sink))
    }

    pub(crate) fn with_boxed_sink(mut self, sink: BoxedSink<S, Y>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The validated, deduplicated configuration.
    pub fn config(&self) -> &MachineConfig<S, Y> {
        &self.config
    }

    /// Declared states, in declaration order.
    pub fn states(&self) -> &[S] {
        &self.config.states
    }

    /// Declared input symbols, in declaration order.
    pub fn alphabet(&self) -> &[Y] {
        &self.config.alphabet
    }

    /// State the machine starts in and resets to.
    pub fn initial_state(&self) -> &S {
        &self.config.initial
    }

    /// Accepting states.
    pub fn final_states(&self) -> &[S] {
        &self.config.finals
    }

    /// State the cursor is on now.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Whether the cursor sits on an accepting state (pure).
    pub fn is_accepting(&self) -> bool {
        self.finals.contains(&self.current)
    }

    /// Look up the successor of `from` on `symbol` without moving the cursor.
    ///
    /// Checks, in order: the symbol is in the alphabet, `from` has any
    /// outgoing transitions, and `from` has one for this symbol. A row that
    /// is present but empty counts as having no outgoing transitions.
    pub fn next_state(&self, from: &S, symbol: &Y) -> Result<&S, MachineError> {
        if !self.alphabet.contains(symbol) {
            return Err(MachineError::InvalidSymbol {
                symbol: symbol.describe(),
            });
        }

        let row = match self.config.transitions.get(from) {
            Some(row) if !row.is_empty() => row,
            _ => {
                return Err(MachineError::NoTransitionsDefined {
                    state: from.describe(),
                })
            }
        };

        row.get(symbol).ok_or_else(|| MachineError::NoTransitionForSymbol {
            state: from.describe(),
            symbol: symbol.describe(),
        })
    }

    /// Consume one symbol, moving the cursor.
    ///
    /// On failure the cursor does not move.
    pub fn transition(&mut self, symbol: &Y) -> Result<(), MachineError> {
        let next = match self.next_state(&self.current, symbol) {
            Ok(next) => next.clone(),
            Err(e) => {
                log::debug!("transition rejected: {e}");
                return Err(e);
            }
        };

        let from = std::mem::replace(&mut self.current, next);
        log::debug!(
            "transitioning from {} to {} on symbol {}",
            from.describe(),
            self.current.describe(),
            symbol.describe()
        );

        if let Some(sink) = self.sink.as_mut() {
            sink.record(&TransitionEvent::now(from, symbol.clone(), self.current.clone()));
        }

        Ok(())
    }

    /// Reset, then consume `input` in order, returning the state reached.
    ///
    /// Stops at the first failing symbol. The cursor is left where the last
    /// successful symbol put it; it is not rolled back to the initial state.
    pub fn run<I>(&mut self, input: I) -> Result<S, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<Y>,
    {
        self.reset();
        for symbol in input {
            self.transition(symbol.borrow())?;
        }
        Ok(self.current.clone())
    }

    /// Run `input` and report whether it ends on an accepting state.
    pub fn accepts<I>(&mut self, input: I) -> Result<bool, MachineError>
    where
        I: IntoIterator,
        I::Item: Borrow<Y>,
    {
        self.run(input)?;
        Ok(self.is_accepting())
    }

    /// Move the cursor back to the initial state.
    pub fn reset(&mut self) {
        log::trace!("reset to {}", self.config.initial.describe());
        self.current = self.config.initial.clone();
    }

    /// Assert the cursor is on an accepting state and return it.
    pub fn final_state(&self) -> Result<&S, MachineError> {
        if self.is_accepting() {
            Ok(&self.current)
        } else {
            Err(MachineError::NotAccepting {
                state: self.current.describe(),
            })
        }
    }
}

impl<S: Label, Y: Label> fmt::Debug for Machine<S, Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}
