//! Transition events and their ordered history.

use super::label::Label;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful transition.
///
/// # Example
///
/// ```rust
/// use statecraft::core::TransitionEvent;
///
/// let event = TransitionEvent::now("S0", '1', "S1");
/// assert_eq!(event.from, "S0");
/// assert_eq!(event.symbol, '1');
/// assert_eq!(event.to, "S1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent<S, Y> {
    /// The state the cursor left
    pub from: S,
    /// The symbol that was consumed
    pub symbol: Y,
    /// The state the cursor moved to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl<S, Y> TransitionEvent<S, Y> {
    /// Create an event stamped with the current time.
    pub fn now(from: S, symbol: Y, to: S) -> Self {
        Self {
            from,
            symbol,
            to,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of transition events.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{TransitionEvent, TransitionHistory};
///
/// let mut history = TransitionHistory::new();
/// history.push(TransitionEvent::now("S0", '1', "S1"));
/// history.push(TransitionEvent::now("S1", '0', "S2"));
///
/// assert_eq!(history.path(), vec![&"S0", &"S1", &"S2"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(
    serialize = "S: Serialize, Y: Serialize",
    deserialize = "S: Deserialize<'de>, Y: Deserialize<'de>"
))]
pub struct TransitionHistory<S, Y> {
    events: Vec<TransitionEvent<S, Y>>,
}

impl<S, Y> Default for TransitionHistory<S, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, Y> TransitionHistory<S, Y> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn push(&mut self, event: TransitionEvent<S, Y>) {
        self.events.push(event);
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[TransitionEvent<S, Y>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Time between the first and last recorded event.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.events.first()?, self.events.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl<S: Label, Y> TransitionHistory<S, Y> {
    /// States traversed: the first event's source, then every target.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.events.len() + 1);
        if let Some(first) = self.events.first() {
            path.push(&first.from);
        }
        path.extend(self.events.iter().map(|event| &event.to));
        path
    }
}
