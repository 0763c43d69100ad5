//! Observers for transition events.
//!
//! A sink is told about every successful transition after the cursor has
//! moved. Recording is infallible: a sink cannot abort or alter a step.

use super::event::{TransitionEvent, TransitionHistory};
use std::sync::{Arc, Mutex};

pub(crate) type BoxedSink<S, Y> = Box<dyn TransitionSink<S, Y> + Send>;

/// Receiver of transition events.
///
/// Any `FnMut(&TransitionEvent<S, Y>)` closure is a sink.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{TransitionEvent, TransitionSink};
///
/// let mut seen = Vec::new();
/// {
///     let mut sink = |event: &TransitionEvent<&'static str, char>| seen.push(event.to);
///     sink.record(&TransitionEvent::now("S0", '1', "S1"));
/// }
/// assert_eq!(seen, vec!["S1"]);
/// ```
pub trait TransitionSink<S, Y> {
    fn record(&mut self, event: &TransitionEvent<S, Y>);
}

impl<S, Y, F> TransitionSink<S, Y> for F
where
    F: FnMut(&TransitionEvent<S, Y>),
{
    fn record(&mut self, event: &TransitionEvent<S, Y>) {
        self(event)
    }
}

/// Shared, cloneable sink that keeps every event it receives.
///
/// Hand one clone to a machine and keep another to read the history back.
///
/// # Example
///
/// ```rust
/// use statecraft::core::HistoryRecorder;
/// use statecraft::transition_table;
/// use statecraft::Machine;
///
/// let recorder = HistoryRecorder::new();
/// let mut machine = Machine::from_parts(
///     ["S0", "S1"],
///     ['0', '1'],
///     "S0",
///     ["S1"],
///     transition_table! {
///         "S0" => { '0' => "S0", '1' => "S1" },
///         "S1" => { '0' => "S1", '1' => "S1" },
///     },
/// )
/// .unwrap()
/// .with_sink(recorder.clone());
///
/// machine.run("01".chars()).unwrap();
///
/// let history = recorder.snapshot();
/// assert_eq!(history.path(), vec![&"S0", &"S0", &"S1"]);
/// ```
pub struct HistoryRecorder<S, Y> {
    inner: Arc<Mutex<TransitionHistory<S, Y>>>,
}

impl<S, Y> HistoryRecorder<S, Y> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(TransitionHistory::new())),
        }
    }

    /// Copy of everything recorded so far.
    ///
    /// A poisoned lock yields an empty history.
    pub fn snapshot(&self) -> TransitionHistory<S, Y>
    where
        S: Clone,
        Y: Clone,
    {
        self.inner
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|history| history.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut history) = self.inner.lock() {
            history.clear();
        }
    }
}

impl<S, Y> Clone for HistoryRecorder<S, Y> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, Y> Default for HistoryRecorder<S, Y> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, Y: Clone> TransitionSink<S, Y> for HistoryRecorder<S, Y> {
    fn record(&mut self, event: &TransitionEvent<S, Y>) {
        // Dropping the event on a poisoned lock keeps the step infallible.
        if let Ok(mut history) = self.inner.lock() {
            history.push(event.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_sink_receives_events() {
        let mut targets = Vec::new();
        {
            let mut sink = |event: &TransitionEvent<u8, char>| targets.push(event.to);
            sink.record(&TransitionEvent::now(0, '1', 1));
            sink.record(&TransitionEvent::now(1, '0', 2));
        }
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn closure_sink_can_keep_borrowed_labels() {
        let mut seen: Vec<&str> = Vec::new();
        {
            let mut sink = |event: &TransitionEvent<&'static str, char>| seen.push(event.to);
            sink.record(&TransitionEvent::now("S0", '1', "S1"));
            sink.record(&TransitionEvent::now("S1", '0', "S2"));
        }
        assert_eq!(seen, vec!["S1", "S2"]);
    }

    #[test]
    fn recorder_clones_share_history() {
        let recorder: HistoryRecorder<&str, char> = HistoryRecorder::new();
        let mut handle = recorder.clone();

        handle.record(&TransitionEvent::now("A", 'x', "B"));
        handle.record(&TransitionEvent::now("B", 'y', "C"));

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.snapshot().path(), vec![&"A", &"B", &"C"]);
    }

    #[test]
    fn clear_empties_every_clone() {
        let recorder: HistoryRecorder<&str, char> = HistoryRecorder::new();
        let mut handle = recorder.clone();
        handle.record(&TransitionEvent::now("A", 'x', "B"));

        recorder.clear();

        assert!(handle.is_empty());
    }

    #[test]
    fn poisoned_recorder_drops_events_quietly() {
        let recorder: HistoryRecorder<&str, char> = HistoryRecorder::new();
        let poisoner = recorder.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let mut handle = recorder.clone();
        handle.record(&TransitionEvent::now("A", 'x', "B"));

        assert_eq!(recorder.len(), 0);
        assert!(recorder.snapshot().is_empty());
    }
}
