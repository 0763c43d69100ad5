//! Remainder of a binary number modulo 3, computed by a three-state machine.
//!
//! Each state is the residue of the bits read so far. Reading bit `b` in
//! residue `r` moves to `(2r + b) mod 3`; the table below spells that out
//! so the remainder comes from simulation, not arithmetic.

use crate::config::MachineConfig;
use crate::core::TransitionSink;
use crate::machine::{Machine, MachineError};
use crate::transition_table;
use serde::{Deserialize, Serialize};

/// Residue of the binary prefix consumed so far.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Residue {
    Zero,
    One,
    Two,
}

impl Residue {
    pub const ALL: [Residue; 3] = [Residue::Zero, Residue::One, Residue::Two];

    /// Integer value of the residue.
    pub fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// The fixed mod-three configuration. Every state accepts.
pub fn config() -> MachineConfig<Residue, char> {
    use Residue::*;

    MachineConfig::new(
        Residue::ALL,
        ['0', '1'],
        Zero,
        Residue::ALL,
        transition_table! {
            Zero => { '0' => Zero, '1' => One },
            One => { '0' => Two, '1' => Zero },
            Two => { '0' => One, '1' => Two },
        },
    )
}

/// Reusable mod-three calculator.
///
/// # Example
///
/// ```rust
/// use statecraft::ModThree;
///
/// let mut fsm = ModThree::new();
/// assert_eq!(fsm.run("1101").unwrap(), 1); // 13 % 3
/// assert_eq!(fsm.run("1001").unwrap(), 0); // 9 % 3
/// assert!(fsm.run("10a01").is_err());
/// ```
#[derive(Debug)]
pub struct ModThree {
    machine: Machine<Residue, char>,
}

impl ModThree {
    pub fn new() -> Self {
        let machine = Machine::new(config()).expect("mod-three configuration is always valid");
        Self { machine }
    }

    /// Attach a sink observing every bit consumed.
    pub fn with_sink(self, sink: impl TransitionSink<Residue, char> + Send + 'static) -> Self {
        Self {
            machine: self.machine.with_sink(sink),
        }
    }

    /// Remainder of `binary` (most significant bit first) modulo 3.
    ///
    /// The empty string is 0. Any character other than `0` or `1` fails
    /// with [`MachineError::InvalidSymbol`].
    pub fn run(&mut self, binary: &str) -> Result<u8, MachineError> {
        self.machine.run(binary.chars())?;
        Ok(self.machine.final_state()?.value())
    }

    pub fn machine(&self) -> &Machine<Residue, char> {
        &self.machine
    }
}

impl Default for ModThree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(ModThree::new().run(""), Ok(0));
    }

    #[test]
    fn single_bits() {
        let mut fsm = ModThree::new();
        assert_eq!(fsm.run("0"), Ok(0));
        assert_eq!(fsm.run("1"), Ok(1));
    }

    #[test]
    fn known_binaries() {
        let mut fsm = ModThree::new();
        assert_eq!(fsm.run("1101"), Ok(1));
        assert_eq!(fsm.run("1001"), Ok(0));
        assert_eq!(fsm.run("111"), Ok(1));
        assert_eq!(fsm.run("1010"), Ok(1));
    }

    #[test]
    fn table_follows_residue_rule() {
        let fsm = ModThree::new();
        for residue in Residue::ALL {
            for (bit, symbol) in [(0, '0'), (1, '1')] {
                let next = fsm.machine().next_state(&residue, &symbol).unwrap();
                assert_eq!(next.value(), (2 * residue.value() + bit) % 3);
            }
        }
    }

    #[test]
    fn invalid_symbol_propagates_unchanged() {
        let mut fsm = ModThree::new();
        assert_eq!(
            fsm.run("10a01"),
            Err(MachineError::InvalidSymbol {
                symbol: "'a'".to_string()
            })
        );
        assert_eq!(fsm.machine().current_state(), &Residue::Two);
    }

    #[test]
    fn every_state_accepts() {
        let fsm = ModThree::new();
        assert_eq!(fsm.machine().final_states(), &Residue::ALL);
    }

    #[test]
    fn consecutive_runs_do_not_leak_state() {
        let mut fsm = ModThree::new();
        assert_eq!(fsm.run("110"), Ok(0));
        assert_eq!(fsm.run("1"), Ok(1));
        assert_eq!(fsm.run("10"), Ok(2));
    }
}
