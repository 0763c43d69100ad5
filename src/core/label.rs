//! Opaque labels for states and input symbols.
//!
//! The engine never looks inside a label. It only needs to clone, compare,
//! hash and print them, so any type with those capabilities can name a state
//! or a symbol: `&'static str`, `char`, `String`, integers or a closed enum.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and symbol labels.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type.
///
/// # Required Traits
///
/// - `Clone`: labels are copied into the cursor and into transition events
/// - `Eq` + `Hash`: labels are looked up in the transition table
/// - `Debug`: labels are rendered into error messages and log lines
///
/// # Example
///
/// ```rust
/// use statecraft::core::Label;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn describe<L: Label>(label: &L) -> String {
///     label.describe()
/// }
///
/// assert_eq!(describe(&Door::Open), "Open");
/// assert_eq!(describe(&'x'), "'x'");
/// ```
pub trait Label: Clone + Eq + Hash + Debug {
    /// Render the label for diagnostics.
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

impl<T: Clone + Eq + Hash + Debug> Label for T {}
