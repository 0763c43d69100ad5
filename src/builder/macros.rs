//! Macros for ergonomic machine construction.

/// Build a [`TransitionTable`](crate::config::TransitionTable) literal.
///
/// Each row maps a source state to `symbol => target` pairs. Rows may be
/// empty, which declares a state with no outgoing transitions.
///
/// # Example
///
/// ```
/// use statecraft::transition_table;
///
/// let table = transition_table! {
///     "S0" => { '0' => "S0", '1' => "S1" },
///     "S1" => { '0' => "S1" },
///     "S2" => {},
/// };
///
/// assert_eq!(table["S0"][&'1'], "S1");
/// assert!(table["S2"].is_empty());
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $(
            $from:expr => { $($symbol:expr => $to:expr),* $(,)? }
        ),* $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut table = ::std::collections::HashMap::new();
        $(
            #[allow(unused_mut)]
            let mut row = ::std::collections::HashMap::new();
            $( row.insert($symbol, $to); )*
            table.insert($from, row);
        )*
        table
    }};
}
