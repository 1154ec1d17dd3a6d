//! Automaton Builder
//!
//! Builds the full transition table of a pattern, one state at a time.
//! For state `i` (the first `i` symbols matched) the rules are, lowest priority first:
//!
//! 1. `pattern[0] -> 1` (restart)
//! 2. `pattern[k] -> k + 1` for every border `k` of `pattern[..i]`, ascending,
//!    so the longest border wins
//! 3. `pattern[i] -> i + 1` (continue the match), except in the terminal state
//!
//! Anything else falls back to state 0.
//!
//! Because rows `0..s` only depend on `pattern[..s]`, a table built for a prefix
//! can be extended in place instead of rebuilt: finalize the old terminal row,
//! then append rows `s + 1..=M`.

use crate::error::{FsaError, Result};
use crate::table::{StateRow, TransitionTable};

/// Build the transition table of `pattern` from scratch.
///
/// # Complexity
/// - Time: O(M^3) worst case for border detection (naive prefix/suffix compare)
/// - Space: O(M × σ), σ = alphabet size
///
/// # Example
/// ```
/// use alice_fsa::builder::build;
///
/// let table = build(b"TAT").unwrap();
/// assert_eq!(table.terminal(), 3);
/// assert_eq!(table.next(2, &b'T'), 3);
/// assert_eq!(table.next(3, &b'A'), 2); // "T" is a border of "TAT"
/// ```
pub fn build<T: Ord + Clone>(pattern: &[T]) -> Result<TransitionTable<T>> {
    if pattern.is_empty() {
        return Err(FsaError::EmptyPattern);
    }
    Ok(grow(pattern, TransitionTable::initial()))
}

/// Extend `existing`, built from a prefix of `pattern`, to cover all of `pattern`.
///
/// Rows `0..existing.terminal()` are left untouched; the old terminal row gains
/// its continuation rule and the missing rows are appended.
///
/// # Errors
/// - [`FsaError::EmptyPattern`] if `pattern` is empty
/// - [`FsaError::ExtensionTooLong`] if `existing` has more states than `pattern` needs
/// - [`FsaError::PrefixMismatch`] if `existing` was built from something other
///   than `pattern[..existing.terminal()]`
pub fn extend<T: Ord + Clone>(
    pattern: &[T],
    existing: TransitionTable<T>,
) -> Result<TransitionTable<T>> {
    if pattern.is_empty() {
        return Err(FsaError::EmptyPattern);
    }
    let start = existing.terminal();
    if start > pattern.len() {
        return Err(FsaError::ExtensionTooLong {
            table_terminal: start,
            pattern_len: pattern.len(),
        });
    }
    if let Some(state) = first_prefix_mismatch(pattern, &existing) {
        return Err(FsaError::PrefixMismatch { state });
    }
    Ok(grow(pattern, existing))
}

/// Find the first row `i < terminal` that does not send `pattern[i]` to `i + 1`,
/// or that sends some other symbol there.
///
/// A continuation rule `c -> i + 1` is the only rule in row `i` that can target
/// `i + 1` (restart and border rules target at most `i`), so this spine pins
/// down the prefix the table was built from.
fn first_prefix_mismatch<T: Ord>(pattern: &[T], table: &TransitionTable<T>) -> Option<usize> {
    let terminal = table.terminal();
    table.rows()[..terminal]
        .iter()
        .zip(pattern)
        .enumerate()
        .find(|(state, (row, symbol))| {
            row.edge(symbol) != Some(state + 1)
                || row.edges().filter(|&(_, next)| next == state + 1).count() != 1
        })
        .map(|(state, _)| state)
}

/// Append rows until `table` covers all of `pattern`.
/// `table` must already have been checked against `pattern`.
pub(crate) fn grow<T: Ord + Clone>(pattern: &[T], mut table: TransitionTable<T>) -> TransitionTable<T> {
    let m = pattern.len();
    let start = table.terminal();
    if start == m {
        return table;
    }

    log::debug!("building states {}..={} for pattern of length {}", start + 1, m, m);

    // The old terminal state now continues into the new states.
    table.row_mut(start).set(pattern[start].clone(), start + 1);

    for state in start + 1..=m {
        table.push_row(fill_row(pattern, state));
        log::trace!(
            "state {}: {} explicit rules",
            state,
            table.row(state).map_or(0, StateRow::len)
        );
    }

    table
}

/// Rules for the state reached after matching `pattern[..state]`.
fn fill_row<T: Ord + Clone>(pattern: &[T], state: usize) -> StateRow<T> {
    let matched = &pattern[..state];
    let mut row = StateRow::new(0);

    // Restart; overridden by any border rule or the continuation on the same symbol.
    row.set(pattern[0].clone(), 1);

    for k in 1..state {
        if matched[..k] == matched[state - k..] {
            row.set(pattern[k].clone(), k + 1);
        }
    }

    if state != pattern.len() {
        row.set(pattern[state].clone(), state + 1);
    }

    row
}
