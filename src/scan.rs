//! Automaton Scanner
//!
//! **Core loop**: `state = table[state][symbol]`, count every arrival at the terminal state.
//! - One lookup per text symbol, no backtracking
//! - Never reset after a match: overlapping occurrences are all counted
//! - Scanner state lives on the stack of each call; the table is only read
//!
//! [`Trace`] and [`Matches`] are lazy iterators over the same loop, for callers
//! that want every step or every match position instead of a total.

use core::iter::{Enumerate, FusedIterator};
use core::slice::Iter;

use crate::table::TransitionTable;

/// Count (possibly overlapping) occurrences of the table's pattern in `text`.
///
/// # Complexity
/// - O(N log σ) where N = text length, σ = alphabet size
///
/// # Example
/// ```
/// use alice_fsa::{builder::build, scan::scan};
///
/// let table = build(b"AAA").unwrap();
/// assert_eq!(scan(&table, b"AAAAA"), 3);
/// ```
pub fn scan<T: Ord>(table: &TransitionTable<T>, text: &[T]) -> usize {
    let terminal = table.terminal();
    if text.len() < terminal {
        return 0;
    }

    let mut state = 0;
    let mut count = 0;
    for symbol in text {
        state = table.next(state, symbol);
        if state == terminal {
            count += 1;
        }
    }
    count
}

/// Whether the pattern occurs at least once. Stops at the first match.
pub fn contains<T: Ord>(table: &TransitionTable<T>, text: &[T]) -> bool {
    matches(table, text).next().is_some()
}

/// Step-by-step replay of a scan.
pub fn trace<'a, T: Ord>(table: &'a TransitionTable<T>, text: &'a [T]) -> Trace<'a, T> {
    Trace {
        table,
        symbols: text.iter(),
        state: 0,
    }
}

/// Start offsets of every match, in text order.
///
/// Found when the match completes; the offset is `end + 1 - pattern_len`.
/// An arrival at the terminal state before `pattern_len` symbols have been read
/// is not a match and yields nothing.
pub fn matches<'a, T: Ord>(table: &'a TransitionTable<T>, text: &'a [T]) -> Matches<'a, T> {
    // Short texts yield nothing: start with the iterator already exhausted.
    let text = if text.len() < table.terminal() {
        &text[..0]
    } else {
        text
    };
    Matches {
        steps: trace(table, text).enumerate(),
        pattern_len: table.terminal(),
    }
}

/// One transition taken while scanning.
#[derive(Debug, PartialEq, Eq)]
pub struct Step<'a, T> {
    /// State before reading `symbol`
    pub state: usize,
    pub symbol: &'a T,
    /// State after reading `symbol`
    pub next: usize,
    /// `next` is the terminal state
    pub matched: bool,
}

// Manual impls: `symbol` is a reference, so `T` itself need not be `Copy`.
impl<'a, T> Clone for Step<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Step<'a, T> {}

/// Iterator over the transitions of a scan.
/// **Zero Allocation** - one [`Step`] per text symbol, computed on demand.
pub struct Trace<'a, T> {
    table: &'a TransitionTable<T>,
    symbols: Iter<'a, T>,
    state: usize,
}

impl<'a, T: Ord> Trace<'a, T> {
    /// Current state (state after the last yielded step).
    #[inline]
    pub fn state(&self) -> usize {
        self.state
    }
}

impl<'a, T: Ord> Iterator for Trace<'a, T> {
    type Item = Step<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let symbol = self.symbols.next()?;
        let state = self.state;
        let next = self.table.next(state, symbol);
        self.state = next;
        Some(Step {
            state,
            symbol,
            next,
            matched: next == self.table.terminal(),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.symbols.size_hint()
    }
}

impl<'a, T: Ord> ExactSizeIterator for Trace<'a, T> {}

impl<'a, T: Ord> FusedIterator for Trace<'a, T> {}

/// Iterator over match start offsets.
pub struct Matches<'a, T> {
    steps: Enumerate<Trace<'a, T>>,
    pattern_len: usize,
}

impl<'a, T: Ord> Iterator for Matches<'a, T> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let pattern_len = self.pattern_len;
        self.steps
            .find_map(|(end, step)| step.matched.then(|| (end + 1).checked_sub(pattern_len)).flatten())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.steps.size_hint().1)
    }
}

impl<'a, T: Ord> FusedIterator for Matches<'a, T> {}
