//! Transition Table
//!
//! **Layout**: one [`StateRow`] per state, indexed by state number.
//! - Row `s` holds the explicit `symbol -> next` rules for state `s`
//! - Plus one default next-state for every symbol the row has no rule for
//!
//! State `0` is the initial state, state `terminal()` is the only accepting one.
//! Lookups are `O(log σ)` where σ = number of explicit rules in the row
//! (at most the alphabet size).

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use crate::error::FsaError;

/// Transition rules of a single state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(
    serialize = "T: Ord + serde::Serialize",
    deserialize = "T: Ord + serde::Deserialize<'de>"
)))]
pub struct StateRow<T> {
    /// Explicit rules
    edges: BTreeMap<T, usize>,
    /// Next state for any symbol without an explicit rule
    default: usize,
}

impl<T: Ord> StateRow<T> {
    /// Empty row routing every symbol to `default`.
    #[inline]
    pub fn new(default: usize) -> Self {
        Self {
            edges: BTreeMap::new(),
            default,
        }
    }

    /// Next state for `symbol` (explicit rule, else default).
    #[inline(always)]
    pub fn next(&self, symbol: &T) -> usize {
        match self.edges.get(symbol) {
            Some(&next) => next,
            None => self.default,
        }
    }

    /// Explicit rule for `symbol`, if any.
    #[inline]
    pub fn edge(&self, symbol: &T) -> Option<usize> {
        self.edges.get(symbol).copied()
    }

    /// Explicit rules in symbol order.
    pub fn edges(&self) -> impl Iterator<Item = (&T, usize)> + '_ {
        self.edges.iter().map(|(symbol, &next)| (symbol, next))
    }

    /// Fallback next state.
    #[inline]
    pub fn default_next(&self) -> usize {
        self.default
    }

    /// Number of explicit rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Set (or overwrite) the rule for `symbol`.
    #[inline]
    pub(crate) fn set(&mut self, symbol: T, next: usize) {
        self.edges.insert(symbol, next);
    }
}

/// Complete `state × symbol -> state` table of a pattern automaton.
///
/// Always holds at least one row (state 0). A table built for a pattern of
/// length `M` holds exactly `M + 1` rows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    try_from = "RawTable<T>",
    bound(
        serialize = "T: Ord + serde::Serialize",
        deserialize = "T: Ord + serde::Deserialize<'de>"
    )
))]
pub struct TransitionTable<T> {
    rows: Vec<StateRow<T>>,
}

impl<T: Ord> TransitionTable<T> {
    /// Table with only the initial state, which loops on every symbol.
    pub(crate) fn initial() -> Self {
        Self {
            rows: vec![StateRow::new(0)],
        }
    }

    /// Highest state (the accepting one).
    #[inline(always)]
    pub fn terminal(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of states, `terminal() + 1`.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.rows.len()
    }

    /// Row of `state`, or `None` past the terminal state.
    #[inline]
    pub fn row(&self, state: usize) -> Option<&StateRow<T>> {
        self.rows.get(state)
    }

    /// All rows, indexed by state.
    #[inline]
    pub fn rows(&self) -> &[StateRow<T>] {
        &self.rows
    }

    /// Transition function. `state` must be `<= terminal()`.
    #[inline(always)]
    pub fn next(&self, state: usize, symbol: &T) -> usize {
        self.rows[state].next(symbol)
    }

    /// Every explicit rule as `(state, symbol, next)`, state-major, symbol order.
    ///
    /// Defaults are not included; read them with [`StateRow::default_next`].
    pub fn transitions(&self) -> impl Iterator<Item = (usize, &T, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(state, row)| row.edges().map(move |(symbol, next)| (state, symbol, next)))
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, state: usize) -> &mut StateRow<T> {
        &mut self.rows[state]
    }

    #[inline]
    pub(crate) fn push_row(&mut self, row: StateRow<T>) {
        self.rows.push(row);
    }
}

/// Unchecked rows, as read from a serialized table.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: Ord + serde::Deserialize<'de>"))]
struct RawTable<T> {
    rows: Vec<StateRow<T>>,
}

#[cfg(feature = "serde")]
impl<T: Ord> TryFrom<RawTable<T>> for TransitionTable<T> {
    type Error = FsaError;

    fn try_from(raw: RawTable<T>) -> Result<Self, FsaError> {
        let Some(terminal) = raw.rows.len().checked_sub(1) else {
            return Err(FsaError::MalformedTable("no states"));
        };
        let in_range = raw.rows.iter().all(|row| {
            row.default <= terminal && row.edges.values().all(|&next| next <= terminal)
        });
        if !in_range {
            return Err(FsaError::MalformedTable("transition past the terminal state"));
        }
        // Row `i` advances at most one state, so reaching `terminal` takes at
        // least `terminal` symbols.
        let no_skips = raw.rows.iter().enumerate().all(|(state, row)| {
            row.default <= state + 1 && row.edges.values().all(|&next| next <= state + 1)
        });
        if !no_skips {
            return Err(FsaError::MalformedTable("transition skips ahead more than one state"));
        }
        Ok(Self { rows: raw.rows })
    }
}
