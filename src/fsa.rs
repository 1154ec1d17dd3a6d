//! Pattern-Matching Automaton
//!
//! **Architecture**:
//! - Pattern + Transition Table, owned together and always consistent
//! - Combination: extends a copy of the table (or the moved table) instead of rebuilding
//! - Pattern replacement: full rebuild from state 0
//!
//! Two automata are equal iff their patterns are equal, however their tables were built.

extern crate alloc;
use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::Add;
use core::str::FromStr;

use crate::builder::{build, grow};
use crate::error::{FsaError, Result};
use crate::scan::{self, Matches, Trace};
use crate::table::TransitionTable;

/// Deterministic automaton counting occurrences of one fixed pattern.
///
/// # Example
/// ```
/// use alice_fsa::PatternFsa;
///
/// let fsa = PatternFsa::new(b"TAT").unwrap();
/// assert_eq!(fsa.process(b"CCCGGCTGCTACAGTAATTATATAAGTATTATTATGCC"), 5);
///
/// let longer = &fsa + b"TAT";
/// assert_eq!(longer.pattern(), b"TATTAT");
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(
    try_from = "RawFsa<T>",
    bound(
        serialize = "T: Ord + serde::Serialize",
        deserialize = "T: Ord + Clone + serde::Deserialize<'de>"
    )
))]
pub struct PatternFsa<T> {
    pattern: Vec<T>,
    table: TransitionTable<T>,
}

impl<T: Ord + Clone> PatternFsa<T> {
    /// Build the automaton for `pattern`.
    ///
    /// # Errors
    /// [`FsaError::EmptyPattern`] if `pattern` has no symbols.
    pub fn new(pattern: impl Into<Vec<T>>) -> Result<Self> {
        let pattern = pattern.into();
        let table = build(&pattern)?;
        Ok(Self { pattern, table })
    }

    /// Pair a pattern with a previously built table.
    ///
    /// The table must be exactly the one `pattern` builds.
    pub fn from_parts(pattern: Vec<T>, table: TransitionTable<T>) -> Result<Self> {
        if build(&pattern)? != table {
            return Err(FsaError::TableMismatch);
        }
        Ok(Self { pattern, table })
    }

    /// Split into pattern and table.
    pub fn into_parts(self) -> (Vec<T>, TransitionTable<T>) {
        (self.pattern, self.table)
    }

    #[inline]
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// Replace the pattern and rebuild the table from scratch.
    ///
    /// No part of the old table is reused, even if the patterns share a prefix.
    /// On error the automaton is left unchanged.
    pub fn set_pattern(&mut self, pattern: impl Into<Vec<T>>) -> Result<()> {
        let pattern = pattern.into();
        let table = build(&pattern)?;
        log::debug!(
            "pattern replaced: {} -> {} states",
            self.table.num_states(),
            table.num_states()
        );
        self.pattern = pattern;
        self.table = table;
        Ok(())
    }

    /// Distinct symbols of the pattern.
    pub fn alphabet(&self) -> BTreeSet<T> {
        self.pattern.iter().cloned().collect()
    }

    #[inline]
    pub fn table(&self) -> &TransitionTable<T> {
        &self.table
    }

    /// Terminal (accepting) state, equal to the pattern length.
    #[inline]
    pub fn terminal(&self) -> usize {
        self.table.terminal()
    }

    /// Pattern length.
    #[inline]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Always `false`: empty patterns are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Count (possibly overlapping) occurrences of the pattern in `text`.
    #[inline]
    pub fn process(&self, text: &[T]) -> usize {
        scan::scan(&self.table, text)
    }

    /// Replay `text` one transition at a time.
    #[inline]
    pub fn trace<'a>(&'a self, text: &'a [T]) -> Trace<'a, T> {
        scan::trace(&self.table, text)
    }

    /// Start offsets of every occurrence in `text` (zero-allocation iterator).
    #[inline]
    pub fn matches<'a>(&'a self, text: &'a [T]) -> Matches<'a, T> {
        scan::matches(&self.table, text)
    }

    /// Check if the pattern occurs in `text`.
    #[inline]
    pub fn contains(&self, text: &[T]) -> bool {
        scan::contains(&self.table, text)
    }

    /// New automaton for this pattern followed by `ext`.
    ///
    /// States `0..len()` are copied from this automaton's table; only the new
    /// states are computed. `self` is not modified.
    pub fn combine<'e>(&self, ext: impl Into<Extension<'e, T>>) -> Self
    where
        T: 'e,
    {
        self.clone().into_combined(ext)
    }

    /// Like [`combine`](Self::combine), but moves this automaton's table into the result.
    pub fn into_combined<'e>(self, ext: impl Into<Extension<'e, T>>) -> Self
    where
        T: 'e,
    {
        let ext: Extension<'e, T> = ext.into();
        let Self { mut pattern, table } = self;
        pattern.extend_from_slice(ext.symbols());
        // `table` was built from `pattern`'s old value, a prefix of the new one.
        let table = grow(&pattern, table);
        Self { pattern, table }
    }
}

impl<T: PartialEq> PartialEq for PatternFsa<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl<T: Eq> Eq for PatternFsa<T> {}

impl<T: Hash> Hash for PatternFsa<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl FromStr for PatternFsa<char> {
    type Err = FsaError;

    /// Automaton over the `char`s of `s`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars().collect::<Vec<_>>())
    }
}

/// Right-hand side of a pattern combination.
#[derive(Debug)]
pub enum Extension<'a, T> {
    /// Literal symbols appended to the pattern
    Literal(&'a [T]),
    /// Another automaton whose pattern is appended
    Automaton(&'a PatternFsa<T>),
}

impl<'a, T> Extension<'a, T> {
    /// Symbols this extension appends.
    pub fn symbols(&self) -> &'a [T] {
        match *self {
            Extension::Literal(symbols) => symbols,
            Extension::Automaton(fsa) => &fsa.pattern,
        }
    }
}

impl<'a, T> Clone for Extension<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Extension<'a, T> {}

impl<'a, T> From<&'a [T]> for Extension<'a, T> {
    fn from(symbols: &'a [T]) -> Self {
        Extension::Literal(symbols)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Extension<'a, T> {
    fn from(symbols: &'a [T; N]) -> Self {
        Extension::Literal(symbols)
    }
}

impl<'a, T> From<&'a Vec<T>> for Extension<'a, T> {
    fn from(symbols: &'a Vec<T>) -> Self {
        Extension::Literal(symbols)
    }
}

impl<'a, T> From<&'a PatternFsa<T>> for Extension<'a, T> {
    fn from(fsa: &'a PatternFsa<T>) -> Self {
        Extension::Automaton(fsa)
    }
}

/// `&a + ext`: combine without consuming `a`.
impl<'a, 'e, T, E> Add<E> for &'a PatternFsa<T>
where
    T: Ord + Clone + 'e,
    E: Into<Extension<'e, T>>,
{
    type Output = PatternFsa<T>;

    fn add(self, ext: E) -> PatternFsa<T> {
        self.combine(ext)
    }
}

/// `a + ext`: combine, reusing `a`'s table without copying it.
impl<'e, T, E> Add<E> for PatternFsa<T>
where
    T: Ord + Clone + 'e,
    E: Into<Extension<'e, T>>,
{
    type Output = PatternFsa<T>;

    fn add(self, ext: E) -> PatternFsa<T> {
        self.into_combined(ext)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: Ord + serde::Deserialize<'de>"))]
struct RawFsa<T> {
    pattern: Vec<T>,
    table: TransitionTable<T>,
}

#[cfg(feature = "serde")]
impl<T: Ord + Clone> TryFrom<RawFsa<T>> for PatternFsa<T> {
    type Error = FsaError;

    fn try_from(raw: RawFsa<T>) -> Result<Self> {
        Self::from_parts(raw.pattern, raw.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const DNA: &[u8] = b"CCCGGCTGCTACAGTAATTATATAAGTATTATTATGCC";

    #[test]
    fn test_new_and_accessors() {
        let fsa = PatternFsa::new(b"TAT").unwrap();

        assert_eq!(fsa.pattern(), b"TAT");
        assert_eq!(fsa.len(), 3);
        assert_eq!(fsa.terminal(), 3);
        assert_eq!(fsa.table().num_states(), 4);
        assert_eq!(fsa.alphabet().into_iter().collect::<Vec<_>>(), vec![b'A', b'T']);
        assert!(!fsa.is_empty());
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(PatternFsa::<u8>::new(Vec::new()), Err(FsaError::EmptyPattern));
        assert_eq!("".parse::<PatternFsa<char>>(), Err(FsaError::EmptyPattern));
    }

    #[test]
    fn test_process() {
        let fsa = PatternFsa::new(b"TAT").unwrap();
        assert_eq!(fsa.process(DNA), 5);
        assert_eq!(fsa.process(b"TA"), 0);
        assert!(fsa.contains(DNA));
        assert_eq!(fsa.matches(DNA).collect::<Vec<_>>(), vec![18, 20, 26, 29, 32]);
    }

    #[test]
    fn test_char_patterns() {
        let fsa: PatternFsa<char> = "aña".parse().unwrap();
        let text: Vec<char> = "añañaña".chars().collect();
        assert_eq!(fsa.process(&text), 3);
    }

    #[test]
    fn test_equality_ignores_construction_path() {
        let direct = PatternFsa::new(b"TATATA").unwrap();
        let combined = &PatternFsa::new(b"TAT").unwrap() + b"ATA";

        assert_eq!(direct, combined);
        assert_eq!(direct.table(), combined.table());
        assert_ne!(direct, PatternFsa::new(b"ATATAT").unwrap());
    }

    #[test]
    fn test_combine_automata() {
        let a = PatternFsa::new(b"TAT").unwrap();
        let b = PatternFsa::new(b"ATA").unwrap();

        let c = &a + &b;
        assert_eq!(c.pattern(), b"TATATA");
        assert_eq!(c.process(DNA), DNA.windows(6).filter(|w| *w == b"TATATA").count());

        // Sources are untouched.
        assert_eq!(a.table(), PatternFsa::new(b"TAT").unwrap().table());
        assert_eq!(b.pattern(), b"ATA");
    }

    #[test]
    fn test_combine_by_value() {
        let a = PatternFsa::new(b"TAT").unwrap();
        let k = PatternFsa::new(b"TAT").unwrap();

        let j = k + &a;
        assert_eq!(j.pattern(), b"TATTAT");
        assert_eq!(j.table(), PatternFsa::new(b"TATTAT").unwrap().table());
        assert_eq!(j.process(DNA), 2);
    }

    #[test]
    fn test_combine_empty_literal() {
        let a = PatternFsa::new(b"GT").unwrap();
        let same = a.combine(&b""[..]);
        assert_eq!(same, a);
        assert_eq!(same.table(), a.table());
    }

    #[test]
    fn test_set_pattern_rebuilds() {
        let mut j = PatternFsa::new(b"TATTAT").unwrap();
        j.set_pattern(&b"GT"[..]).unwrap();

        assert_eq!(j.pattern(), b"GT");
        assert_eq!(j.table(), PatternFsa::new(b"GT").unwrap().table());
        assert_eq!(j.table().num_states(), 3);
    }

    #[test]
    fn test_set_pattern_error_keeps_state() {
        let mut fsa = PatternFsa::new(b"GT").unwrap();
        assert_eq!(fsa.set_pattern(Vec::new()), Err(FsaError::EmptyPattern));
        assert_eq!(fsa.pattern(), b"GT");
        assert_eq!(fsa.process(b"GTGT"), 2);
    }

    #[test]
    fn test_from_parts() {
        let (pattern, table) = PatternFsa::new(b"ABAB").unwrap().into_parts();
        let fsa = PatternFsa::from_parts(pattern, table).unwrap();
        assert_eq!(fsa.process(b"ABABAB"), 2);

        let other = PatternFsa::new(b"ABBA").unwrap().table().clone();
        assert_eq!(
            PatternFsa::from_parts(b"ABAB".to_vec(), other),
            Err(FsaError::TableMismatch)
        );
    }

    #[test]
    fn test_hash_follows_pattern() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(PatternFsa::new(b"TATATA").unwrap());
        assert!(set.contains(&(&PatternFsa::new(b"TA").unwrap() + b"TATA")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let fsa = PatternFsa::new(b"TAT").unwrap();
        let json = serde_json::to_string(&fsa).unwrap();
        let back: PatternFsa<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fsa);
        assert_eq!(back.table(), fsa.table());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_foreign_table() {
        let fsa = PatternFsa::new(b"TAT").unwrap();
        let json = serde_json::to_string(&fsa).unwrap();
        // Same shape, different pattern.
        let forged = json.replacen("[84,65,84]", "[65,65,65]", 1);
        assert!(serde_json::from_str::<PatternFsa<u8>>(&forged).is_err());
    }
}
