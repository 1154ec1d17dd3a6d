//! Human-readable views of an automaton.
//!
//! - [`TableGrid`]: states as rows, alphabet symbols as columns, next state in
//!   each cell (the row default is shown where a symbol has no explicit rule)
//! - [`Transcript`]: one line per transition of a scan, then the match count
//!
//! Both only read the public table and scanner outputs.

extern crate alloc;
use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::fsa::PatternFsa;
use crate::scan;
use crate::table::TransitionTable;

/// Printable name of a symbol, used for grid headers and transcript lines.
pub trait SymbolLabel {
    fn label(&self) -> String;
}

impl SymbolLabel for u8 {
    /// Printable ASCII as itself, anything else escaped (`\n`, `\xff`, ...).
    fn label(&self) -> String {
        self.escape_ascii().to_string()
    }
}

impl SymbolLabel for char {
    fn label(&self) -> String {
        if self.is_control() {
            self.escape_default().to_string()
        } else {
            self.to_string()
        }
    }
}

impl SymbolLabel for String {
    fn label(&self) -> String {
        self.clone()
    }
}

/// Decimal digits of `n`.
#[inline]
fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Transition table laid out as a grid.
///
/// ```text
///      A T
///    +----
///  0 | 0 1
///  1 | 2 1
///  2 | 0 3
///  3 | 2 1
/// ```
pub struct TableGrid<'a, T> {
    table: &'a TransitionTable<T>,
    /// Column symbols, in order. Every pattern symbol has a rule somewhere.
    columns: Vec<&'a T>,
}

impl<'a, T: Ord + SymbolLabel> TableGrid<'a, T> {
    pub fn new(table: &'a TransitionTable<T>) -> Self {
        let columns: BTreeSet<&T> = table.transitions().map(|(_, symbol, _)| symbol).collect();
        Self {
            table,
            columns: columns.into_iter().collect(),
        }
    }
}

impl<'a, T: Ord + SymbolLabel> fmt::Display for TableGrid<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.columns.iter().map(|symbol| symbol.label()).collect();
        let state_width = digits(self.table.terminal());
        let cell_width = labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(state_width);

        write!(f, " {:state_width$}  ", "")?;
        for label in &labels {
            write!(f, " {label:>cell_width$}")?;
        }
        writeln!(f)?;

        write!(f, " {:state_width$} +", "")?;
        for _ in 0..labels.len() * (cell_width + 1) {
            f.write_str("-")?;
        }
        writeln!(f)?;

        for (state, row) in self.table.rows().iter().enumerate() {
            write!(f, " {state:>state_width$} |")?;
            for symbol in &self.columns {
                write!(f, " {:>cell_width$}", row.next(symbol))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Step-by-step account of scanning `text`, ending with the match count.
///
/// ```text
///  state: 2   T ---> 3   +1
/// ```
pub struct Transcript<'a, T> {
    table: &'a TransitionTable<T>,
    text: &'a [T],
}

impl<'a, T: Ord + SymbolLabel> Transcript<'a, T> {
    pub fn new(table: &'a TransitionTable<T>, text: &'a [T]) -> Self {
        Self { table, text }
    }
}

impl<'a, T: Ord + SymbolLabel> fmt::Display for Transcript<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = digits(self.table.terminal());
        let mut count = 0;

        // Nothing to replay when the text cannot hold a single match.
        if self.text.len() >= self.table.terminal() {
            for step in scan::trace(self.table, self.text) {
                write!(
                    f,
                    " state: {:>width$}   {} ---> {:>width$}",
                    step.state,
                    step.symbol.label(),
                    step.next
                )?;
                if step.matched {
                    count += 1;
                    f.write_str("   +1")?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        if count == 1 {
            writeln!(f, " 1 match has been found in text.")
        } else {
            writeln!(f, " {count} matches have been found in text.")
        }
    }
}

impl<T: Ord + Clone + SymbolLabel> PatternFsa<T> {
    /// Grid view of the transition table.
    pub fn grid(&self) -> TableGrid<'_, T> {
        TableGrid::new(self.table())
    }

    /// Printable replay of [`process`](PatternFsa::process) over `text`.
    pub fn transcript<'a>(&'a self, text: &'a [T]) -> Transcript<'a, T> {
        Transcript::new(self.table(), text)
    }
}

impl<T: Ord + Clone + SymbolLabel> fmt::Display for PatternFsa<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid(), f)
    }
}
