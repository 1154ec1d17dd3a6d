//! # ALICE-FSA
//!
//! **Pattern-matching automata with full transition tables**
//!
//! > "Every symbol costs exactly one lookup. No backtracking, ever."
//!
//! ## Architecture
//!
//! - **Builder**: Per-state rule table from the pattern's self-overlaps (borders)
//! - **Incremental Extension**: `P ++ S` reuses the table of `P`, computing only new states
//! - **Scanner**: Single left-to-right pass, overlapping matches counted
//!
//! ## Performance
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | Build | O(M^3) worst case | **O(M × σ)** |
//! | Extend `P -> P ++ S` | only states `len(P)+1..` | O(len(S) × σ) |
//! | Count | **O(N log σ)** | O(1) |
//! | Locate | O(N log σ) | **O(1)** (iterator) |
//!
//! M = pattern length, N = text length, σ = alphabet size.
//!
//! ## Example
//!
//! ```
//! use alice_fsa::PatternFsa;
//!
//! let text = b"CCCGGCTGCTACAGTAATTATATAAGTATTATTATGCC";
//! let fsa = PatternFsa::new(b"TAT").unwrap();
//!
//! // Count - overlapping occurrences included
//! assert_eq!(fsa.process(text), 5);
//!
//! // Locate start offsets (zero-allocation iterator)
//! let positions: Vec<_> = fsa.matches(text).collect();
//! assert_eq!(positions, vec![18, 20, 26, 29, 32]);
//!
//! // Combine - the table of "TAT" is extended, not rebuilt
//! let longer = &fsa + b"TAT";
//! assert_eq!(longer.process(text), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod builder;
pub mod error;
pub mod fsa;
pub mod render;
pub mod scan;
pub mod table;

pub use error::{FsaError, Result};
pub use fsa::{Extension, PatternFsa};
pub use table::{StateRow, TransitionTable};

/// Version
pub const VERSION: &str = "0.1.0";

#[cfg(test)]
mod tests {
    use super::*;

    const DNA: &[u8] = b"CCCGGCTGCTACAGTAATTATATAAGTATTATTATGCC";

    #[test]
    fn test_basic_count() {
        let fsa = PatternFsa::new(b"TAT").unwrap();
        assert_eq!(fsa.process(DNA), 5);
        assert_eq!(PatternFsa::new(b"AAA").unwrap().process(b"AAAAA"), 3);
        assert_eq!(PatternFsa::new(b"xyz").unwrap().process(DNA), 0);
    }

    #[test]
    fn test_table_shape() {
        for pattern in [&b"TAT"[..], &b"A"[..], &b"ABABAC"[..], &b"GTGTGTG"[..]] {
            let fsa = PatternFsa::new(pattern).unwrap();
            let table = fsa.table();
            let m = pattern.len();

            assert_eq!(table.num_states(), m + 1);
            assert!(table.rows().iter().all(|row| row.default_next() == 0));
            // The terminal row never advances past itself.
            assert!(table.row(m).unwrap().edges().all(|(_, next)| next <= m));
        }
    }

    #[test]
    fn test_demo_walkthrough() {
        let k = PatternFsa::new(b"TAT").unwrap();
        let a = PatternFsa::new(b"TAT").unwrap();
        let b = PatternFsa::new(b"ATA").unwrap();

        assert_eq!(k, a);
        assert_ne!(a, b);

        let c = &a + &b;
        assert_eq!(c.pattern(), b"TATATA");
        assert_eq!(c.process(DNA), 1);

        let mut j = &k + &a;
        assert_eq!(j.pattern(), b"TATTAT");
        assert_eq!(j.process(DNA), 2);
        // Rows below k's terminal state are carried over untouched.
        assert_eq!(&j.table().rows()[..3], &k.table().rows()[..3]);

        j.set_pattern(&b"GT"[..]).unwrap();
        assert_eq!(j.table(), PatternFsa::new(b"GT").unwrap().table());
        assert_eq!(j.process(DNA), 2);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
