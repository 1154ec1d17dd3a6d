//! Pattern-Matching Automaton Demo
//!
//! Builds an automaton, prints its table, scans a DNA string step by step,
//! then combines and replaces patterns.
//!
//! ```bash
//! cargo run --example pattern_demo
//! ```

use alice_fsa::{FsaError, PatternFsa};

fn main() -> Result<(), FsaError> {
    println!("=== ALICE-FSA Pattern Automaton Demo ===\n");

    let text = b"CCCGGCTGCTACAGTAATTATATAAGTATTATTATGCC";

    let k = PatternFsa::new(b"TAT")?;
    println!("Pattern:  {}", String::from_utf8_lossy(k.pattern()));
    println!(
        "Alphabet: {:?}",
        k.alphabet().into_iter().map(char::from).collect::<Vec<_>>()
    );
    println!("Table:\n\n{k}");

    println!("Text: {}", String::from_utf8_lossy(text));
    print!("\n{}", k.transcript(text));

    println!("\n--- Equality & Combination ---\n");

    let a = PatternFsa::new(b"TAT")?;
    let b = PatternFsa::new(b"ATA")?;
    println!("  k == a ?  {}", k == a);
    println!("  a == b ?  {}", a == b);

    let c = &a + &b;
    println!(
        "  c = a + b -> \"{}\": {} matches",
        String::from_utf8_lossy(c.pattern()),
        c.process(text)
    );

    // j reuses k's table; only states 4..=6 are computed.
    let mut j = k + &a;
    println!("\nTable j (superset of table k):\n\n{j}");
    print!("{}", j.transcript(text));

    println!("\n--- Pattern Replacement ---\n");
    j.set_pattern(&b"GT"[..])?;
    println!("Pattern j: {}", String::from_utf8_lossy(j.pattern()));
    println!("Table j:\n\n{j}");

    let positions: Vec<_> = j.matches(text).collect();
    println!("  \"GT\" occurs at offsets {positions:?}");

    if let Err(e) = PatternFsa::<u8>::new(Vec::new()) {
        println!("  empty pattern -> {e}");
    }

    Ok(())
}
