//! Title collation for name sorts.
//!
//! Approximates Korean-locale ordering without a collation table:
//! punctuation, then digits, then Hangul, then every other script, with
//! letters compared case-insensitively inside each group.

use std::cmp::Ordering;

fn script_rank(c: char) -> u8 {
    match c {
        c if c.is_ascii_digit() => 1,
        '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' | '\u{AC00}'..='\u{D7AF}' => 2,
        c if c.is_alphabetic() => 3,
        _ => 0,
    }
}

fn collation_key(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (script_rank(c), c))
}

/// Compare two titles for display ordering.
///
/// Exact code point order breaks ties so the ordering is total.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| a.cmp(b))
}
