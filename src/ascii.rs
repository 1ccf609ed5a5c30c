//! Gurbani Akhar ASCII encoding.
//!
//! Legacy Gurmukhi fonts (the GurbaniAkhar family) place each glyph on an
//! ASCII or Latin-1 key and are typed in visual order, so sihari comes before
//! the consonant it follows in Unicode. No implicit vowels are added.

use tracing::debug_span;

use crate::converter::{prepare, Options};
use crate::letters::{
    is_base_letter, is_below_letter, NUKTA, PRE_BASE_LIGATURES, SIHARI, VIRAMA, YAKASH, YAYYA,
};
use crate::substitute::GURU_ASCII;

/// Converts Unicode Gurmukhi to its Gurbani Akhar ASCII spelling.
pub fn ascii(input: &str) -> String {
    ascii_with(input, &Options::default())
}

/// [`ascii`] with explicit [`Options`].
pub fn ascii_with(input: &str, options: &Options) -> String {
    let _span = debug_span!("ascii", len = input.len()).entered();

    let prepared = prepare(input, options);
    GURU_ASCII.apply(&reorder_sihari(&prepared))
}

/// Moves every sihari in front of the consonant cluster it belongs to.
pub fn reorder_sihari(input: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(input.len());
    for c in input.chars() {
        if c == SIHARI {
            let at = cluster_start(&out);
            out.insert(at, c);
        } else {
            out.push(c);
        }
    }
    out.into_iter().collect()
}

/// Index of the first code point of the cluster ending at `out.len()`, or
/// `out.len()` itself when no consonant precedes.
///
/// A cluster is a base letter, an optional nukta, then any number of
/// subjoined units (virama + below letter, ligature marker + ਯ, yakash).
fn cluster_start(out: &[char]) -> usize {
    let mut k = out.len();
    loop {
        match &out[..k] {
            [.., VIRAMA, below] if is_below_letter(*below) => k -= 2,
            [.., marker, YAYYA] if PRE_BASE_LIGATURES.contains(marker) => k -= 2,
            [.., YAKASH] => k -= 1,
            _ => break,
        }
    }
    if let [.., NUKTA] = &out[..k] {
        k -= 1;
    }
    match &out[..k] {
        [.., base] if is_base_letter(*base) => k - 1,
        _ => out.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sihari_before_simple_consonant() {
        assert_eq!(reorder_sihari("ਦਿ"), "ਿਦ");
        assert_eq!(reorder_sihari("ਸਤਿ"), "ਸਿਤ");
    }

    #[test]
    fn sihari_before_conjunct() {
        assert_eq!(reorder_sihari("ਪ੍ਰਿਯ"), "ਿਪ੍ਰਯ");
        assert_eq!(reorder_sihari("ਕ\u{0A3C}ਿ"), "ਿਕ\u{0A3C}");
        assert_eq!(reorder_sihari("ਤ\u{A833}ਯਿ"), "ਿਤ\u{A833}ਯ");
    }

    #[test]
    fn orphan_sihari_stays() {
        assert_eq!(reorder_sihari("ਿ"), "ਿ");
        assert_eq!(reorder_sihari("ਾਿ"), "ਾਿ");
    }

    #[test]
    fn encodes_words() {
        assert_eq!(ascii("ਸਤਿ ਨਾਮੁ"), "siq nwmu");
        assert_eq!(ascii("ਵਾਹਿਗੁਰੂ"), "vwihgurU");
    }
}
