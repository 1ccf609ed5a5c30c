//! Input normalization applied ahead of conversion.

use unicode_normalization::UnicodeNormalization;

use crate::letters::{NUKTA, VIRAMA, YAYYA};

/// Sant Lipi writes the half yayya with a pre-base marker instead of a
/// virama; both spellings are folded into the marker form.
pub fn sant_lipi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == VIRAMA && chars.peek() == Some(&YAYYA) {
            out.push('\u{A833}');
        } else {
            out.push(c);
        }
    }
    out
}

/// Precomposed nukta letters. All six are composition exclusions, so NFC
/// leaves them decomposed; the conversion tables key on the precomposed form.
fn compose_nukta(base: char) -> Option<char> {
    match base {
        'ਸ' => Some('\u{0A36}'),
        'ਖ' => Some('\u{0A59}'),
        'ਗ' => Some('\u{0A5A}'),
        'ਜ' => Some('\u{0A5B}'),
        'ਫ' => Some('\u{0A5E}'),
        'ਲ' => Some('\u{0A33}'),
        _ => None,
    }
}

/// NFC plus nukta recomposition.
pub fn unicode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.nfc().peekable();
    while let Some(c) = chars.next() {
        if chars.peek() == Some(&NUKTA) {
            if let Some(composed) = compose_nukta(c) {
                out.push(composed);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sant_lipi_half_yayya() {
        assert_eq!(sant_lipi("ਸ੍ਯਾਮ"), "ਸ\u{A833}ਯਾਮ");
        // Other conjuncts are untouched.
        assert_eq!(sant_lipi("ਪ੍ਰੇਮ"), "ਪ੍ਰੇਮ");
        assert_eq!(sant_lipi("੍"), "੍");
    }

    #[test]
    fn nukta_letters_recomposed() {
        assert_eq!(unicode("ਸ\u{0A3C}ਬਦ"), "\u{0A36}ਬਦ");
        assert_eq!(unicode("\u{0A36}"), "\u{0A36}");
        assert_eq!(unicode("ਲ\u{0A3C}"), "\u{0A33}");
    }

    #[test]
    fn nukta_qa_stays_decomposed() {
        assert_eq!(unicode("ਕ\u{0A3C}"), "ਕ\u{0A3C}");
    }
}
