//! Table coverage: every consonant, vowel sign and independent vowel takes its
//! documented path through the Latin tables.

use gurmukhi_utils::letters::{BASE_LETTERS, VOWEL_SIGNS};
use gurmukhi_utils::Converter;

fn latn(s: &str) -> String {
    Converter::LatinStrict.convert(s)
}

#[test]
fn consonants_single_letter() {
    let samples = [
        ('ਕ', "k"), ('ਖ', "kh"), ('ਙ', "ṅ"), ('ਞ', "ñ"), ('ਠ', "ṭh"), ('ਢ', "ḍh"), ('ਣ', "ṇ"),
        ('ੜ', "ṛ"), ('\u{0A5A}', "ġ"), ('\u{0A5B}', "z"), ('\u{0A5E}', "f"), ('\u{0A33}', "ḷ"),
    ];
    for (ch, latin) in samples {
        // A lone consonant is a single-letter word and gets its inherent vowel.
        assert_eq!(latn(&ch.to_string()), format!("{latin}a"), "U+{:04X}", ch as u32);
    }
}

#[test]
fn every_base_letter_is_translated() {
    for &ch in BASE_LETTERS {
        let out = latn(&ch.to_string());
        assert!(
            !out.chars().any(|c| ('\u{0A00}'..='\u{0A7F}').contains(&c)),
            "U+{:04X} => {:?} left Gurmukhi behind",
            ch as u32,
            out
        );
        assert!(out.ends_with('a'), "U+{:04X} => {:?}", ch as u32, out);
    }
}

#[test]
fn vowel_signs_block_mukta() {
    let expected = ["ā", "i", "ī", "u", "ū", "e", "ē", "o", "ō"];
    for (&sign, latin) in VOWEL_SIGNS.iter().zip(expected) {
        let word: String = ['ਕ', sign, 'ਮ'].iter().collect();
        assert_eq!(latn(&word), format!("k{latin}m"), "sign U+{:04X}", sign as u32);
    }
}

#[test]
fn post_base_independent_vowels() {
    let cases = [
        ("ਆ", "ā"), ("ਇ", "i"), ("ਈ", "ī"), ("ਉ", "u"), ("ਊ", "ū"),
        ("ਏ", "e"), ("ਐ", "ē"), ("ਓ", "o"), ("ਔ", "ō"),
    ];
    for (vowel, latin) in cases {
        assert_eq!(latn(vowel), latin);
        // After a consonant the inherent vowel is voiced before it.
        assert_eq!(latn(&format!("ਨ{vowel}")), format!("na{latin}"));
    }
}

#[test]
fn subjoined_conjuncts() {
    let cases = [
        ("ਪ੍ਹੀ", "pʰī"), ("ਪ੍ਰੀ", "pʳī"), ("ਪ੍ਵੀ", "pᵛī"), ("ਪ੍ਟੀ", "pᵗ\u{0323}ī"),
        ("ਪ੍ਤੀ", "pᵗī"), ("ਪ੍ਨੀ", "pⁿī"), ("ਪ੍ਚੀ", "pᶜī"),
    ];
    for (inp, exp) in cases {
        assert_eq!(latn(inp), exp, "input {:?}", inp);
    }
}

#[test]
fn marks() {
    assert_eq!(latn("ਕਾਂ"), "kā⸞");
    assert_eq!(latn("ਕਾਃ"), "kāẖ");
    assert_eq!(latn("ਕੁੰ"), "ku⸛");
    assert_eq!(latn("ਕੁੑ"), "ku\u{0327}");
}

#[test]
fn ascii_passthrough_idempotent() {
    let s = "The quick brown fox 123";
    assert_eq!(latn(s), s);
}
