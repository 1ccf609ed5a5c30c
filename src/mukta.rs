//! Implicit vowel (mukta) insertion.
//!
//! A bare Gurmukhi consonant carries an inherent "a". Romanization makes it
//! explicit by inserting ਅ, which the translation table later maps to "a".
//! Two contexts get an insertion, applied in this order:
//!
//! 1. word-medial: a consonant (plus an optional non-vowel modifier) directly
//!    followed by something that starts a new syllable unit;
//! 2. isolated: a whitespace-delimited word made of a single consonant,
//!    optionally carrying a subjoined letter or yakash.

use crate::letters::{
    classify, is_below_letter, is_non_vowel_modifier, is_word_boundary, triggers_mukta, CharClass,
    MUKTA, VIRAMA, YAKASH,
};

/// Runs both insertion passes.
pub fn insert(input: &str) -> String {
    insert_isolated(&insert_medial(input))
}

/// Inserts ਅ after every consonant(+modifier) whose next code point is a
/// trigger. The trigger is only peeked at, so it can itself start the next
/// match: "ਸਬਦ" becomes "ਸਅਬਅਦ".
pub fn insert_medial(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + input.len() / 2);

    let mut i = 0usize;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if classify(c) != CharClass::BaseLetter {
            continue;
        }

        if i < chars.len() && is_non_vowel_modifier(chars[i]) {
            out.push(chars[i]);
            i += 1;
        }
        if chars.get(i).is_some_and(|&next| triggers_mukta(next)) {
            out.push(MUKTA);
        }
    }
    out
}

/// Appends ਅ to every single-letter word. Separators are copied through
/// untouched.
pub fn insert_isolated(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut word_start = 0usize;

    for (idx, c) in input.char_indices() {
        if is_word_boundary(c) {
            push_word(&mut out, &input[word_start..idx]);
            out.push(c);
            word_start = idx + c.len_utf8();
        }
    }
    push_word(&mut out, &input[word_start..]);
    out
}

fn push_word(out: &mut String, word: &str) {
    out.push_str(word);
    if is_single_letter(word) {
        out.push(MUKTA);
    }
}

fn is_single_letter(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let rest = match chars.as_slice() {
        [first, rest @ ..] if classify(*first) == CharClass::BaseLetter => rest,
        _ => return false,
    };
    let rest = match rest {
        [modifier, tail @ ..] if is_non_vowel_modifier(*modifier) => tail,
        _ => rest,
    };

    match rest {
        [] | [YAKASH] => true,
        [VIRAMA, below] => is_below_letter(*below),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medial_before_consonant() {
        assert_eq!(insert_medial("ਸਬਦ"), "ਸਅਬਅਦ");
    }

    #[test]
    fn medial_skips_vowel_signs() {
        assert_eq!(insert_medial("ਗੁਰੂ"), "ਗੁਰੂ");
        assert_eq!(insert_medial("ਕਿਤਾਬ"), "ਕਿਤਾਬ");
    }

    #[test]
    fn medial_before_nasal_and_post_vowel() {
        assert_eq!(insert_medial("ਸੰਤ"), "ਸਅੰਤ");
        assert_eq!(insert_medial("ਗਆ"), "ਗਅਆ");
        assert_eq!(insert_medial("ਪੱਕ"), "ਪਅੱਕ");
    }

    #[test]
    fn medial_keeps_modifier_with_letter() {
        assert_eq!(insert_medial("ਕ਼ਲਮ"), "ਕ਼ਅਲਅਮ");
    }

    #[test]
    fn medial_not_at_virama() {
        assert_eq!(insert_medial("ਪ੍ਰੇਮ"), "ਪ੍ਰੇਮ");
        // The subjoined ਰ still sees the following consonant.
        assert_eq!(insert_medial("ਪ੍ਰਭ"), "ਪ੍ਰਅਭ");
    }

    #[test]
    fn medial_before_pre_base_ligature() {
        assert_eq!(insert_medial("ਨਾਮ\u{A834}ਯ"), "ਨਾਮਅ\u{A834}ਯ");
    }

    #[test]
    fn isolated_letters() {
        assert_eq!(insert_isolated("ਕ"), "ਕਅ");
        assert_eq!(insert_isolated("ਕ ਖ\tਗ"), "ਕਅ ਖਅ\tਗਅ");
        assert_eq!(insert_isolated(" ਕ "), " ਕਅ ");
    }

    #[test]
    fn isolated_with_conjunct_or_yakash() {
        assert_eq!(insert_isolated("ਕ੍ਰ"), "ਕ੍ਰਅ");
        assert_eq!(insert_isolated("ਕੵ"), "ਕੵਅ");
        assert_eq!(insert_isolated("ਸ਼"), "ਸ਼ਅ");
        // ਗ is not a below letter.
        assert_eq!(insert_isolated("ਕ੍ਗ"), "ਕ੍ਗ");
    }

    #[test]
    fn isolated_ignores_longer_words() {
        assert_eq!(insert_isolated("ਕਾ"), "ਕਾ");
        assert_eq!(insert_isolated("ਅ"), "ਅ");
        assert_eq!(insert_isolated(""), "");
    }

    #[test]
    fn vowel_bearers_take_no_mukta() {
        assert_eq!(insert_medial("ਅਕਾਲ"), "ਅਕਾਲ");
        assert_eq!(insert_medial("ੲਕ"), "ੲਕ");
        assert_eq!(insert_isolated("ੳ"), "ੳ");
    }

    #[test]
    fn no_double_insertion() {
        assert_eq!(insert("ਕਖ"), "ਕਅਖ");
        assert_eq!(insert("ਨ ਸਬਦ"), "ਨਅ ਸਅਬਅਦ");
    }
}
