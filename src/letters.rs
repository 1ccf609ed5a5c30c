//! Character-level classification for Gurmukhi text.
//!
//! The sets here drive the implicit vowel inserter and the sihari reordering
//! of the ASCII encoder. They are plain `const` slices: membership tests only.

/// Consonants, including ੜ and the precomposed nukta letters.
/// The vowel bearers ੳ ਅ ੲ are deliberately absent.
pub const BASE_LETTERS: &[char] = &[
    'ਸ', 'ਹ', 'ਕ', 'ਖ', 'ਗ', 'ਘ', 'ਙ', 'ਚ', 'ਛ', 'ਜ', 'ਝ', 'ਞ', 'ਟ', 'ਠ', 'ਡ', 'ਢ', 'ਣ', 'ਤ', 'ਥ',
    'ਦ', 'ਧ', 'ਨ', 'ਪ', 'ਫ', 'ਬ', 'ਭ', 'ਮ', 'ਯ', 'ਰ', 'ਲ', 'ਵ', 'ੜ', '\u{0A36}', '\u{0A59}',
    '\u{0A5A}', '\u{0A5B}', '\u{0A5E}', '\u{0A33}',
];

/// Consonants that may follow a virama as the subjoined half of a conjunct.
pub const BELOW_LETTERS: &[char] = &['ਹ', 'ਰ', 'ਵ', 'ਟ', 'ਤ', 'ਨ', 'ਚ', 'ਯ'];

pub const VIRAMA: char = '\u{0A4D}';
pub const YAKASH: char = '\u{0A75}';
pub const NUKTA: char = '\u{0A3C}';
pub const SIHARI: char = '\u{0A3F}';
pub const MUKTA: char = 'ਅ';
pub const YAYYA: char = 'ਯ';
pub const IK_OANKAR: char = 'ੴ';

/// Marks that ride on a consonant without supplying a vowel: nukta, udaat, yakash.
pub const NON_VOWEL_MODIFIERS: &[char] = &[NUKTA, '\u{0A51}', YAKASH];

/// Sant Lipi yayya markers (U+A833..U+A835), written before ਯ.
pub const PRE_BASE_LIGATURES: &[char] = &['\u{A833}', '\u{A834}', '\u{A835}'];

/// Independent vowels that follow a consonant inside a word.
pub const POST_LETTERS: &[char] = &['ਆ', 'ਏ', 'ਐ', 'ਇ', 'ਈ', 'ਓ', 'ਔ', 'ਉ', 'ਊ'];

/// Addak, bindi and tippi.
pub const PRE_POST_MODIFIERS: &[char] = &['\u{0A71}', '\u{0A02}', '\u{0A70}'];

pub const VOWEL_SIGNS: &[char] = &[
    '\u{0A3E}', SIHARI, '\u{0A40}', '\u{0A41}', '\u{0A42}', '\u{0A47}', '\u{0A48}', '\u{0A4B}',
    '\u{0A4C}',
];

/// Coarse class of a single code point.
///
/// Below letters are reported as [`CharClass::BaseLetter`]; whether one is
/// acting as the subjoined half of a conjunct depends on the preceding virama
/// (see [`is_below_letter`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    BaseLetter,
    VowelSign,
    IndependentVowel,
    NonVowelModifier,
    Virama,
    LigatureMarker,
    Digit,
    Punctuation,
    Other,
}

pub fn classify(c: char) -> CharClass {
    if is_base_letter(c) {
        CharClass::BaseLetter
    } else if VOWEL_SIGNS.contains(&c) {
        CharClass::VowelSign
    } else if c == VIRAMA {
        CharClass::Virama
    } else if POST_LETTERS.contains(&c) || matches!(c, 'ਅ' | 'ੲ' | 'ੳ') {
        CharClass::IndependentVowel
    } else if NON_VOWEL_MODIFIERS.contains(&c) || PRE_POST_MODIFIERS.contains(&c) || c == '\u{0A03}' {
        CharClass::NonVowelModifier
    } else if PRE_BASE_LIGATURES.contains(&c) {
        CharClass::LigatureMarker
    } else if ('\u{0A66}'..='\u{0A6F}').contains(&c) {
        CharClass::Digit
    } else if matches!(c, '\u{0964}' | '\u{0965}') {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

#[inline]
pub fn is_base_letter(c: char) -> bool {
    BASE_LETTERS.contains(&c)
}

#[inline]
pub fn is_below_letter(c: char) -> bool {
    BELOW_LETTERS.contains(&c)
}

#[inline]
pub fn is_non_vowel_modifier(c: char) -> bool {
    NON_VOWEL_MODIFIERS.contains(&c)
}

/// Characters whose presence right after a consonant makes its inherent
/// vowel audible.
#[inline]
pub fn triggers_mukta(c: char) -> bool {
    PRE_BASE_LIGATURES.contains(&c)
        || is_base_letter(c)
        || POST_LETTERS.contains(&c)
        || PRE_POST_MODIFIERS.contains(&c)
}

/// Word separators for single-letter detection (the ASCII whitespace set).
#[inline]
pub fn is_word_boundary(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}
