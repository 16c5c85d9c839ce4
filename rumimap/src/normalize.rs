//! Normalisation applied to Arabic text before lookup and transliteration
//!
//! The state machines assume decomposed lam-alif and never see Unicode
//! normalisation of whole words: canonical reordering would move shaddah
//! behind the vowel mark and vice versa, and the mark order is part of the
//! input the machines read. NFC is only used to build lookup keys, where all
//! marks are stripped afterwards anyway.

use unicode_normalization::UnicodeNormalization;

use crate::letters::{
    is_strippable, ALIF, ALIF_HAMZA_ABOVE, ALIF_HAMZA_BELOW, ALIF_MADDA, ALIF_WASLA, LAM,
};

/// Remove harakat, the dagger alif and tatweel.
pub fn strip_harakat(text: &str) -> String {
    text.chars().filter(|&c| !is_strippable(c)).collect()
}

/// Diacritic-insensitive key for special-word lookup.
///
/// The word is NFC-composed first so that an alif followed by a combining
/// hamza matches the precomposed letter used in the tables.
pub fn lexicon_key(word: &str) -> String {
    let composed: String = word.nfc().collect();
    strip_harakat(&composed)
}

/// Rewrite lam-alif ligatures and lam followed by a hamza/madda alif into
/// plain lam + alif.
pub fn normalize_ligatures(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{FEF5}'..='\u{FEFC}' => {
                result.push(LAM);
                result.push(ALIF);
            }
            LAM if matches!(
                chars.peek(),
                Some(&(ALIF_MADDA | ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW))
            ) =>
            {
                chars.next();
                result.push(LAM);
                result.push(ALIF);
            }
            _ => result.push(c),
        }
    }

    result
}

/// Key for whole-verse comparison: stripped, alif-wasla folded to alif and
/// whitespace collapsed.
pub fn verse_key(text: &str) -> String {
    strip_harakat(text)
        .split_whitespace()
        .map(|word| word.replace(ALIF_WASLA, "\u{0627}"))
        .collect::<Vec<_>>()
        .join(" ")
}
