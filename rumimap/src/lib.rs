//! Rumimap - mapping tables for Jawi-to-Rumi transliteration
//!
//! This crate holds the static data the transliteration engine reads:
//! character classes, consonant tables, special-word lexicons and the
//! normalisation helpers used to key them.

pub mod escape;
pub mod letters;
pub mod lexicon;
pub mod normalize;

pub use letters::{classify, CharClass, ConsonantTable, Mark, Tanwin, Vowel};
pub use lexicon::{special_word, Lexicon};
pub use normalize::{lexicon_key, normalize_ligatures, strip_harakat, verse_key};
