//! RSRumi - Jawi-to-Rumi transliteration of Quranic Arabic
//!
//! This crate turns vowelled Arabic text into JAKIM-style Rumi, with a
//! makhraj-accurate precision mode, a Malay syllabifier and a tajwid rule
//! detector. The mapping tables live in the `rumimap` crate.

pub mod mode;
pub mod precision;
pub mod pronunciation;
pub mod syllabify;
pub mod tajwid;
pub mod tokenize;
pub mod transliterate;

pub use mode::Mode;
pub use precision::{generate_verse_precise, transliterate_precise, PreciseTransliteration};
pub use pronunciation::{
    pronunciation_breakdown, syllabify_malaysian, transliterate_malaysian, verse_transliteration,
};
pub use syllabify::syllabify;
pub use tajwid::{detect_verse_rules, get_tajwid_hint, get_tajwid_hints, TajwidHint, TajwidRule};
pub use tokenize::tokenize_words;
pub use transliterate::{
    transliterate, transliterate_with, transliterate_word, transliterate_words,
    WordTransliteration,
};
