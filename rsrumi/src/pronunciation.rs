//! Malaysian reading aids: double-vowel spelling and pronunciation notes

use rumimap::Lexicon;
use serde::Serialize;

use crate::syllabify::syllabify;
use crate::transliterate::{transliterate, transliterate_with};

static NOTES: &[(&str, &str)] = &[
    ("aa", "aa = bunyi 'a' panjang"),
    ("ii", "ii = bunyi 'i' panjang"),
    ("uu", "uu = bunyi 'u' panjang"),
    ("'", "' = sebut dari kerongkong (ain/hamzah)"),
    ("q", "q = sebut 'q' dari kerongkong"),
    ("kh", "kh = sebut seperti 'kh' dalam 'akhir'"),
    ("gh", "gh = sebut seperti 'gh' dalam 'ghaib'"),
];

const LONG_VOWEL_NOTE: &str = "Huruf berganda = sebutan panjang";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PronunciationBreakdown {
    pub arabic: String,
    pub rumi: String,
    pub malaysian: String,
    pub syllables: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseTransliteration {
    pub number: Option<u32>,
    pub arabic: String,
    pub transliteration: String,
    pub syllables: String,
    pub notes: Vec<String>,
}

/// JAKIM rules with the Malaysian lexicon, which spells the common
/// Al-Fatihah endings with doubled long vowels.
pub fn transliterate_malaysian(text: &str) -> String {
    transliterate_with(text, &Lexicon::malaysian())
}

pub fn syllabify_malaysian(text: &str) -> String {
    syllabify(&transliterate_malaysian(text))
}

/// Both spellings of a word, its syllables and notes on the sounds that
/// need care.
pub fn pronunciation_breakdown(arabic: &str) -> PronunciationBreakdown {
    let rumi = transliterate(arabic);
    let malaysian = transliterate_malaysian(arabic);
    let syllables = syllabify(&malaysian)
        .split('-')
        .map(str::to_string)
        .collect();
    let notes = NOTES
        .iter()
        .filter(|(trigger, _)| malaysian.contains(trigger))
        .map(|(_, note)| note.to_string())
        .collect();

    PronunciationBreakdown {
        arabic: arabic.to_string(),
        rumi,
        malaysian,
        syllables,
        notes,
    }
}

pub fn verse_transliteration(arabic: &str, number: Option<u32>) -> VerseTransliteration {
    let transliteration = transliterate_malaysian(arabic);
    let syllables = syllabify(&transliteration);
    let mut notes = Vec::new();
    if ["aa", "ii", "uu"]
        .iter()
        .any(|long| transliteration.contains(long))
    {
        notes.push(LONG_VOWEL_NOTE.to_string());
    }

    VerseTransliteration {
        number,
        arabic: arabic.to_string(),
        transliteration,
        syllables,
        notes,
    }
}
