//! Makhraj-accurate transliteration with tajwid markers
//!
//! Uses the precise consonant table (`ts`, `dz`, `sh`, `dh`, `th`, `zh`, ...)
//! and reports the recitation features it met along the way, plus reading
//! notes for the sounds that appear in the output.

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};
use rumimap::letters::{
    classify, is_qalqalah_letter, mark_of, precise_consonant_of, short_vowel_of, CharClass,
    ConsonantTable, Mark, Vowel, SHADDAH,
};
use rumimap::{normalize_ligatures, verse_key, Lexicon};
use serde::Serialize;

use crate::transliterate::{definite_article, is_sukun, tidy, Article, Cursor};

/// Verses rendered as a whole rather than word by word.
static VERSE_PATTERNS: &[(&str, &str)] = &[
    (
        "بِسْمِ ٱللَّهِ ٱلرَّحْمَـٰنِ ٱلرَّحِيمِ",
        "Bismillahir-rahmaanir-rahiim",
    ),
    ("بسم الله الرحمن الرحيم", "Bismillahir-rahmaanir-rahiim"),
];

/// Reading notes keyed by the substring of the output that triggers them.
static NOTES: &[(&str, &str)] = &[
    ("[!]", "[!] = Qalqalah (pantulan kecil)"),
    ("aa", "aa = bunyi 'a' panjang (2 harakat)"),
    ("ii", "ii = bunyi 'i' panjang (2 harakat)"),
    ("uu", "uu = bunyi 'u' panjang (2 harakat)"),
    ("'", "' = ain/hamzah (dari kerongkong)"),
    ("q", "q = qaf (sebut dari pangkal tekak)"),
    ("ts", "ts = tsa (lidah keluar sedikit)"),
    ("dz", "dz = dzal (lidah keluar sedikit)"),
    ("sh", "sh = shad (s tebal)"),
    ("dh", "dh = dhad (d tebal)"),
    ("th", "th = tha (t tebal)"),
    ("zh", "zh = zha (z tebal)"),
    ("gh", "gh = ghain (bunyi berkumur)"),
    ("kh", "kh = kha (seperti 'akhir')"),
];

const WHOLE_VERSE_NOTE: &str = "Ayat lengkap";

/// A recitation feature met while transliterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TajwidMarker {
    LamSyamsiyyah,
    MadThobii(Vowel),
    AlifKhanjariyah,
    Qalqalah,
    /// Doubled consonant, as rendered.
    Tasydid(&'static str),
    Tanwin,
}

impl fmt::Display for TajwidMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TajwidMarker::LamSyamsiyyah => f.write_str("Lam Syamsiyyah"),
            TajwidMarker::MadThobii(v) => write!(f, "Mad Thobii ({0}{0})", v.as_str()),
            TajwidMarker::AlifKhanjariyah => f.write_str("Alif Khanjariyah"),
            TajwidMarker::Qalqalah => f.write_str("Qalqalah"),
            TajwidMarker::Tasydid(c) => write!(f, "Tasydid ({c}{c})"),
            TajwidMarker::Tanwin => f.write_str("Tanwin"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreciseTransliteration {
    pub text: String,
    pub tajwid: Vec<String>,
    pub notes: Vec<String>,
}

/// A verse prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreciseVerse {
    pub number: Option<u32>,
    pub arabic: String,
    pub transliteration: String,
    pub tajwid: Vec<String>,
    pub notes: Vec<String>,
    pub translation: Option<String>,
}

fn whole_verse(text: &str) -> Option<&'static str> {
    let key = verse_key(text);
    VERSE_PATTERNS
        .iter()
        .find(|(pattern, _)| text.contains(pattern) || key == verse_key(pattern))
        .map(|(_, rendering)| *rendering)
}

fn notes_for(text: &str) -> Vec<String> {
    NOTES
        .iter()
        .filter(|(trigger, _)| text.contains(trigger))
        .map(|(_, note)| note.to_string())
        .collect()
}

fn precise_word(word: &str, markers: &mut Vec<TajwidMarker>) -> String {
    let mut cursor = Cursor::new(word);
    let mut out = String::with_capacity(word.len());
    let mut carried: Option<Vowel> = None;
    // the sun letter after an assimilated lam is already written once
    let mut assimilated = false;

    match definite_article(&cursor) {
        Some(Article::Sun(letter)) => {
            out.push('a');
            out.push_str(precise_consonant_of(letter).unwrap_or_default());
            out.push('-');
            markers.push(TajwidMarker::LamSyamsiyyah);
            assimilated = true;
            cursor.advance(2);
        }
        Some(Article::Moon) => {
            out.push_str("al-");
            cursor.advance(2);
        }
        None => {}
    }

    while let Some(c) = cursor.peek(0) {
        let next = cursor.peek(1);
        match classify(c, ConsonantTable::Precise) {
            CharClass::Tatweel => cursor.advance(1),
            CharClass::AlifMaqsura => {
                out.push('a');
                cursor.advance(1);
            }
            CharClass::Alif => {
                if carried == Some(Vowel::A) {
                    out.push('a');
                    cursor.advance(1);
                } else if let Some(v) = next.and_then(short_vowel_of) {
                    out.push_str(v.as_str());
                    carried = Some(v);
                    cursor.advance(2);
                } else {
                    out.push('a');
                    carried = Some(Vowel::A);
                    cursor.advance(1);
                }
            }
            class @ (CharClass::Waw | CharClass::Yaa) => {
                let (consonant, long) = if class == CharClass::Waw {
                    ("w", Vowel::U)
                } else {
                    ("y", Vowel::I)
                };
                let sukun_next = next.is_some_and(is_sukun);
                if sukun_next && carried == Some(long) {
                    out.push_str(long.as_str());
                    markers.push(TajwidMarker::MadThobii(long));
                    cursor.advance(2);
                } else if next.is_some_and(|n| n == SHADDAH || mark_of(n).is_some()) {
                    cursor.advance(1);
                    let marks = cursor.take_marks();
                    out.push_str(consonant);
                    if marks.geminate {
                        out.push_str(consonant);
                        markers.push(TajwidMarker::Tasydid(consonant));
                    }
                    out.push_str(marks.as_str());
                    carried = marks.carried();
                } else {
                    // aw / ay keep the consonant
                    out.push_str(consonant);
                    carried = None;
                    cursor.advance(if sukun_next { 2 } else { 1 });
                }
            }
            CharClass::TaMarbuta => {
                cursor.advance(1);
                match cursor.peek(0).and_then(mark_of) {
                    Some(mark) => {
                        out.push('t');
                        out.push_str(mark.as_str());
                        if matches!(mark, Mark::Tanwin(_)) {
                            markers.push(TajwidMarker::Tanwin);
                        }
                        cursor.advance(1);
                    }
                    None => out.push('h'),
                }
                carried = None;
            }
            CharClass::DaggerAlif => {
                out.push('a');
                markers.push(TajwidMarker::AlifKhanjariyah);
                carried = Some(Vowel::A);
                cursor.advance(1);
            }
            CharClass::ShortVowel(v) => {
                out.push_str(v.as_str());
                carried = Some(v);
                cursor.advance(1);
            }
            CharClass::Tanwin(t) => {
                out.push_str(t.as_str());
                markers.push(TajwidMarker::Tanwin);
                carried = None;
                cursor.advance(1);
            }
            CharClass::Sukun | CharClass::Shaddah => {
                carried = None;
                cursor.advance(1);
            }
            CharClass::Consonant(latin) => {
                let sukun_next = next.is_some_and(is_sukun);
                if is_qalqalah_letter(c) && (sukun_next || next.is_none()) {
                    out.push_str(latin);
                    out.push_str("[!]");
                    markers.push(TajwidMarker::Qalqalah);
                    carried = None;
                    assimilated = false;
                    cursor.advance(if sukun_next { 2 } else { 1 });
                    continue;
                }
                cursor.advance(1);
                let marks = cursor.take_marks();
                out.push_str(latin);
                if marks.geminate && !assimilated {
                    out.push_str(latin);
                    markers.push(TajwidMarker::Tasydid(latin));
                }
                assimilated = false;
                if matches!(marks.mark, Some(Mark::Tanwin(_))) {
                    markers.push(TajwidMarker::Tanwin);
                }
                out.push_str(marks.as_str());
                carried = marks.carried();
            }
            CharClass::Foreign => {
                out.push(c);
                carried = None;
                cursor.advance(1);
            }
            CharClass::Unknown => {
                trace!("Skipping unmapped code point U+{:04X} in {word:?}", c as u32);
                cursor.advance(1);
            }
        }
    }

    tidy(&out)
}

/// Transliterate with the precise table, consulting `lexicon` for
/// whole-word exceptions.
pub fn transliterate_precise_with(text: &str, lexicon: &Lexicon) -> PreciseTransliteration {
    let input = text.trim();
    if input.is_empty() {
        return PreciseTransliteration::default();
    }

    if let Some(rendering) = whole_verse(input) {
        debug!("Matched whole verse {input:?}");
        return PreciseTransliteration {
            text: rendering.to_string(),
            tajwid: Vec::new(),
            notes: vec![WHOLE_VERSE_NOTE.to_string()],
        };
    }

    let input = normalize_ligatures(input);
    let mut markers = Vec::new();
    let text = input
        .split_whitespace()
        .map(|word| match lexicon.lookup(word) {
            Some(rumi) => {
                debug!("Special word {word:?} -> {rumi:?}");
                rumi.to_string()
            }
            None => precise_word(word, &mut markers),
        })
        .join(" ");

    let tajwid = markers
        .into_iter()
        .unique()
        .map(|marker| marker.to_string())
        .collect();
    let notes = notes_for(&text);
    PreciseTransliteration {
        text,
        tajwid,
        notes,
    }
}

/// Transliterate with the precise table and the builtin precision lexicon.
///
/// # Examples
///
/// ```
/// use rsrumi::precision::transliterate_precise;
///
/// let result = transliterate_precise("الشَّمْسِ");
/// assert_eq!(result.text, "asy-syamsi");
/// assert_eq!(result.tajwid, vec!["Lam Syamsiyyah"]);
/// ```
pub fn transliterate_precise(text: &str) -> PreciseTransliteration {
    transliterate_precise_with(text, &Lexicon::precision())
}

pub fn generate_verse_precise(
    arabic: &str,
    number: Option<u32>,
    translation: Option<&str>,
) -> PreciseVerse {
    let PreciseTransliteration {
        text,
        tajwid,
        notes,
    } = transliterate_precise(arabic);
    PreciseVerse {
        number,
        arabic: arabic.to_string(),
        transliteration: text,
        tajwid,
        notes,
        translation: translation.map(str::to_string),
    }
}
