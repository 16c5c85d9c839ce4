//! Whole-word exceptions checked before the state machine runs
//!
//! Keys are stored stripped of harakat and tatweel (see
//! [`crate::normalize::lexicon_key`]), so every diacritic variant of a word
//! maps to the same output.

use anyhow::{Context, Result};
use csv::Reader;
use log::info;
use serde::Deserialize;

use crate::escape::unescape;
use crate::normalize::lexicon_key;

type Entry = (&'static str, &'static str);

/// Proper nouns and formulas whose orthography the general rules cannot
/// reproduce.
static JAKIM_WORDS: &[Entry] = &[
    ("الله", "Allah"),
    ("ٱلله", "Allah"),
    ("الرحمن", "ar-Rahmaan"),
    ("ٱلرحمن", "ar-Rahmaan"),
    ("الرحمان", "ar-Rahmaan"),
    ("ٱلرحمان", "ar-Rahmaan"),
    ("الرحيم", "ar-Rahiim"),
    ("ٱلرحيم", "ar-Rahiim"),
    ("الرحىم", "ar-Rahiim"),
    ("ٱلرحىم", "ar-Rahiim"),
];

static MALAYSIAN_WORDS: &[Entry] = &[
    ("الله", "Allah"),
    ("ٱلله", "Allah"),
    ("الرحمن", "ar-Rahmaan"),
    ("ٱلرحمن", "ar-Rahmaan"),
    ("الرحمان", "ar-Rahmaan"),
    ("ٱلرحمان", "ar-Rahmaan"),
    ("الرحيم", "ar-Rahiim"),
    ("ٱلرحيم", "ar-Rahiim"),
    ("العالمين", "al-'aalamiin"),
    ("ٱلعالمين", "al-'aalamiin"),
    ("المستقيم", "al-mustaqiim"),
    ("ٱلمستقيم", "al-mustaqiim"),
];

/// Standalone readings of frequent Al-Fatihah and Al-Ikhlas words.
static PRECISION_WORDS: &[Entry] = &[
    ("الله", "Allah"),
    ("ٱلله", "Allah"),
    ("الرحمن", "ar-Rahmaan"),
    ("ٱلرحمن", "ar-Rahmaan"),
    ("الرحمان", "ar-Rahmaan"),
    ("ٱلرحمان", "ar-Rahmaan"),
    ("الرحيم", "ar-Rahiim"),
    ("ٱلرحيم", "ar-Rahiim"),
    ("لله", "lillahi"),
    ("مالك", "Maaliki"),
    ("ملك", "Maaliki"),
    ("إياك", "Iyyaaka"),
    ("نعبد", "na'budu"),
    ("وإياك", "wa iyyaaka"),
    ("نستعين", "nasta'iin"),
    ("صراط", "shiraata"),
    ("أنعمت", "an'amta"),
    ("عليهم", "'alaihim"),
    ("قل", "Qul"),
    ("أحد", "ahad"),
    ("لم", "Lam"),
    ("يلد", "yalid"),
    ("ولم", "wa lam"),
    ("يولد", "yuulad"),
];

/// Look a stripped word up in the JAKIM exception table.
pub fn special_word(stripped: &str) -> Option<&'static str> {
    JAKIM_WORDS
        .iter()
        .find(|(arabic, _)| *arabic == stripped)
        .map(|(_, rumi)| *rumi)
}

#[derive(Debug, Deserialize)]
struct LexiconRecord {
    arabic: String,
    rumi: String,
}

/// A builtin exception table plus caller-supplied entries.
///
/// Caller entries shadow builtin ones with the same key.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    builtin: &'static [Entry],
    extra: Vec<(String, String)>,
}

impl Lexicon {
    pub fn jakim() -> Self {
        Self::with_builtin(JAKIM_WORDS)
    }

    pub fn malaysian() -> Self {
        Self::with_builtin(MALAYSIAN_WORDS)
    }

    pub fn precision() -> Self {
        Self::with_builtin(PRECISION_WORDS)
    }

    /// A lexicon without builtin entries.
    pub fn empty() -> Self {
        Self::default()
    }

    fn with_builtin(builtin: &'static [Entry]) -> Self {
        Self {
            builtin,
            extra: Vec::new(),
        }
    }

    /// Find the replacement for `word`, ignoring its diacritics.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.lookup_stripped(&lexicon_key(word))
    }

    /// Find the replacement for a key that is already stripped.
    pub fn lookup_stripped(&self, key: &str) -> Option<&str> {
        self.extra
            .iter()
            .rev()
            .find(|(arabic, _)| arabic == key)
            .map(|(_, rumi)| rumi.as_str())
            .or_else(|| {
                self.builtin
                    .iter()
                    .find(|(arabic, _)| *arabic == key)
                    .map(|(_, rumi)| *rumi)
            })
    }

    pub fn insert(&mut self, arabic: &str, rumi: &str) {
        self.extra.push((lexicon_key(arabic), rumi.to_string()));
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add the rows of an `arabic,rumi` CSV table. Returns the number of
    /// entries added.
    pub fn extend_from_csv(&mut self, data: &str) -> Result<usize> {
        let mut reader = Reader::from_reader(data.as_bytes());
        let mut added = 0;
        for (row, result) in reader.deserialize::<LexiconRecord>().enumerate() {
            let record =
                result.with_context(|| format!("Malformed lexicon row {}", row + 1))?;
            let arabic = unescape(record.arabic.trim());
            let rumi = unescape(record.rumi.trim());
            if arabic.is_empty() {
                continue;
            }
            self.insert(&arabic, &rumi);
            added += 1;
        }
        info!("Loaded {added} lexicon entries");
        Ok(added)
    }

    /// A lexicon holding only the rows of an `arabic,rumi` CSV table.
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut lexicon = Self::empty();
        lexicon.extend_from_csv(data)?;
        Ok(lexicon)
    }
}
