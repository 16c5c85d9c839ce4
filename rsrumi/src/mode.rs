use std::fmt;
use std::str::FromStr;

use rumimap::Lexicon;

use crate::precision::transliterate_precise_with;
use crate::syllabify::syllabify;
use crate::transliterate::{transliterate_with, WordTransliteration};

/// Transliteration convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// JAKIM "Rumi Biasa".
    #[default]
    Jakim,
    /// JAKIM rules with double-vowel Al-Fatihah spellings.
    Malaysian,
    /// Makhraj-accurate consonants.
    Precision,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Jakim, Mode::Malaysian, Mode::Precision];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Jakim => "jakim",
            Mode::Malaysian => "malaysian",
            Mode::Precision => "precision",
        }
    }

    /// The builtin lexicon for this mode.
    pub fn lexicon(self) -> Lexicon {
        match self {
            Mode::Jakim => Lexicon::jakim(),
            Mode::Malaysian => Lexicon::malaysian(),
            Mode::Precision => Lexicon::precision(),
        }
    }

    pub fn transliterate(self, text: &str, lexicon: &Lexicon) -> String {
        match self {
            Mode::Jakim | Mode::Malaysian => transliterate_with(text, lexicon),
            Mode::Precision => transliterate_precise_with(text, lexicon).text,
        }
    }

    /// Transliterate each word of `words` on its own.
    pub fn transliterate_words<S: AsRef<str>>(
        self,
        words: &[S],
        lexicon: &Lexicon,
    ) -> Vec<WordTransliteration> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                let rumi = self.transliterate(word, lexicon);
                let syllables = syllabify(&rumi);
                WordTransliteration {
                    arabic: word.to_string(),
                    rumi,
                    syllables,
                }
            })
            .collect()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jakim" => Ok(Mode::Jakim),
            "malaysian" | "ms" => Ok(Mode::Malaysian),
            "precision" | "99" => Ok(Mode::Precision),
            other => Err(format!(
                "Unknown mode '{}' (expected one of: jakim, malaysian, precision)",
                other
            )),
        }
    }
}
