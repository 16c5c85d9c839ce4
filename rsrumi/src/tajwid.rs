//! Tajwid rule detection on Arabic text
//!
//! Word-pair hints classify the transition from one word to the next
//! (nun sakinah and tanwin rules) and fall back to qalqalah and madd within
//! the word. Verse-level detection lists the rules a whole ayah contains.

use std::fmt;

use itertools::Itertools;
use rumimap::letters::{
    is_harakah, is_qalqalah_letter, is_quranic_annotation, mark_of, ALIF, ALIF_HAMZA_ABOVE,
    ALIF_HAMZA_BELOW, ALIF_MADDA, DAGGER_ALIF, DAMMAH, DAMMATAN, FATHAH, FATHATAN, HAMZA,
    IQLAB_MARK, KASRAH, KASRATAN, MADDAH_ABOVE, MEEM, NUN, QURANIC_SUKUN, SHADDAH, SUKUN, TATWEEL,
    WAW, WAW_HAMZA, YAA, YAA_HAMZA,
};
use serde::Serialize;

use crate::transliterate::is_sukun;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TajwidRule {
    Izhar,
    Idgham,
    Iqlab,
    Ikhfa,
    Ghunnah,
    Qalqalah,
    Madd,
    Normal,
}

/// Display metadata for a [`TajwidRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TajwidHint {
    pub rule: TajwidRule,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub label: &'static str,
    pub label_ms: &'static str,
}

const fn hint(
    rule: TajwidRule,
    color: &'static str,
    bg_color: &'static str,
    label: &'static str,
    label_ms: &'static str,
) -> TajwidHint {
    TajwidHint {
        rule,
        color,
        bg_color,
        label,
        label_ms,
    }
}

static HINTS: [TajwidHint; 8] = [
    hint(TajwidRule::Izhar, "#10b981", "#10b98120", "Izhar", "Jelas"),
    hint(TajwidRule::Idgham, "#3b82f6", "#3b82f620", "Idgham", "Sebati"),
    hint(TajwidRule::Iqlab, "#a855f7", "#a855f720", "Iqlab", "Tukar"),
    hint(TajwidRule::Ikhfa, "#eab308", "#eab30820", "Ikhfa", "Tersembunyi"),
    hint(TajwidRule::Ghunnah, "#06b6d4", "#06b6d420", "Ghunnah", "Dengung"),
    hint(TajwidRule::Qalqalah, "#f97316", "#f9731620", "Qalqalah", "Pantulan"),
    hint(TajwidRule::Madd, "#ec4899", "#ec489920", "Madd", "Panjang"),
    hint(TajwidRule::Normal, "#10b981", "transparent", "", ""),
];

impl TajwidRule {
    pub const ALL: [TajwidRule; 8] = [
        TajwidRule::Izhar,
        TajwidRule::Idgham,
        TajwidRule::Iqlab,
        TajwidRule::Ikhfa,
        TajwidRule::Ghunnah,
        TajwidRule::Qalqalah,
        TajwidRule::Madd,
        TajwidRule::Normal,
    ];

    pub fn hint(self) -> TajwidHint {
        HINTS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TajwidRule::Izhar => "izhar",
            TajwidRule::Idgham => "idgham",
            TajwidRule::Iqlab => "iqlab",
            TajwidRule::Ikhfa => "ikhfa",
            TajwidRule::Ghunnah => "ghunnah",
            TajwidRule::Qalqalah => "qalqalah",
            TajwidRule::Madd => "madd",
            TajwidRule::Normal => "normal",
        }
    }
}

impl fmt::Display for TajwidRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an idgham merges with nasalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdghamKind {
    /// ي ن م و
    WithGhunnah,
    /// ل ر
    WithoutGhunnah,
}

fn is_halqi(c: char) -> bool {
    matches!(c, HAMZA | 'ه' | 'ع' | 'ح' | 'غ' | 'خ')
}

fn is_ikhfa_letter(c: char) -> bool {
    matches!(
        c,
        'ت' | 'ث' | 'ج' | 'د' | 'ذ' | 'ز' | 'س' | 'ش' | 'ص' | 'ض' | 'ط' | 'ظ' | 'ف' | 'ق' | 'ك'
    )
}

fn is_vowel_sign(c: char) -> bool {
    is_harakah(c) || is_quranic_annotation(c) || c == TATWEEL
}

fn strip_vowel_signs(word: &str) -> String {
    word.chars().filter(|&c| !is_vowel_sign(c)).collect()
}

/// First letter of a word with marks removed and hamza carriers folded to
/// hamza.
fn first_letter(word: &str) -> Option<char> {
    word.chars()
        .find(|&c| !is_vowel_sign(c))
        .map(|c| match c {
            ALIF_HAMZA_ABOVE | ALIF_HAMZA_BELOW | ALIF_MADDA | WAW_HAMZA | YAA_HAMZA => HAMZA,
            _ => c,
        })
}

/// A word ending in nun sakinah (with or without a written sukun) or a
/// tanwin. Trailing Quranic annotations such as the small iqlab meem are
/// ignored.
fn ends_in_nun_sakinah(word: &str) -> bool {
    let mut rev = word
        .trim_end()
        .chars()
        .rev()
        .skip_while(|&c| is_quranic_annotation(c) && c != QURANIC_SUKUN);
    match rev.next() {
        Some(FATHATAN | DAMMATAN | KASRATAN | NUN) => true,
        Some(c) if is_sukun(c) => rev.next() == Some(NUN),
        _ => false,
    }
}

/// The idgham subtype the first letter of `next_word` would trigger.
pub fn idgham_kind(next_word: &str) -> Option<IdghamKind> {
    match first_letter(next_word)? {
        YAA | NUN | MEEM | WAW => Some(IdghamKind::WithGhunnah),
        'ل' | 'ر' => Some(IdghamKind::WithoutGhunnah),
        _ => None,
    }
}

/// Classify the nun sakinah or tanwin at the end of `current` by the first
/// letter of `next`.
pub fn detect_nun_sakinah_rule(current: &str, next: &str) -> TajwidRule {
    if !ends_in_nun_sakinah(current) {
        return TajwidRule::Normal;
    }
    let Some(letter) = first_letter(next) else {
        return TajwidRule::Normal;
    };
    if is_halqi(letter) {
        TajwidRule::Izhar
    } else if letter == 'ب' {
        TajwidRule::Iqlab
    } else if idgham_kind(next).is_some() {
        TajwidRule::Idgham
    } else if is_ikhfa_letter(letter) {
        TajwidRule::Ikhfa
    } else {
        TajwidRule::Normal
    }
}

/// A qalqalah letter carrying sukun, or one ending the word.
pub fn detect_qalqalah(word: &str) -> bool {
    word.chars()
        .tuple_windows()
        .any(|(a, b)| is_qalqalah_letter(a) && is_sukun(b))
        || strip_vowel_signs(word)
            .chars()
            .last()
            .is_some_and(is_qalqalah_letter)
}

/// A long-vowel pattern or a dagger alif.
pub fn detect_madd(word: &str) -> bool {
    word.contains(DAGGER_ALIF)
        || word.chars().tuple_windows().any(|pair| {
            matches!(
                pair,
                (ALIF | FATHAH, ALIF) | (KASRAH, YAA) | (DAMMAH, WAW)
            )
        })
}

/// The hint for `current` given the word that follows it (empty at the end
/// of a verse). Nun sakinah rules win over qalqalah, which wins over madd.
pub fn get_tajwid_hint(current: &str, next: &str) -> TajwidHint {
    let rule = match detect_nun_sakinah_rule(current, next) {
        TajwidRule::Normal if detect_qalqalah(current) => TajwidRule::Qalqalah,
        TajwidRule::Normal if detect_madd(current) => TajwidRule::Madd,
        rule => rule,
    };
    rule.hint()
}

/// One hint per word, each using its successor as context.
pub fn get_tajwid_hints<S: AsRef<str>>(words: &[S]) -> Vec<TajwidHint> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let next = words.get(i + 1).map_or("", |w| w.as_ref());
            get_tajwid_hint(word.as_ref(), next)
        })
        .collect()
}

/// Rules reported for a whole verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerseRule {
    IdghamBilaGhunnah,
    IdghamBiGhunnah,
    Ikhfa,
    Iqlab,
    Izhar,
    Qalqalah,
    MadAsli,
    MadWajib,
    Ghunnah,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRuleInfo {
    pub name: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    /// Letters that trigger the rule; empty for the madd rules.
    pub letters: &'static [char],
}

impl VerseRule {
    pub fn key(self) -> &'static str {
        match self {
            VerseRule::IdghamBilaGhunnah => "idgham_ghunnah",
            VerseRule::IdghamBiGhunnah => "idgham_bighunnah",
            VerseRule::Ikhfa => "ikhfa",
            VerseRule::Iqlab => "iqlab",
            VerseRule::Izhar => "izhar",
            VerseRule::Qalqalah => "qalqalah",
            VerseRule::MadAsli => "mad_asli",
            VerseRule::MadWajib => "mad_wajib",
            VerseRule::Ghunnah => "ghunnah",
        }
    }

    pub fn info(self) -> VerseRuleInfo {
        match self {
            VerseRule::IdghamBilaGhunnah => VerseRuleInfo {
                name: "Idgham Bila Ghunnah",
                color: "#F472B6",
                description: "Gabungkan huruf nun mati atau tanwin dengan huruf seterusnya tanpa dengung.",
                letters: &['ل', 'ر'],
            },
            VerseRule::IdghamBiGhunnah => VerseRuleInfo {
                name: "Idgham Bi Ghunnah",
                color: "#A78BFA",
                description: "Gabungkan huruf nun mati atau tanwin dengan dengung 2 harakat.",
                letters: &['ي', 'ن', 'م', 'و'],
            },
            VerseRule::Ikhfa => VerseRuleInfo {
                name: "Ikhfa",
                color: "#60A5FA",
                description: "Sembunyikan bunyi nun mati dengan dengung.",
                letters: &[
                    'ت', 'ث', 'ج', 'د', 'ذ', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ف', 'ق', 'ك',
                ],
            },
            VerseRule::Iqlab => VerseRuleInfo {
                name: "Iqlab",
                color: "#34D399",
                description: "Tukar nun mati kepada mim dengan dengung.",
                letters: &['ب'],
            },
            VerseRule::Izhar => VerseRuleInfo {
                name: "Izhar",
                color: "#FBBF24",
                description: "Lafazkan nun mati dengan jelas tanpa dengung.",
                letters: &['ء', 'ه', 'ع', 'ح', 'غ', 'خ'],
            },
            VerseRule::Qalqalah => VerseRuleInfo {
                name: "Qalqalah",
                color: "#F87171",
                description: "Bunyi pantulan pada huruf mati.",
                letters: &['ق', 'ط', 'ب', 'ج', 'د'],
            },
            VerseRule::MadAsli => VerseRuleInfo {
                name: "Mad Asli",
                color: "#38BDF8",
                description: "Panjangkan bacaan 2 harakat.",
                letters: &[],
            },
            VerseRule::MadWajib => VerseRuleInfo {
                name: "Mad Wajib Muttasil",
                color: "#818CF8",
                description: "Panjangkan bacaan 4-5 harakat.",
                letters: &[],
            },
            VerseRule::Ghunnah => VerseRuleInfo {
                name: "Ghunnah",
                color: "#FB7185",
                description: "Dengung pada huruf nun atau mim bertasydid.",
                letters: &['ن', 'م'],
            },
        }
    }
}

impl fmt::Display for VerseRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().name)
    }
}

/// Nun or mim carrying shaddah, in either mark order.
fn has_ghunnah(chars: &[char]) -> bool {
    chars.iter().enumerate().any(|(i, &c)| {
        (c == NUN || c == MEEM)
            && match chars.get(i + 1) {
                Some(&SHADDAH) => true,
                Some(&m) => mark_of(m).is_some() && chars.get(i + 2) == Some(&SHADDAH),
                None => false,
            }
    })
}

fn has_mad_asli(chars: &[char]) -> bool {
    chars.contains(&DAGGER_ALIF)
        || chars.contains(&ALIF_MADDA)
        || chars.windows(2).any(|w| w == [TATWEEL, MADDAH_ABOVE])
}

fn has_idgham_bighunnah(chars: &[char]) -> bool {
    chars.windows(2).any(|w| w == [NUN, IQLAB_MARK])
        || chars.windows(3).any(|w| w == [NUN, SHADDAH, SUKUN])
}

/// The rules a verse contains, in reporting order.
pub fn detect_verse_rules(text: &str) -> Vec<VerseRule> {
    let chars: Vec<char> = text.chars().collect();
    let mut detected = Vec::new();
    if has_ghunnah(&chars) {
        detected.push(VerseRule::Ghunnah);
    }
    if has_mad_asli(&chars) {
        detected.push(VerseRule::MadAsli);
    }
    if chars
        .iter()
        .tuple_windows()
        .any(|(&a, &b)| is_qalqalah_letter(a) && is_sukun(b))
    {
        detected.push(VerseRule::Qalqalah);
    }
    if has_idgham_bighunnah(&chars) {
        detected.push(VerseRule::IdghamBiGhunnah);
    }
    detected
}
