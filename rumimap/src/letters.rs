//! Character classes and Latin mappings for Arabic Quranic orthography
//!
//! Two consonant tables are provided. [`ConsonantTable::Jakim`] follows the
//! JAKIM "Rumi Biasa" convention (no diacritics, Malay digraphs such as `sya`
//! and `kha`), and [`ConsonantTable::Precise`] follows the makhraj-oriented
//! spelling used when tajwid markers are requested.

pub const HAMZA: char = '\u{0621}';
pub const ALIF_MADDA: char = '\u{0622}';
pub const ALIF_HAMZA_ABOVE: char = '\u{0623}';
pub const WAW_HAMZA: char = '\u{0624}';
pub const ALIF_HAMZA_BELOW: char = '\u{0625}';
pub const YAA_HAMZA: char = '\u{0626}';
pub const ALIF: char = '\u{0627}';
pub const BAA: char = '\u{0628}';
pub const TA_MARBUTA: char = '\u{0629}';
pub const TATWEEL: char = '\u{0640}';
pub const LAM: char = '\u{0644}';
pub const MEEM: char = '\u{0645}';
pub const NUN: char = '\u{0646}';
pub const WAW: char = '\u{0648}';
pub const ALIF_MAQSURA: char = '\u{0649}';
pub const YAA: char = '\u{064A}';
pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHAH: char = '\u{064E}';
pub const DAMMAH: char = '\u{064F}';
pub const KASRAH: char = '\u{0650}';
pub const SHADDAH: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const MADDAH_ABOVE: char = '\u{0653}';
pub const DAGGER_ALIF: char = '\u{0670}';
pub const ALIF_WASLA: char = '\u{0671}';
/// Uthmani sukun (small high dotless head of khah).
pub const QURANIC_SUKUN: char = '\u{06E1}';
/// Small high meem written over a nun that turns into mim (iqlab).
pub const IQLAB_MARK: char = '\u{06E2}';

/// A short vowel carried by a harakah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vowel {
    A,
    I,
    U,
}

impl Vowel {
    pub fn as_str(self) -> &'static str {
        match self {
            Vowel::A => "a",
            Vowel::I => "i",
            Vowel::U => "u",
        }
    }
}

/// An indefinite case ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tanwin {
    An,
    In,
    Un,
}

impl Tanwin {
    pub fn as_str(self) -> &'static str {
        match self {
            Tanwin::An => "an",
            Tanwin::In => "in",
            Tanwin::Un => "un",
        }
    }
}

/// A vowel-bearing mark that can follow a base letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Vowel(Vowel),
    Tanwin(Tanwin),
}

impl Mark {
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Vowel(v) => v.as_str(),
            Mark::Tanwin(t) => t.as_str(),
        }
    }

    /// The vowel a following weak letter may lengthen. Tanwin closes the
    /// syllable, so it never carries one.
    pub fn carried(self) -> Option<Vowel> {
        match self {
            Mark::Vowel(v) => Some(v),
            Mark::Tanwin(_) => None,
        }
    }
}

/// Which consonant spelling to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsonantTable {
    #[default]
    Jakim,
    Precise,
}

impl ConsonantTable {
    pub fn lookup(self, c: char) -> Option<&'static str> {
        match self {
            ConsonantTable::Jakim => consonant_of(c),
            ConsonantTable::Precise => precise_consonant_of(c),
        }
    }
}

/// JAKIM "Rumi Biasa" rendering of a consonant.
pub fn consonant_of(c: char) -> Option<&'static str> {
    let latin = match c {
        'ب' => "b",
        'ت' => "t",
        'ث' => "sa",
        'ج' => "j",
        'ح' => "ha",
        'خ' => "kha",
        'د' => "d",
        'ذ' => "za",
        'ر' => "r",
        'ز' => "z",
        'س' => "s",
        'ش' => "sya",
        'ص' => "so",
        'ض' => "do",
        'ط' => "to",
        'ظ' => "zo",
        'ع' => "'",
        'غ' => "gha",
        'ف' => "f",
        'ق' => "q",
        'ك' => "k",
        'ل' => "l",
        'م' => "m",
        'ن' => "n",
        'ه' => "h",
        HAMZA | WAW_HAMZA | YAA_HAMZA => "'",
        _ => return None,
    };
    Some(latin)
}

/// Makhraj-accurate rendering of a consonant.
pub fn precise_consonant_of(c: char) -> Option<&'static str> {
    let latin = match c {
        'ث' => "ts",
        'ح' => "h",
        'خ' => "kh",
        'ذ' => "dz",
        'ش' => "sy",
        'ص' => "sh",
        'ض' => "dh",
        'ط' => "th",
        'ظ' => "zh",
        'غ' => "gh",
        _ => return consonant_of(c),
    };
    Some(latin)
}

pub fn short_vowel_of(c: char) -> Option<Vowel> {
    match c {
        FATHAH => Some(Vowel::A),
        KASRAH => Some(Vowel::I),
        DAMMAH => Some(Vowel::U),
        _ => None,
    }
}

pub fn tanwin_of(c: char) -> Option<Tanwin> {
    match c {
        FATHATAN => Some(Tanwin::An),
        KASRATAN => Some(Tanwin::In),
        DAMMATAN => Some(Tanwin::Un),
        _ => None,
    }
}

/// A short vowel or a tanwin.
pub fn mark_of(c: char) -> Option<Mark> {
    short_vowel_of(c)
        .map(Mark::Vowel)
        .or_else(|| tanwin_of(c).map(Mark::Tanwin))
}

/// Letters that assimilate the lam of the definite article.
pub fn is_sun_letter(c: char) -> bool {
    matches!(
        c,
        'ت' | 'ث' | 'د' | 'ذ' | 'ر' | 'ز' | 'س' | 'ش' | 'ص' | 'ض' | 'ط' | 'ظ' | 'ل' | 'ن'
    )
}

/// قطب جد
pub fn is_qalqalah_letter(c: char) -> bool {
    matches!(c, 'ق' | 'ط' | 'ب' | 'ج' | 'د')
}

/// Harakat, tanwin, shaddah, sukun and the other combining marks of the
/// Arabic block, plus the dagger alif.
pub fn is_harakah(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | DAGGER_ALIF)
}

/// Marks removed before any diacritic-insensitive comparison.
pub fn is_strippable(c: char) -> bool {
    is_harakah(c) || c == TATWEEL
}

/// Small Quranic annotation signs (pause marks, small letters, iqlab meem).
pub fn is_quranic_annotation(c: char) -> bool {
    matches!(c, '\u{06D6}'..='\u{06ED}')
}

pub fn is_alif(c: char) -> bool {
    c == ALIF || c == ALIF_WASLA
}

/// Arabic script blocks, presentation forms included.
pub fn is_arabic(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{06FF}'
            | '\u{0750}'..='\u{077F}'
            | '\u{08A0}'..='\u{08FF}'
            | '\u{FB50}'..='\u{FDFF}'
            | '\u{FE70}'..='\u{FEFF}'
    )
}

/// The character classes the transliteration state machines dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Tatweel,
    AlifMaqsura,
    Alif,
    Waw,
    Yaa,
    TaMarbuta,
    DaggerAlif,
    ShortVowel(Vowel),
    Tanwin(Tanwin),
    Sukun,
    Shaddah,
    Consonant(&'static str),
    /// Anything outside the Arabic blocks; copied through unchanged.
    Foreign,
    /// An Arabic code point with no mapping; dropped.
    Unknown,
}

pub fn classify(c: char, table: ConsonantTable) -> CharClass {
    match c {
        TATWEEL => CharClass::Tatweel,
        ALIF_MAQSURA => CharClass::AlifMaqsura,
        ALIF | ALIF_WASLA => CharClass::Alif,
        WAW => CharClass::Waw,
        YAA => CharClass::Yaa,
        TA_MARBUTA => CharClass::TaMarbuta,
        DAGGER_ALIF => CharClass::DaggerAlif,
        SUKUN => CharClass::Sukun,
        SHADDAH => CharClass::Shaddah,
        _ => {
            if let Some(v) = short_vowel_of(c) {
                CharClass::ShortVowel(v)
            } else if let Some(t) = tanwin_of(c) {
                CharClass::Tanwin(t)
            } else if let Some(latin) = table.lookup(c) {
                CharClass::Consonant(latin)
            } else if is_arabic(c) {
                CharClass::Unknown
            } else {
                CharClass::Foreign
            }
        }
    }
}
