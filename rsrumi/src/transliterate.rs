//! Word-level transliteration of Arabic Quranic text to JAKIM Rumi
//!
//! Each whitespace-separated word is checked against a special-word lexicon
//! first and otherwise run through a single left-to-right pass over its code
//! points. The only state carried between characters is the last short vowel
//! emitted, which decides whether a following alif, waw or yaa lengthens it.

use itertools::Itertools;
use log::{debug, trace};
use rumimap::letters::{
    classify, is_alif, is_harakah, is_sun_letter, mark_of, short_vowel_of, CharClass,
    ConsonantTable, Mark, Vowel, LAM, QURANIC_SUKUN, SHADDAH, SUKUN,
};
use rumimap::{normalize_ligatures, Lexicon};
use serde::Serialize;

use crate::syllabify::syllabify;

/// One word of input with its transliteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordTransliteration {
    pub arabic: String,
    pub rumi: String,
    pub syllables: String,
}

/// Cursor over the code points of one word.
pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

/// The marks read after a base letter.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Marks {
    pub geminate: bool,
    pub mark: Option<Mark>,
}

impl Marks {
    pub fn carried(self) -> Option<Vowel> {
        self.mark.and_then(Mark::carried)
    }

    pub fn as_str(self) -> &'static str {
        self.mark.map_or("", Mark::as_str)
    }
}

impl Cursor {
    pub fn new(word: &str) -> Self {
        Self {
            chars: word.chars().collect(),
            pos: 0,
        }
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    /// Consume a shaddah and a vowel or tanwin following a base letter.
    ///
    /// Both `letter + shaddah + mark` and the canonical
    /// `letter + mark + shaddah` order are accepted.
    pub fn take_marks(&mut self) -> Marks {
        if self.peek(0) == Some(SHADDAH) {
            self.advance(1);
            let mark = self.peek(0).and_then(mark_of);
            if mark.is_some() {
                self.advance(1);
            }
            return Marks {
                geminate: true,
                mark,
            };
        }
        match self.peek(0).and_then(mark_of) {
            Some(mark) if self.peek(1) == Some(SHADDAH) => {
                self.advance(2);
                Marks {
                    geminate: true,
                    mark: Some(mark),
                }
            }
            Some(mark) => {
                self.advance(1);
                Marks {
                    geminate: false,
                    mark: Some(mark),
                }
            }
            None => Marks::default(),
        }
    }
}

/// The definite article at the start of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Article {
    /// The lam assimilates to the sun letter that follows it.
    Sun(char),
    Moon,
}

pub(crate) fn definite_article(cursor: &Cursor) -> Option<Article> {
    if !cursor.peek(0).is_some_and(is_alif) || cursor.peek(1) != Some(LAM) {
        return None;
    }
    let mut offset = 2;
    while cursor.peek(offset).is_some_and(is_harakah) {
        offset += 1;
    }
    match cursor.peek(offset) {
        Some(letter) if is_sun_letter(letter) => Some(Article::Sun(letter)),
        _ => Some(Article::Moon),
    }
}

pub(crate) fn is_sukun(c: char) -> bool {
    c == SUKUN || c == QURANIC_SUKUN
}

/// Collapse whitespace and hyphen runs and trim.
pub(crate) fn tidy(raw: &str) -> String {
    raw.split_whitespace()
        .join(" ")
        .chars()
        .coalesce(|a, b| {
            if a == '-' && b == '-' {
                Ok(a)
            } else {
                Err((a, b))
            }
        })
        .collect()
}

fn is_latin_consonant(c: char) -> bool {
    c == '\'' || (c.is_ascii_alphabetic() && !"aeiouAEIOU".contains(c))
}

/// The run of Latin consonants at the end of `out`.
fn trailing_consonants(out: &str) -> &str {
    let start = out
        .char_indices()
        .rev()
        .take_while(|&(_, c)| is_latin_consonant(c))
        .last()
        .map_or(out.len(), |(i, _)| i);
    &out[start..]
}

/// Transliterate one word with the general rules, without lexicon lookup.
pub fn transliterate_word(word: &str) -> String {
    let mut cursor = Cursor::new(word);
    let mut out = String::with_capacity(word.len());
    let mut carried: Option<Vowel> = None;

    match definite_article(&cursor) {
        Some(Article::Sun(_)) => {
            out.push('a');
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
        match classify(c, ConsonantTable::Jakim) {
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
                    ('w', Vowel::U)
                } else {
                    ('y', Vowel::I)
                };
                let sukun_next = next.is_some_and(is_sukun);
                if sukun_next && carried == Some(long) {
                    out.push_str(long.as_str());
                    cursor.advance(2);
                } else if next.is_some_and(|n| n == SHADDAH || mark_of(n).is_some()) {
                    cursor.advance(1);
                    let marks = cursor.take_marks();
                    out.push(consonant);
                    if marks.geminate {
                        out.push(consonant);
                    }
                    out.push_str(marks.as_str());
                    carried = marks.carried();
                } else if sukun_next && carried == Some(Vowel::A) {
                    // au / ai
                    out.push_str(long.as_str());
                    carried = None;
                    cursor.advance(2);
                } else {
                    out.push(consonant);
                    carried = None;
                    cursor.advance(1);
                }
            }
            CharClass::TaMarbuta => {
                cursor.advance(1);
                match cursor.peek(0).and_then(mark_of) {
                    Some(mark) => {
                        out.push('t');
                        out.push_str(mark.as_str());
                        cursor.advance(1);
                    }
                    None => out.push('h'),
                }
                carried = None;
            }
            CharClass::DaggerAlif => {
                out.push_str("aa");
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
                carried = None;
                cursor.advance(1);
            }
            CharClass::Sukun => {
                carried = None;
                cursor.advance(1);
            }
            CharClass::Shaddah => {
                let run = trailing_consonants(&out).to_string();
                trace!("Repairing stray shaddah in {word:?} by doubling {run:?}");
                out.push_str(&run);
                carried = None;
                cursor.advance(1);
            }
            CharClass::Consonant(latin) => {
                cursor.advance(1);
                let marks = cursor.take_marks();
                out.push_str(latin);
                if marks.geminate {
                    out.push_str(latin);
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

/// Transliterate text, consulting `lexicon` for whole-word exceptions.
pub fn transliterate_with(text: &str, lexicon: &Lexicon) -> String {
    let text = normalize_ligatures(text.trim());
    text.split_whitespace()
        .map(|word| match lexicon.lookup(word) {
            Some(rumi) => {
                debug!("Special word {word:?} -> {rumi:?}");
                rumi.to_string()
            }
            None => transliterate_word(word),
        })
        .join(" ")
}

/// Transliterate text to JAKIM Rumi.
///
/// Words are rejoined with single spaces; empty or whitespace-only input
/// gives an empty string.
///
/// # Examples
///
/// ```
/// use rsrumi::transliterate::transliterate;
///
/// assert_eq!(transliterate("بِسْمِ"), "bismi");
/// assert_eq!(transliterate("الْكِتَابِ"), "al-kitaabi");
/// ```
pub fn transliterate(text: &str) -> String {
    transliterate_with(text, &Lexicon::jakim())
}

/// Per-word transliteration and syllabification.
pub fn transliterate_words(text: &str) -> Vec<WordTransliteration> {
    text.split_whitespace()
        .map(|word| {
            let rumi = transliterate(word);
            let syllables = syllabify(&rumi);
            WordTransliteration {
                arabic: word.to_string(),
                rumi,
                syllables,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(transliterate("بِسْمِ"), "bismi");
        assert!(transliterate("اللَّهِ").contains("Allah"));
        let rahman = transliterate("الرَّحْمَٰنِ الرَّحِيمِ");
        assert!(rahman.contains("Rahmaan"));
        assert!(rahman.contains("Rahiim"));
        assert!(transliterate("الْكِتَابِ").contains("al-k"));
        let ikhlas = transliterate("قُلْ هُوَ اللَّهُ أَحَدٌ");
        assert!(ikhlas.contains("qul"));
        assert!(ikhlas.contains("Allah"));
        assert!(ikhlas.ends_with("ahaadun"));
    }

    #[test]
    fn test_empty_and_foreign_input() {
        assert_eq!(transliterate(""), "");
        assert_eq!(transliterate("   "), "");
        assert_eq!(transliterate("hello, world"), "hello, world");
    }

    #[test]
    fn test_sun_and_moon_letters() {
        assert_eq!(transliterate("الشَّمْسِ"), "asyasyaamsi");
        assert_eq!(transliterate("النَّاسِ"), "annaasi");
        assert_eq!(transliterate("التَّوْبَةِ"), "attaubati");
        assert_eq!(transliterate("الْقُرْآنِ"), "al-qurni");
        assert_eq!(transliterate("الْمُسْتَقِيمَ"), "al-mustaqiyma");
        assert!(!transliterate("الشَّمْسِ").contains("al-"));
    }

    #[test]
    fn test_article_only_at_word_start() {
        assert_eq!(transliterate("قَالَ"), "qaala");
    }

    #[test]
    fn test_gemination_in_either_mark_order() {
        // canonical order puts the vowel before shaddah
        assert_eq!(transliterate("مُحَمَّدٌ"), "muhaammadun");
        assert_eq!(transliterate("\u{0645}\u{064F}\u{062D}\u{064E}\u{0645}\u{0651}\u{064E}\u{062F}\u{064C}"), "muhaammadun");
        assert_eq!(transliterate("رَبَّنَا"), "rabbanaa");
        assert_eq!(transliterate("رَبِّ"), "rabbi");
    }

    #[test]
    fn test_weak_letter_gemination() {
        assert_eq!(transliterate("إِيَّاكَ"), "iyyaaka");
        assert_eq!(transliterate("قُوَّةٌ"), "quwwatun");
    }

    #[test]
    fn test_ta_marbuta() {
        assert_eq!(transliterate("رَحْمَة"), "rahamah");
        assert_eq!(transliterate("رَحْمَةٌ"), "rahamatun");
        assert_eq!(transliterate("صَلَاةٌ"), "soalaatun");
    }

    #[test]
    fn test_long_vowels_and_diphthongs() {
        assert_eq!(transliterate("كِتَابٌ"), "kitaabun");
        assert_eq!(transliterate("يَوْمِ"), "yaumi");
        assert_eq!(transliterate("بَيْتٌ"), "baitun");
        assert_eq!(transliterate("مَالِكِ يَوْمِ الدِّينِ"), "maaliki yaumi addiyni");
    }

    #[test]
    fn test_alif_maqsura_and_dagger_alif() {
        assert_eq!(transliterate("مُوسَىٰ"), "muwsaaaa");
        assert_eq!(transliterate("صَلَّى"), "soallaa");
        // not in the lexicon, so the dagger alif reaches the machine
        assert_eq!(transliterate("ذَٰلِكَ"), "zaaaalika");
        assert_eq!(transliterate_word("\u{0628}\u{064E}\u{0649}"), "baa");
        assert_eq!(transliterate_word("\u{0647}\u{064E}\u{0670}"), "haaa");
    }

    #[test]
    fn test_tanwin_and_weak_consonants() {
        assert_eq!(transliterate("كِتَابًا"), "kitaabana");
        assert_eq!(transliterate("عَظِيمٍ"), "'azoiymin");
        assert_eq!(transliterate("سُورَةٌ"), "suwratun");
        assert_eq!(transliterate("غَفُورٌ"), "ghaafuwrun");
        assert_eq!(transliterate("الصَّلَاةِ"), "asosoalaati");
        assert_eq!(transliterate("الْمُؤْمِنِينَ"), "al-mu'miniyna");
        assert_eq!(transliterate("الْحَمْدُ"), "al-haamdu");
    }

    #[test]
    fn test_jakim_letters() {
        let cases = [
            ("ثَلَاثَةٌ", "saalaasaatun"),
            ("حَمْدٌ", "haamdun"),
            ("خَيْرٌ", "khaairun"),
            ("ذَلِكَ", "zaalika"),
            ("شَمْسٌ", "syaamsun"),
            ("صَبْرٌ", "soabrun"),
            ("ضَرْبٌ", "doarbun"),
            ("طَعَامٌ", "toa'aamun"),
            ("ظَالِمٌ", "zoaalimun"),
            ("غَفُورٌ", "ghaafuwrun"),
            ("قَلْبٌ", "qalbun"),
        ];
        for (arabic, rumi) in cases {
            assert_eq!(transliterate(arabic), rumi, "input {}", arabic);
        }
    }

    #[test]
    fn test_diphthong_clears_carried_vowel() {
        // a kasrah on the alif is read as its own vowel, not as "a" + "i"
        assert_eq!(transliterate_word("لَيْاِ"), "laii");
        // a second waw with sukun is no longer a diphthong
        assert_eq!(transliterate_word("بَيْوْ"), "baiw");
    }

    #[test]
    fn test_ligature_and_unknown_code_points() {
        assert_eq!(transliterate("\u{FEFB}"), "la");
        assert_eq!(transliterate("لَا"), "laa");
    }

    #[test]
    fn test_stray_shaddah_doubles_trailing_consonants() {
        // shaddah after an unmapped code point falls through to the repair
        assert_eq!(transliterate_word("\u{0628}\u{0652}\u{06E5}\u{0651}"), "bb");
        assert_eq!(trailing_consonants("qul"), "l");
        assert_eq!(trailing_consonants("bism"), "sm");
        assert_eq!(trailing_consonants("a"), "");
    }

    #[test]
    fn test_tidy() {
        assert_eq!(tidy("  al--kitaab   x "), "al-kitaab x");
        assert_eq!(tidy(""), "");
    }

    #[test]
    fn test_transliterate_words() {
        let words = transliterate_words("بِسْمِ الْكِتَابِ");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].arabic, "بِسْمِ");
        assert_eq!(words[0].rumi, "bismi");
        assert_eq!(words[0].syllables, "bis-mi");
        assert_eq!(words[1].syllables, "al-ki-taa-bi");
    }

    #[test]
    fn test_user_lexicon_overrides_builtin() {
        let mut lexicon = Lexicon::jakim();
        lexicon.insert("الكتاب", "al-Kitaab");
        assert_eq!(transliterate_with("الْكِتَابِ اللَّهِ", &lexicon), "al-Kitaab Allah");
    }
}
