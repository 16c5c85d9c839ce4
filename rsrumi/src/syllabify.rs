//! Hyphenation of Rumi text into Malay reading syllables

use itertools::Itertools;

fn is_vowel(c: char) -> bool {
    "aeiouAEIOU".contains(c)
}

/// Break romanized text into syllables joined by `-`.
///
/// Existing hyphens (as in `al-`) are kept and each side is syllabified on
/// its own. Fragments of one or two characters are never split.
///
/// # Examples
///
/// ```
/// use rsrumi::syllabify::syllabify;
///
/// assert_eq!(syllabify("bismillah"), "bis-mil-lah");
/// assert_eq!(syllabify("al-kitaabi"), "al-ki-taa-bi");
/// ```
pub fn syllabify(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.split('-').map(syllabify_fragment).join("-"))
        .join(" ")
}

fn syllabify_fragment(fragment: &str) -> String {
    let chars: Vec<char> = fragment.chars().collect();
    if chars.len() <= 2 {
        return fragment.to_string();
    }

    let mut syllables: Vec<String> = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        current.push(c);
        let next = chars.get(i + 1).copied();
        let after = chars.get(i + 2).copied();

        if is_vowel(c) && next.is_some_and(|n| !is_vowel(n)) && after.is_some_and(is_vowel) {
            // V|CV
            syllables.push(std::mem::take(&mut current));
        } else if i >= 2
            && current.chars().count() >= 3
            && !is_vowel(c)
            && !is_vowel(chars[i - 1])
            && next.is_some_and(is_vowel)
        {
            // C|CV
            current.pop();
            syllables.push(std::mem::replace(&mut current, c.to_string()));
        }
    }
    if !current.is_empty() {
        syllables.push(current);
    }

    syllables.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllabify_words() {
        assert_eq!(syllabify("bismillah"), "bis-mil-lah");
        assert_eq!(syllabify("muhammadun"), "mu-ham-ma-dun");
        assert_eq!(syllabify("muhaammadun"), "mu-haam-ma-dun");
        assert_eq!(syllabify("iyyaaka"), "iy-yaa-ka");
    }

    #[test]
    fn test_short_words_unchanged() {
        assert_eq!(syllabify("a"), "a");
        assert_eq!(syllabify("wa"), "wa");
        assert_eq!(syllabify("al"), "al");
    }

    #[test]
    fn test_hyphen_segments() {
        assert_eq!(syllabify("al-kitaabi"), "al-ki-taa-bi");
        assert_eq!(syllabify("ar-Rahmaan ar-Rahiim"), "ar-Rah-maan ar-Ra-hiim");
        assert_eq!(syllabify("Allah"), "Al-lah");
    }

    #[test]
    fn test_final_geminate_not_split() {
        assert_eq!(syllabify("rabb"), "rabb");
    }

    #[test]
    fn test_whitespace_is_normalised() {
        assert_eq!(syllabify("  bismi   Allah "), "bis-mi Al-lah");
        assert_eq!(syllabify(""), "");
    }
}
