use unicode_segmentation::UnicodeSegmentation;

/// Tokenizes Arabic text by whitespace, trimming punctuation graphemes from
/// both ends of each token.
///
/// Verse numbers written in Arabic-Indic digits, the end-of-ayah sign,
/// ornate parentheses and stand-alone pause marks count as punctuation, so
/// a line copied from a mushaf yields only its words. Tokens that are
/// nothing but punctuation are dropped.
///
/// # Examples
///
/// ```
/// use rsrumi::tokenize::tokenize_words;
///
/// let tokens = tokenize_words("قُلْ هُوَ اللَّهُ أَحَدٌ ﴿١﴾");
/// assert_eq!(tokens, vec!["قُلْ", "هُوَ", "اللَّهُ", "أَحَدٌ"]);
/// ```
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            let graphemes: Vec<&str> = word.graphemes(true).collect();
            let mut start = 0;
            let mut end = graphemes.len();

            while start < end && is_punctuation(graphemes[start]) {
                start += 1;
            }
            while end > start && is_punctuation(graphemes[end - 1]) {
                end -= 1;
            }

            graphemes[start..end].concat()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Helper function to determine if a grapheme is punctuation
fn is_punctuation(grapheme: &str) -> bool {
    grapheme.chars().all(|c| {
        c.is_ascii_punctuation()
            || c.is_ascii_digit()
            // General Punctuation
            || ('\u{2000}'..='\u{206F}').contains(&c)
            // Arabic-Indic and Extended Arabic-Indic digits
            || ('\u{0660}'..='\u{0669}').contains(&c)
            || ('\u{06F0}'..='\u{06F9}').contains(&c)
            // small high pause marks
            || ('\u{06D6}'..='\u{06DC}').contains(&c)
            || matches!(
                c,
                '\u{060C}' // comma
                    | '\u{061B}' // semicolon
                    | '\u{061F}' // question mark
                    | '\u{066A}'..='\u{066D}'
                    | '\u{06D4}' // full stop
                    | '\u{06DD}' // end of ayah
                    | '\u{06DE}' // rub el hizb
                    | '\u{06E9}' // place of sajdah
                    | '\u{FD3E}'
                    | '\u{FD3F}'
                    | '«'
                    | '»'
                    | '…'
            )
    })
}
