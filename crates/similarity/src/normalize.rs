use unicode_segmentation::UnicodeSegmentation;

/// Split text into normalized tokens.
///
/// Words are found with Unicode word boundaries, lowercased, and stripped of every
/// non-alphanumeric character (`"Don't!"` becomes `"dont"`). Tokens that end up empty
/// are dropped, so pure punctuation yields no tokens at all.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalized text: tokens joined by single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    tokenize(text).join(" ")
}
