// src/core/words.rs

/// Splits raw text into lowercase tokens.
///
/// Alphanumeric characters are lowercased, whitespace is kept as-is, and
/// every other character becomes a space, so punctuation acts as a word
/// separator. Tokens are the resulting whitespace-separated runs.
///
/// # Arguments
///
/// * `text` - The raw text to tokenize
///
/// # Returns
///
/// * `Vec<String>` - The tokens in reading order, possibly empty
#[inline]
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut cleaned = String::with_capacity(text.len());
    for character in text.chars() {
        if character.is_alphanumeric() {
            cleaned.extend(character.to_lowercase());
        } else if character.is_whitespace() {
            cleaned.push(character);
        } else {
            cleaned.push(' ');
        }
    }

    cleaned.split_whitespace().map(str::to_owned).collect()
}
