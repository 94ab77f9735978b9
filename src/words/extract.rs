//! Splitting text into words.
//!
//! A word is a maximal run of characters in the Unicode letter category (`L`).
//! Letter numbers, symbols and combining marks all end a word.

use std::sync::LazyLock;

use regex::Regex;

/// A run of one or more letters.
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").unwrap());

/// Exactly one letter.
static LETTER_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\p{L}$").unwrap());

/// Whether `c` can be part of a word.
pub fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    let mut buf = [0u8; 4];
    LETTER_PATTERN.is_match(c.encode_utf8(&mut buf))
}

/// Every maximal run of letters in `text`, left to right, duplicates included.
pub fn extract_words(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert!(extract_words("").is_empty());
    }

    #[test]
    fn only_non_letters() {
        assert!(extract_words("  123 -- 4.5 !? \n\t").is_empty());
    }

    #[test]
    fn words_in_order_with_duplicates() {
        assert_eq!(
            extract_words("the cat and the hat"),
            vec!["the", "cat", "and", "the", "hat"]
        );
    }

    #[test]
    fn words_at_text_edges() {
        assert_eq!(extract_words("start...end"), vec!["start", "end"]);
    }

    #[test]
    fn digits_and_punctuation_split_words() {
        assert_eq!(
            extract_words("foo_bar baz42qux it's"),
            vec!["foo", "bar", "baz", "qux", "it", "s"]
        );
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(extract_words("Hello WORLD"), vec!["Hello", "WORLD"]);
    }

    #[test]
    fn unicode_letters() {
        assert_eq!(
            extract_words("naïve café, Straße; слово 😀 日本語"),
            vec!["naïve", "café", "Straße", "слово", "日本語"]
        );
    }

    #[test]
    fn newlines_separate_words() {
        assert_eq!(extract_words("one\ntwo\r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn letter_numbers_and_symbols_are_not_words() {
        // Roman numeral twelve is category Nl, circled A is So
        assert!(extract_words("Ⅻ").is_empty());
        assert!(extract_words("Ⓐ").is_empty());
        assert_eq!(extract_words("Ⓐbc"), vec!["bc"]);
    }

    #[test]
    fn combining_marks_split_words() {
        // Devanagari vowel signs are Mc/Mn, only the consonants are letters
        assert_eq!(extract_words("हिंदी"), vec!["ह", "द"]);
    }

    #[test]
    fn word_char_agrees_with_extraction() {
        for c in ['a', 'Z', 'é', 'ß', 'я', '日', 'ह', 'द'] {
            assert!(is_word_char(c), "{c:?}");
        }
        for c in ['1', '_', ' ', '\n', '😀', 'Ⅻ', 'Ⓐ', '\u{93F}', '\u{902}'] {
            assert!(!is_word_char(c), "{c:?}");
        }
    }
}
