//! Completion support.
//!
//! The prefix is the run of letters immediately before the cursor; every known word
//! starting with it is offered as a plain completion item.

use tower_lsp::lsp_types::*;

use crate::document::LineIndex;
use crate::words::is_word_char;

/// Find the partial word ending at `position`.
///
/// Scans backwards from the cursor while the preceding characters are letters.
/// Returns None if the position's line does not exist in `source`.
pub fn prefix_at_position(source: &str, position: Position) -> Option<&str> {
    let offset = LineIndex::new(source).position_to_offset(position)?;
    prefix_before_offset(source, offset)
}

/// The run of letters ending at byte `offset`.
///
/// Returns None if `offset` is past the end of `source` or not on a character boundary.
fn prefix_before_offset(source: &str, offset: usize) -> Option<&str> {
    let before = source.get(..offset)?;
    let start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_word_char(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(offset);
    Some(&before[start..])
}

/// Wrap words as completion items carrying only a label.
pub fn completion_items<I>(words: I) -> Vec<CompletionItem>
where
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .map(|word| CompletionItem {
            label: word,
            ..Default::default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_at_word_end() {
        let source = "the quick brown fox";
        assert_eq!(prefix_at_position(source, Position::new(0, 3)), Some("the"));
        assert_eq!(prefix_at_position(source, Position::new(0, 19)), Some("fox"));
    }

    #[test]
    fn prefix_after_space_is_empty() {
        let source = "the quick brown fox";
        assert_eq!(prefix_at_position(source, Position::new(0, 4)), Some(""));
    }

    #[test]
    fn prefix_in_middle_of_word() {
        let source = "the quick brown fox";
        assert_eq!(prefix_at_position(source, Position::new(0, 7)), Some("qu"));
    }

    #[test]
    fn prefix_at_document_start() {
        assert_eq!(prefix_at_position("abc", Position::new(0, 0)), Some(""));
        assert_eq!(prefix_at_position("", Position::new(0, 0)), Some(""));
    }

    #[test]
    fn prefix_stops_at_newline() {
        let source = "alpha\nbeta";
        assert_eq!(prefix_at_position(source, Position::new(1, 2)), Some("be"));
        assert_eq!(prefix_at_position(source, Position::new(1, 0)), Some(""));
    }

    #[test]
    fn prefix_stops_at_digit_and_punctuation() {
        assert_eq!(prefix_at_position("x1abc", Position::new(0, 5)), Some("abc"));
        assert_eq!(prefix_at_position("obj.fie", Position::new(0, 7)), Some("fie"));
    }

    #[test]
    fn prefix_with_multibyte_letters() {
        // 'é' is one UTF-16 code unit, two UTF-8 bytes
        assert_eq!(prefix_at_position("un café", Position::new(0, 7)), Some("café"));
        // '😀' is two UTF-16 code units and not a letter
        assert_eq!(prefix_at_position("😀ab", Position::new(0, 4)), Some("ab"));
    }

    #[test]
    fn prefix_stops_at_combining_mark() {
        // The trailing vowel sign is not a letter, so no prefix is taken
        assert_eq!(prefix_at_position("हिंदी", Position::new(0, 5)), Some(""));
        assert_eq!(prefix_at_position("xⅫab", Position::new(0, 4)), Some("ab"));
    }

    #[test]
    fn prefix_before_invalid_offset() {
        assert_eq!(prefix_before_offset("abc", 3), Some("abc"));
        assert_eq!(prefix_before_offset("abc", 10), None);
        // Byte 1 is inside 'é'
        assert_eq!(prefix_before_offset("é", 1), None);
    }

    #[test]
    fn prefix_at_crlf_line_end() {
        assert_eq!(prefix_at_position("word\r\nnext", Position::new(0, 40)), Some("word"));
    }

    #[test]
    fn prefix_on_missing_line() {
        assert_eq!(prefix_at_position("abc", Position::new(4, 0)), None);
    }

    #[test]
    fn items_carry_only_labels() {
        let items = completion_items(vec!["car".to_string(), "card".to_string()]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "car");
        assert_eq!(items[1].label, "card");
        assert!(items.iter().all(|i| i.kind.is_none()
            && i.detail.is_none()
            && i.documentation.is_none()
            && i.sort_text.is_none()
            && i.text_edit.is_none()));
    }
}
