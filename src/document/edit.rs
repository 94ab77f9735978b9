//! Edits received from the client and the reasons one can be rejected.

use thiserror::Error;
use tower_lsp::lsp_types::{Position, Range, TextDocumentContentChangeEvent};

/// A single change to the document text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the text between two positions of the pre-edit text.
    Range { range: Range, text: String },
    /// Replace the whole document.
    Full(String),
}

impl Edit {
    /// Range edit replacing `range` with `text`.
    pub fn range(range: Range, text: impl Into<String>) -> Self {
        Edit::Range {
            range,
            text: text.into(),
        }
    }

    /// Whole-document edit.
    pub fn full(text: impl Into<String>) -> Self {
        Edit::Full(text.into())
    }
}

impl From<TextDocumentContentChangeEvent> for Edit {
    fn from(change: TextDocumentContentChangeEvent) -> Self {
        // `range_length` is deprecated in the protocol and ignored
        match change.range {
            Some(range) => Edit::Range {
                range,
                text: change.text,
            },
            None => Edit::Full(change.text),
        }
    }
}

/// An edit whose range does not resolve against the current text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("position {} is past the last line of the document", at(.position))]
    PositionOutOfBounds { position: Position },

    #[error("range start {} is after its end {}", at(.start), at(.end))]
    InvertedRange { start: Position, end: Position },
}

fn at(position: &Position) -> String {
    format!("{}:{}", position.line, position.character)
}
