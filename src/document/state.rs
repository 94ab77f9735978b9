//! State of the single tracked document.

use tower_lsp::lsp_types::Position;

use super::edit::{Edit, EditError};
use super::text::LineIndex;

/// The authoritative text of the open document.
///
/// Edits are applied strictly in arrival order; the owner is responsible for
/// serializing calls (the session keeps it behind a lock).
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole buffer with `text`.
    pub fn open(&mut self, text: String) {
        self.text = text;
    }

    /// Current full text snapshot.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply `changes` in order, each resolved against the result of the previous one.
    ///
    /// The batch is all-or-nothing: if any range fails to resolve the document keeps
    /// its pre-batch text.
    pub fn apply_changes<I>(&mut self, changes: I) -> Result<(), EditError>
    where
        I: IntoIterator<Item = Edit>,
    {
        let mut text = self.text.clone();

        for change in changes {
            match change {
                Edit::Range { range, text: new_text } => {
                    let (start, end) = {
                        let index = LineIndex::new(&text);
                        let start = resolve(&index, range.start)?;
                        let end = resolve(&index, range.end)?;
                        (start, end)
                    };
                    if start > end {
                        return Err(EditError::InvertedRange {
                            start: range.start,
                            end: range.end,
                        });
                    }
                    text.replace_range(start..end, &new_text);
                }
                Edit::Full(new_text) => text = new_text,
            }
        }

        self.text = text;
        Ok(())
    }
}

fn resolve(index: &LineIndex<'_>, position: Position) -> Result<usize, EditError> {
    index
        .position_to_offset(position)
        .ok_or(EditError::PositionOutOfBounds { position })
}
