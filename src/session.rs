//! The session ties the tracked document to the word index.

use parking_lot::RwLock;
use tower_lsp::lsp_types::Position;
use tracing::debug;

use crate::document::{Document, Edit, EditError};
use crate::lsp::prefix_at_position;
use crate::words::{extract_words, WordIndex};

/// Shared state for one editor session: a single document and every word seen in it.
///
/// The document lock is always taken before the index lock, never the other way
/// around.
#[derive(Debug, Default)]
pub struct Session {
    document: RwLock<Document>,
    words: WordIndex,
}

impl Session {
    /// Create a session with an empty document and an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document with `text` and index all of its words.
    pub fn open_document(&self, text: String) {
        let mut document = self.document.write();
        document.open(text);
        self.index_words(document.text());
    }

    /// Apply `edits` in order, then re-index the whole resulting text.
    ///
    /// On error the document is left as it was and nothing is indexed.
    pub fn change_document<I>(&self, edits: I) -> Result<(), EditError>
    where
        I: IntoIterator<Item = Edit>,
    {
        let mut document = self.document.write();
        document.apply_changes(edits)?;
        // The whole text is re-scanned on every change, not just the edited region.
        self.index_words(document.text());
        Ok(())
    }

    /// Known words completing the partial word before `position`.
    ///
    /// A position on a line that does not exist yields no completions.
    pub fn complete(&self, position: Position) -> Vec<String> {
        let prefix = {
            let document = self.document.read();
            match prefix_at_position(document.text(), position) {
                Some(prefix) => prefix.to_owned(),
                None => {
                    debug!(?position, "completion requested past the end of the document");
                    return Vec::new();
                }
            }
        };
        let words = self.words.query(&prefix);
        debug!(prefix = %prefix, matches = words.len(), "completion");
        words
    }

    /// Snapshot of the current document text.
    pub fn text(&self) -> String {
        self.document.read().text().to_owned()
    }

    /// The index of known words.
    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    fn index_words(&self, text: &str) {
        let added = self.words.insert(extract_words(text));
        debug!(added, total = self.words.len(), "indexed words");
    }
}
