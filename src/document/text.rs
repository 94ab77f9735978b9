//! Text utilities for position conversion.
//!
//! Provides LSP position -> byte offset conversion with proper UTF-16 handling.

use tower_lsp::lsp_types::Position;

/// Pre-computed line index over a borrowed text snapshot.
///
/// LSP positions use line/column where column is in UTF-16 code units.
/// This struct pre-computes line start offsets so each lookup only walks a single line.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
    /// Source text (needed for UTF-16 column calculation).
    source: &'a str,
}

impl<'a> LineIndex<'a> {
    /// Build a line index from source text.
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            line_starts,
            source,
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Number of lines, counting the (possibly empty) line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert an LSP position to a byte offset.
    ///
    /// A character past the end of the line clamps to the line end. A character that
    /// falls between the two code units of a surrogate pair resolves to the start of
    /// that code point. Returns None if the line is out of bounds.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;

        if line >= self.line_starts.len() {
            return None;
        }

        let line_start = self.line_starts[line];
        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|&end| end - 1) // Exclude newline
            .unwrap_or(self.source.len());

        let mut line_slice = &self.source[line_start..line_end];
        if line_end > line_start && line_end < self.source.len() {
            // Keep the `\r` of a CRLF terminator outside the line
            if let Some(stripped) = line_slice.strip_suffix('\r') {
                line_slice = stripped;
            }
        }
        let line_end = line_start + line_slice.len();

        // Walk UTF-16 code units to find byte offset
        let mut utf16_col = 0u32;
        for (i, c) in line_slice.char_indices() {
            let next = utf16_col + c.len_utf16() as u32;
            if next > position.character {
                return Some(line_start + i);
            }
            utf16_col = next;
        }

        Some(line_end)
    }
}
