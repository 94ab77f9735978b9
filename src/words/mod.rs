//! Word extraction and the index of known words.

mod extract;
mod index;

pub use extract::{extract_words, is_word_char};
pub use index::WordIndex;
