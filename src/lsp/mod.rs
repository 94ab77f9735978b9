//! LSP protocol feature implementations.
//!
//! Currently only completion: locating the partial word under the cursor and
//! turning known words into completion items.

mod completion;

pub use completion::{completion_items, prefix_at_position};
