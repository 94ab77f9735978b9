//! Document state management and text utilities.
//!
//! This module provides:
//! - `LineIndex` for LSP position -> byte offset conversion
//! - `Edit` and `EditError` describing incoming changes
//! - `Document`, the text of the single tracked document

mod edit;
mod state;
mod text;

pub use edit::{Edit, EditError};
pub use state::Document;
pub use text::LineIndex;
