//! Settings infrastructure for wordlsp.
//!
//! Loads an optional `wordlsp.toml` from the workspace to adjust the capabilities
//! the server advertises.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tower_lsp::lsp_types::TextDocumentSyncKind;
use tracing::warn;

/// Name of the settings file looked up in the workspace.
pub const SETTINGS_FILE: &str = "wordlsp.toml";

/// Root settings structure loaded from wordlsp.toml.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Document synchronization configuration.
    pub document: Option<DocumentSettings>,

    /// Completion configuration.
    pub completion: Option<CompletionSettings>,
}

/// How the client should send document changes.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentSettings {
    /// "incremental" (default) or "full".
    pub sync: Option<SyncMode>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    Full,
    #[default]
    Incremental,
}

impl From<SyncMode> for TextDocumentSyncKind {
    fn from(mode: SyncMode) -> Self {
        match mode {
            SyncMode::Full => TextDocumentSyncKind::FULL,
            SyncMode::Incremental => TextDocumentSyncKind::INCREMENTAL,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionSettings {
    /// Characters that make the client request completion on their own.
    pub trigger_characters: Option<Vec<String>>,
}

impl Settings {
    /// Document sync mode, defaulting to incremental.
    pub fn sync_mode(&self) -> SyncMode {
        self.document
            .as_ref()
            .and_then(|d| d.sync)
            .unwrap_or_default()
    }

    /// Configured trigger characters, if any.
    pub fn trigger_characters(&self) -> Option<Vec<String>> {
        self.completion
            .as_ref()
            .and_then(|c| c.trigger_characters.clone())
            .filter(|chars| !chars.is_empty())
    }
}

/// Load settings from a wordlsp.toml file.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "failed to parse {}: {}", SETTINGS_FILE, e);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    }
}

/// Discover wordlsp.toml by walking up the directory tree from `start_dir`.
///
/// Returns `(settings, settings_dir)` where `settings_dir` is the directory
/// containing the found file. If not found, returns `(Settings::default(), start_dir)`.
pub fn discover_settings(start_dir: &Path) -> (Settings, PathBuf) {
    let mut current = Some(start_dir);
    while let Some(dir) = current {
        let candidate = dir.join(SETTINGS_FILE);
        if candidate.is_file() {
            return (load_settings(&candidate), dir.to_path_buf());
        }
        current = dir.parent();
    }

    (Settings::default(), start_dir.to_path_buf())
}
