//! Word completion language server.
//!
//! Tracks a single open document, indexes every word it has ever contained and
//! completes the word under the cursor from that index.

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};
use tracing::{debug, info, warn};

mod document;
mod logging;
mod lsp;
mod session;
pub(crate) mod settings;
mod words;

pub use document::{Document, Edit, EditError, LineIndex};
pub use logging::init_logging;
pub use lsp::{completion_items, prefix_at_position};
pub use session::Session;
pub use settings::{discover_settings, load_settings, Settings, SyncMode};
pub use words::{extract_words, is_word_char, WordIndex};

/// Name reported to the client in `serverInfo`.
pub const SERVER_NAME: &str = "wordlsp";

pub struct Backend {
    client: Client,
    session: Session,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            session: Session::new(),
        }
    }

    /// Capabilities advertised in the initialize response.
    fn capabilities(settings: &Settings) -> ServerCapabilities {
        ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(
                settings.sync_mode().into(),
            )),
            completion_provider: Some(CompletionOptions {
                trigger_characters: settings.trigger_characters(),
                resolve_provider: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        let settings = match workspace_root {
            Some(root) => {
                let (settings, settings_dir) = settings::discover_settings(&root);
                debug!(dir = %settings_dir.display(), ?settings, "loaded settings");
                settings
            }
            None => Settings::default(),
        };

        info!("initialize");
        Ok(InitializeResult {
            capabilities: Self::capabilities(&settings),
            server_info: Some(ServerInfo {
                name: SERVER_NAME.to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "wordlsp initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("shutdown");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!(uri = %params.text_document.uri, "didOpen");
        self.session.open_document(params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;
        let edits = params.content_changes.into_iter().map(Edit::from);
        if let Err(e) = self.session.change_document(edits) {
            warn!(%uri, version = params.text_document.version, "rejected change: {}", e);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        // Known words outlive the document
        debug!(uri = %params.text_document.uri, "didClose");
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let position = params.text_document_position.position;
        let words = self.session.complete(position);
        Ok(Some(CompletionResponse::Array(lsp::completion_items(
            words,
        ))))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
