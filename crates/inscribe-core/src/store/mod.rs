//! The note store: one gate, one repository, one renderer.
//!
//! [`NoteStore`] is the only surface the presentation layer talks to. Every
//! append and export, for every document identifier, serializes through a
//! single async mutex; the trade is throughput for simplicity, which is the
//! right trade for one interactive user. Clones are cheap and share the gate.

mod paths;
mod repository;
mod root;

pub use paths::{
    note_file_path, sanitize_document_id, NOTE_FILE_EXTENSION, NOTE_FILE_SUFFIX,
};
pub use repository::NoteRepository;
pub use root::ensure_root_exists;

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::events::LogEvent;
use crate::export::{suggested_export_file_name, ExportArtifact, MarkdownRenderer, NoteRenderer};
use crate::util::{log_preview, normalize_text};

/// Thread-safe store for appending highlights and preparing exports.
#[derive(Clone)]
pub struct NoteStore {
    repository: NoteRepository,
    gate: Arc<Mutex<()>>,
    renderer: Arc<dyn NoteRenderer>,
    log_tx: Option<UnboundedSender<LogEvent>>,
}

impl NoteStore {
    /// Create a store persisting under the given root, rendering Markdown.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            repository: NoteRepository::new(root.as_ref()),
            gate: Arc::new(Mutex::new(())),
            renderer: Arc::new(MarkdownRenderer),
            log_tx: None,
        }
    }

    /// Replace the rendering capability used by [`Self::prepare_export`]
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn NoteRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Attach the log side channel consumed by the presentation layer.
    ///
    /// Sends are fire-and-forget; a dropped receiver is ignored.
    #[must_use]
    pub fn with_log_sink(mut self, log_tx: UnboundedSender<LogEvent>) -> Self {
        self.log_tx = Some(log_tx);
        self
    }

    /// The storage root this store persists under
    pub fn root(&self) -> &Path {
        self.repository.root()
    }

    /// Create the storage root if missing. Idempotent, runs outside the gate.
    ///
    /// Failure is logged and swallowed; operations that need the root will
    /// then fail individually with IO errors.
    pub fn ensure_root_exists(&self) {
        if let Err(error) = root::ensure_root_exists(self.repository.root()) {
            self.log(LogEvent::error(format!(
                "Could not create notes directory: {error}"
            )));
        }
    }

    /// Append one highlight to the note document for `document_id`.
    ///
    /// Never returns an error: blank input is a logged no-op, and IO failures
    /// are recovered locally and reported only through the log channel.
    pub async fn append_highlight(&self, text: &str, document_id: &str) {
        let (Some(text), Some(document_id)) = (normalize_text(text), normalize_text(document_id))
        else {
            self.log(LogEvent::warning(
                "append_highlight called with empty text or document id",
            ));
            return;
        };

        self.log(LogEvent::info(format!(
            "Requesting lock for '{document_id}'..."
        )));
        let _guard = self.gate.lock().await;
        self.log(LogEvent::info(format!(
            "Lock acquired for '{document_id}'. Saving '{}'...",
            log_preview(text)
        )));

        match self.repository.append(document_id, text) {
            Ok(document) => {
                self.log(LogEvent::info(format!(
                    "Save complete for '{document_id}'. {} fragments.",
                    document.fragment_count()
                )));
            }
            Err(error) => {
                self.log(LogEvent::error(format!(
                    "Failed to save highlight for '{document_id}': {error}"
                )));
            }
        }
        // guard drops here: the gate is released on every path
    }

    /// Render the current note document for `document_id` into an artifact.
    ///
    /// Unlike append, failures propagate: the caller presents them to the
    /// user. The gate guard drops before any error reaches the caller.
    pub async fn prepare_export(&self, document_id: &str) -> Result<ExportArtifact> {
        let Some(document_id) = normalize_text(document_id) else {
            return Err(Error::InvalidArgument(
                "export requested with an empty document id".to_string(),
            ));
        };
        let stem = sanitize_document_id(document_id)?;

        let _guard = self.gate.lock().await;

        if !self.repository.exists(document_id)? {
            self.log(LogEvent::warning(format!(
                "Export requested for '{document_id}' but no notes exist yet"
            )));
            return Err(Error::NotFound(document_id.to_string()));
        }

        let document = self.repository.load(document_id)?;
        if !document.has_content() {
            self.log(LogEvent::warning(format!(
                "Export requested for '{document_id}' but it has no highlights yet"
            )));
            return Err(Error::EmptyDocument(document_id.to_string()));
        }

        let bytes = self.renderer.render(&document).inspect_err(|error| {
            self.log(LogEvent::error(format!(
                "Rendering failed for '{document_id}': {error}"
            )));
        })?;

        self.log(LogEvent::info(format!(
            "Export ready for '{document_id}' ({} bytes)",
            bytes.len()
        )));
        Ok(ExportArtifact::new(
            bytes,
            suggested_export_file_name(&stem, self.renderer.extension()),
        ))
    }

    fn log(&self, event: LogEvent) {
        match event.level {
            crate::events::LogLevel::Info => tracing::info!("{}", event.message),
            crate::events::LogLevel::Warning => tracing::warn!("{}", event.message),
            crate::events::LogLevel::Error => tracing::error!("{}", event.message),
        }
        if let Some(tx) = &self.log_tx {
            let _ = tx.send(event);
        }
    }
}
