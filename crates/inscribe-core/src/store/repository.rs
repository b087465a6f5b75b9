//! Per-document load / init / append / persist.
//!
//! The repository owns the on-disk representation of a single note document:
//! JSON at `{root}/{sanitized}_notes.json`, rewritten in full on every
//! mutation through a sibling temp file and an atomic rename. It reports
//! failures as errors; the soft-fail policy for append lives in the store
//! layer, not here.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::NotesDocument;
use crate::store::paths;

/// Filesystem-backed repository for note documents under one root.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    root: PathBuf,
}

impl NoteRepository {
    /// Create a repository rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The storage root this repository persists under
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the note file path for a document identifier
    pub fn resolve(&self, document_id: &str) -> Result<PathBuf> {
        paths::note_file_path(&self.root, document_id)
    }

    /// Whether a note document exists for the identifier
    pub fn exists(&self, document_id: &str) -> Result<bool> {
        Ok(self.resolve(document_id)?.is_file())
    }

    /// Load an existing note document fully into memory
    pub fn load(&self, document_id: &str) -> Result<NotesDocument> {
        let path = self.resolve(document_id)?;
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load the document, creating it seeded with its title fragment if absent.
    ///
    /// First creation writes directly to the final path; the title fragment is
    /// seeded exactly once and never duplicated on later opens.
    pub fn load_or_init(&self, document_id: &str) -> Result<NotesDocument> {
        let path = self.resolve(document_id)?;
        if path.is_file() {
            return self.load(document_id);
        }

        tracing::info!("Creating new notes file for '{document_id}'");
        let document = NotesDocument::new(document_id);
        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(&path, json)?;
        Ok(document)
    }

    /// Append one fragment and persist, returning the updated document.
    pub fn append(&self, document_id: &str, text: &str) -> Result<NotesDocument> {
        let mut document = self.load_or_init(document_id)?;
        document.append(text);
        self.persist(&document)?;
        Ok(document)
    }

    /// Persist the full document via write-temp-then-rename.
    ///
    /// The document is serialized to `{path}.tmp` and renamed over the
    /// destination. `std::fs::rename` replaces the target atomically on POSIX
    /// and as a replace-allowed move on Windows, so a reader (or a crash)
    /// never observes a partial or absent document. A dangling temp file from
    /// a failed attempt is removed best-effort.
    pub fn persist(&self, document: &NotesDocument) -> Result<()> {
        let path = self.resolve(&document.document_id)?;
        let tmp = paths::temp_path(&path);

        let result = serde_json::to_string_pretty(document)
            .map_err(crate::Error::from)
            .and_then(|json| {
                std::fs::write(&tmp, json)?;
                std::fs::rename(&tmp, &path)?;
                Ok(())
            });

        if result.is_err() && tmp.exists() {
            let _ = std::fs::remove_file(&tmp);
        }
        result
    }
}
