//! Export rendering seam and the default Markdown renderer.
//!
//! The store depends only on the [`NoteRenderer`] contract; the concrete
//! conversion capability (PDF, DOCX, whatever the platform ships) is an
//! external collaborator. [`MarkdownRenderer`] is the in-tree default so the
//! export path is usable and testable without one.

use std::fmt::Write as _;

use chrono::TimeZone;

use crate::error::{Error, Result};
use crate::models::NotesDocument;

/// External rendering capability: note document in, export bytes out.
pub trait NoteRenderer: Send + Sync {
    /// Render the document into a complete export-format byte stream.
    fn render(&self, document: &NotesDocument) -> Result<Vec<u8>>;

    /// File extension of the rendered format, without the dot
    fn extension(&self) -> &'static str;
}

/// A transient, fully-rendered export of one note document.
///
/// Owned exclusively by the caller that requested it; the store never caches
/// one across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    bytes: Vec<u8>,
    suggested_file_name: String,
}

impl ExportArtifact {
    pub(crate) fn new(bytes: Vec<u8>, suggested_file_name: String) -> Self {
        Self {
            bytes,
            suggested_file_name,
        }
    }

    /// The rendered export bytes, positioned at the start
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the artifact, yielding its bytes
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Deterministic default file name for save/share flows
    #[must_use]
    pub fn suggested_file_name(&self) -> &str {
        &self.suggested_file_name
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Build a deterministic default file name for export flows.
#[must_use]
pub fn suggested_export_file_name(document_id: &str, extension: &str) -> String {
    format!("{document_id}-notes.{extension}")
}

/// Renders a note document as Markdown: title fragment as a heading, every
/// later fragment as a timestamped paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn format_timestamp(timestamp_ms: i64) -> String {
        chrono::Utc
            .timestamp_millis_opt(timestamp_ms)
            .single()
            .map_or_else(|| timestamp_ms.to_string(), |dt| dt.to_rfc3339())
    }
}

impl NoteRenderer for MarkdownRenderer {
    fn render(&self, document: &NotesDocument) -> Result<Vec<u8>> {
        let mut output = String::new();

        let mut fragments = document.fragments.iter();
        let title = fragments.next().ok_or_else(|| {
            Error::Render(format!(
                "document '{}' has no title fragment",
                document.document_id
            ))
        })?;

        let _ = writeln!(output, "# {}", title.text);

        for fragment in fragments {
            let _ = writeln!(output);
            let _ = writeln!(output, "> {}", Self::format_timestamp(fragment.created_at));
            let _ = writeln!(output);
            output.push_str(&fragment.text);
            output.push('\n');
        }

        Ok(output.into_bytes())
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_as_heading() {
        let doc = NotesDocument::new("thesis");
        let bytes = MarkdownRenderer.render(&doc).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("# Notes for: thesis"));
    }

    #[test]
    fn renders_fragments_in_order_with_timestamps() {
        let mut doc = NotesDocument::new("thesis");
        doc.append("first highlight");
        doc.append("second highlight");

        let bytes = MarkdownRenderer.render(&doc).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let first = text.find("first highlight").unwrap();
        let second = text.find("second highlight").unwrap();
        assert!(first < second);
        assert!(text.contains("> "));
    }

    #[test]
    fn rejects_document_without_title() {
        let doc = NotesDocument {
            document_id: "broken".to_string(),
            created_at: 0,
            fragments: Vec::new(),
        };

        let err = MarkdownRenderer.render(&doc).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn artifact_exposes_bytes_and_name() {
        let artifact = ExportArtifact::new(b"content".to_vec(), "thesis-notes.md".to_string());
        assert_eq!(artifact.as_bytes(), b"content");
        assert_eq!(artifact.len(), 7);
        assert!(!artifact.is_empty());
        assert_eq!(artifact.suggested_file_name(), "thesis-notes.md");
        assert_eq!(artifact.into_bytes(), b"content".to_vec());
    }

    #[test]
    fn suggested_file_name_is_deterministic() {
        assert_eq!(
            suggested_export_file_name("thesis", "md"),
            "thesis-notes.md"
        );
    }
}
