//! Note document model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a note fragment, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FragmentId(Uuid);

impl FragmentId {
    /// Create a new unique fragment ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for FragmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FragmentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One appended unit of note text (a single user highlight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Unique identifier
    pub id: FragmentId,
    /// Plain text content
    pub text: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Fragment {
    /// Create a new fragment with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: FragmentId::new(),
            text: text.into(),
            created_at: crate::util::unix_timestamp_now_ms(),
        }
    }
}

/// The durable note document for one source document.
///
/// Fragments are append-only and keep insertion order; the first fragment is
/// always the title seeded at creation and is never duplicated on later opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesDocument {
    /// Stable, human-chosen identifier (the source document's base name)
    pub document_id: String,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
    /// Appended fragments in insertion order, title first
    pub fragments: Vec<Fragment>,
}

impl NotesDocument {
    /// Create a new document seeded with its title fragment
    #[must_use]
    pub fn new(document_id: impl Into<String>) -> Self {
        let document_id = document_id.into();
        let title = Fragment::new(Self::title_text(&document_id));
        Self {
            document_id,
            created_at: crate::util::unix_timestamp_now_ms(),
            fragments: vec![title],
        }
    }

    /// The fixed title text seeded exactly once at creation
    #[must_use]
    pub fn title_text(document_id: &str) -> String {
        format!("Notes for: {document_id}")
    }

    /// Append a fragment to the end of the document, returning its ID
    pub fn append(&mut self, text: impl Into<String>) -> FragmentId {
        let fragment = Fragment::new(text);
        let id = fragment.id;
        self.fragments.push(fragment);
        id
    }

    /// Whether the document holds real content beyond the seeded title.
    ///
    /// This is the exact emptiness check used by export preconditions, in
    /// place of a byte-size heuristic on the persisted file.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.fragments.len() > 1
    }

    /// Number of fragments, title included
    #[must_use]
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fragment_id_unique() {
        let id1 = FragmentId::new();
        let id2 = FragmentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn fragment_id_parse_round_trips() {
        let id = FragmentId::new();
        let parsed: FragmentId = id.as_str().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn new_document_seeds_title_only() {
        let doc = NotesDocument::new("thesis");
        assert_eq!(doc.fragment_count(), 1);
        assert_eq!(doc.fragments[0].text, "Notes for: thesis");
        assert!(!doc.has_content());
    }

    #[test]
    fn append_preserves_order() {
        let mut doc = NotesDocument::new("thesis");
        doc.append("first highlight");
        doc.append("second highlight");

        assert_eq!(doc.fragment_count(), 3);
        assert_eq!(doc.fragments[1].text, "first highlight");
        assert_eq!(doc.fragments[2].text, "second highlight");
        assert!(doc.has_content());
    }

    #[test]
    fn serde_round_trip_keeps_fragments() {
        let mut doc = NotesDocument::new("thesis");
        doc.append("a highlight");

        let json = serde_json::to_string(&doc).unwrap();
        let restored: NotesDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, restored);
    }

    #[test]
    fn fragments_are_timestamped() {
        let fragment = Fragment::new("hello");
        assert!(fragment.created_at > 0);
    }
}
