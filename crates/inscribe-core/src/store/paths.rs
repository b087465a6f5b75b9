//! Document identifier to storage path resolution.
//!
//! Pure and deterministic: the same identifier always resolves to the same
//! file, so concurrent callers addressing one logical document contend on one
//! path.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};

/// Suffix appended to every sanitized identifier before the extension.
pub const NOTE_FILE_SUFFIX: &str = "_notes";

/// Extension of the persisted note document format.
pub const NOTE_FILE_EXTENSION: &str = "json";

/// Sanitize a document identifier into a filesystem-safe file stem.
///
/// Characters illegal in file names on any supported platform (path
/// separators included) are replaced with `_`, so a hostile identifier can
/// never climb out of the storage root. An identifier that collapses to
/// nothing usable is rejected.
pub fn sanitize_document_id(document_id: &str) -> Result<String> {
    let re = Regex::new(r#"[<>:"/\\|?*\x00-\x1f]"#).expect("Invalid regex");
    let sanitized = re.replace_all(document_id.trim(), "_").into_owned();

    // A stem of only underscores and dots carries no identity and would
    // collide across unrelated hostile inputs ("..", "///", ...).
    if sanitized.chars().all(|c| c == '_' || c == '.') {
        return Err(Error::InvalidDocumentId(format!(
            "'{document_id}' contains no usable file name characters"
        )));
    }

    Ok(sanitized)
}

/// Resolve the note file path for a document identifier under the given root.
pub fn note_file_path(root: &Path, document_id: &str) -> Result<PathBuf> {
    let stem = sanitize_document_id(document_id)?;
    Ok(root.join(format!("{stem}{NOTE_FILE_SUFFIX}.{NOTE_FILE_EXTENSION}")))
}

/// Sibling temporary path used during atomic persistence.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sanitize_keeps_plain_names() {
        assert_eq!(sanitize_document_id("my-thesis").unwrap(), "my-thesis");
        assert_eq!(sanitize_document_id("Chapter 4").unwrap(), "Chapter 4");
    }

    #[test]
    fn sanitize_replaces_illegal_characters() {
        assert_eq!(sanitize_document_id("a/b\\c:d").unwrap(), "a_b_c_d");
        assert_eq!(sanitize_document_id("q?u*o\"te").unwrap(), "q_u_o_te");
    }

    #[test]
    fn sanitize_rejects_collapsed_ids() {
        assert!(matches!(
            sanitize_document_id("///"),
            Err(Error::InvalidDocumentId(_))
        ));
        assert!(matches!(
            sanitize_document_id(".."),
            Err(Error::InvalidDocumentId(_))
        ));
        assert!(matches!(
            sanitize_document_id("  "),
            Err(Error::InvalidDocumentId(_))
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let root = Path::new("/notes");
        let a = note_file_path(root, "thesis").unwrap();
        let b = note_file_path(root, "thesis").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, PathBuf::from("/notes/thesis_notes.json"));
    }

    #[test]
    fn traversal_ids_stay_under_root() {
        let root = Path::new("/notes");
        let path = note_file_path(root, "../../etc/passwd").unwrap();
        assert!(path.starts_with(root));
        assert_eq!(path, PathBuf::from("/notes/.._.._etc_passwd_notes.json"));
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let path = Path::new("/notes/thesis_notes.json");
        assert_eq!(temp_path(path), PathBuf::from("/notes/thesis_notes.json.tmp"));
    }
}
