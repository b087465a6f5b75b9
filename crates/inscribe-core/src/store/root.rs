//! Storage root bootstrap.

use std::path::Path;

/// Create the notes root directory if it is missing.
///
/// Idempotent and safe to call concurrently; `create_dir_all` succeeds when
/// the directory already exists. Callers decide whether a failure is fatal —
/// the store logs it and lets later operations fail with path-not-found.
pub fn ensure_root_exists(root: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_root() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("inscribe").join("notes");

        ensure_root_exists(&root).unwrap();
        assert!(root.is_dir());
    }

    #[test]
    fn is_idempotent() {
        let tmp = tempdir().unwrap();
        let root = tmp.path().join("notes");

        ensure_root_exists(&root).unwrap();
        ensure_root_exists(&root).unwrap();
        assert!(root.is_dir());
    }
}
