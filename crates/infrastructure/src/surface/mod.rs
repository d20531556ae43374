//! Display surfaces for the record table
//!
//! - `HtmlTableSurface`: escaped `<tbody>` fragment, optionally written to a file
//! - `TextTableSurface`: aligned plain-text table written to any `io::Write`
//! - `SnapshotSurface`: lock-free latest-table snapshot for concurrent readers

pub mod html;
pub mod snapshot;
pub mod text;

pub use html::HtmlTableSurface;
pub use snapshot::{SnapshotReader, SnapshotSurface};
pub use text::TextTableSurface;

use recordboard_domain::DomainError;
use std::path::Path;

/// Replaces `path` with `contents` via a sibling temp file and rename, so a
/// reader never sees a partially written table. The temp file is removed if
/// either step fails.
pub(crate) fn replace_file(path: &Path, contents: &[u8]) -> Result<(), DomainError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");

    std::fs::write(&tmp, contents)
        .and_then(|_| std::fs::rename(&tmp, path))
        .map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            DomainError::Surface(format!("{}: {}", path.display(), e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_file_fails_then_succeeds_once_dir_exists() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("out");
        let path = parent.join("records.html");

        // Act
        let missing = replace_file(&path, b"first");
        std::fs::create_dir(&parent).unwrap();
        let created = replace_file(&path, b"second");

        // Assert
        assert!(matches!(missing, Err(DomainError::Surface(_))));
        assert!(created.is_ok());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
        assert!(!parent.join("records.html.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        // Arrange: the target is a non-empty directory, so rename fails after the write
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.html");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"x").unwrap();

        // Act
        let result = replace_file(&path, b"<tbody></tbody>");

        // Assert
        assert!(matches!(result, Err(DomainError::Surface(_))));
        assert!(!dir.path().join("records.html.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
