//! Plain file read/write helpers.
//!
//! Single whole-file operations with no policy: no directory auto-creation,
//! no partial-write recovery. Failures propagate verbatim.

use std::fs;
use std::path::Path;

use crate::error::{DocdexError, Result};

/// Read the full content of `path` as text.
pub fn open_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DocdexError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write (or overwrite) the full content of `path`.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| DocdexError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_open_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");

        write_file(&path, "hello docs\n").unwrap();
        let first = open_file(&path).unwrap();
        write_file(&path, &first).unwrap();
        let second = open_file(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, "hello docs\n");
    }

    #[test]
    fn test_open_missing_file_propagates_read_error() {
        let dir = TempDir::new().unwrap();
        let err = open_file(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, DocdexError::FileRead { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_propagates_write_error() {
        let dir = TempDir::new().unwrap();
        let err = write_file(&dir.path().join("no_such_dir").join("x.txt"), "x").unwrap_err();
        assert!(matches!(err, DocdexError::FileWrite { .. }));
    }
}
