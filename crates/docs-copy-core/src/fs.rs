use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{CopyError, CopyResult};

/// Reads the whole document; non-UTF-8 content is reported as a read error.
pub fn read_document(path: &Path) -> CopyResult<String> {
    fs::read_to_string(path).map_err(|source| CopyError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates every missing parent directory, then replaces `path` with `content`.
pub fn write_document(path: &Path, content: &str) -> CopyResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CopyError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source: io::Error| CopyError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("api-reference/sdk/go/api-reference.mdx");

        write_document(&file_path, "hello").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "hello");
    }

    #[test]
    fn overwrites_without_backup() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("page.mdx");
        fs::write(&file_path, "a much longer previous version").unwrap();

        write_document(&file_path, "updated").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "updated");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("fishaudio.md");
        fs::write(&file_path, b"f\xff\xfe").unwrap();

        let err = read_document(&file_path).unwrap_err();

        assert!(matches!(err, CopyError::Read { .. }));
    }
}
