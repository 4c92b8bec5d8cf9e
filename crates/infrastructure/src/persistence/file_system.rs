//! Real file system implementation.

use std::io::ErrorKind;
use std::path::Path;

use esi_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> FileSystemError {
    match e.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        ErrorKind::InvalidData => FileSystemError::InvalidUtf8(path.to_path_buf()),
        _ => FileSystemError::Io(e),
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| map_io_error(parent, e))?;
        }
        fs::write(path, contents)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.is_file())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("nested").join("esi.json");
        let fs = TokioFileSystem::new();

        assert!(!fs.exists(&path).await);
        fs.write_file(&path, b"{}").await.unwrap();
        assert!(fs.exists(&path).await);
        assert_eq!(fs.read_file_string(&path).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("esi.json");
        let fs = TokioFileSystem::new();

        fs.write_file(&path, b"first, and longer").await.unwrap();
        fs.write_file(&path, b"second").await.unwrap();
        assert_eq!(fs.read_file_string(&path).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("missing.json");

        let err = TokioFileSystem::new()
            .read_file_string(&path)
            .await
            .unwrap_err();
        assert!(matches!(err, FileSystemError::NotFound(p) if p == path));
    }

    #[tokio::test]
    async fn test_directory_does_not_count_as_config_file() {
        let dir = tempdir().expect("Failed to create temp directory");
        assert!(!TokioFileSystem::new().exists(dir.path()).await);
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("binary.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = TokioFileSystem::new()
            .read_file_string(&path)
            .await
            .unwrap_err();
        assert!(matches!(err, FileSystemError::InvalidUtf8(_)));
    }
}
