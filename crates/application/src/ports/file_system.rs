//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// File contents are not valid UTF-8.
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstraction over the text files settings are kept in.
///
/// This trait allows swapping real disk access for an in-memory store in
/// tests.
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_file_string(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<String, FileSystemError>> + Send;

    /// Writes bytes to a file, creating it if necessary and replacing any
    /// previous contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(
        &self,
        path: &Path,
        contents: &[u8],
    ) -> impl std::future::Future<Output = Result<(), FileSystemError>> + Send;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> impl std::future::Future<Output = bool> + Send;
}
