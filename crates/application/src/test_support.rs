//! In-memory port implementations shared by the unit tests.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use esi_domain::{HttpRequest, HttpResponse};

use crate::ports::{FileSystem, FileSystemError, HttpClient, HttpClientError};

/// File system backed by a map of path to contents.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    vanishing: Vec<PathBuf>,
    fail_writes: bool,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn files(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files.lock().expect("Lock poisoned")
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files().insert(path.into(), contents.into());
        self
    }

    /// Reports `path` as existing while every read of it fails.
    pub fn with_vanishing_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vanishing.push(path.into());
        self
    }

    pub const fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files().get(path).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        self.contents(path)
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if self.fail_writes {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        let text = String::from_utf8(contents.to_vec())
            .map_err(|_| FileSystemError::InvalidUtf8(path.to_path_buf()))?;
        self.files().insert(path.to_path_buf(), text);
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        self.vanishing.iter().any(|p| p == path) || self.files().contains_key(path)
    }
}

/// HTTP client that replays queued outcomes and records every request.
#[derive(Default)]
pub struct ScriptedHttpClient {
    outcomes: Mutex<VecDeque<Result<HttpResponse, HttpClientError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, outcome: Result<HttpResponse, HttpClientError>) -> Self {
        self.outcomes
            .lock()
            .expect("Lock poisoned")
            .push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("Lock poisoned").clone()
    }
}

impl HttpClient for ScriptedHttpClient {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpClientError> {
        self.requests
            .lock()
            .expect("Lock poisoned")
            .push(request.clone());
        self.outcomes
            .lock()
            .expect("Lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpClientError::Other("no scripted response".to_string())))
    }
}
