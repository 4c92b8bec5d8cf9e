//! Settings store
//!
//! Resolves the active client configuration and persists partial updates.
//! The project config file is the single source of truth: nothing is
//! cached, so every read goes back to storage. When the project file is
//! missing, reads fall back to the bundled default config.

use std::path::{Path, PathBuf};

use esi_domain::{DomainError, Settings, SettingsUpdate};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::ports::{FileSystem, FileSystemError};

/// Errors raised while reading or writing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// A config file does not contain well-formed settings JSON.
    #[error("Couldn't parse config file {path}: {message}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser error text.
        message: String,
    },

    /// A config file could not be read.
    #[error("Couldn't read config file {path}: {source}")]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying storage error.
        #[source]
        source: FileSystemError,
    },

    /// There is no project config file to write into.
    #[error("No project config file at {0}")]
    ConfigurationImpossible(PathBuf),

    /// The merged settings failed validation.
    #[error(transparent)]
    Invalid(#[from] DomainError),

    /// The project config file could not be written.
    #[error("Couldn't write config file {path}: {source}")]
    Write {
        /// File that failed to write.
        path: PathBuf,
        /// Underlying storage error.
        #[source]
        source: FileSystemError,
    },

    /// The settings could not be serialized.
    #[error("Couldn't serialize settings: {0}")]
    Serialization(String),
}

impl SettingsError {
    /// Returns true if the update named a route outside the allow-list.
    #[must_use]
    pub const fn is_invalid_route(&self) -> bool {
        matches!(self, Self::Invalid(DomainError::InvalidRoute { .. }))
    }
}

/// Locations consulted for settings, in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Project-level config, the only file ever written.
    pub project: PathBuf,
    /// Bundled default config, read when the project file is missing.
    pub fallback: PathBuf,
}

impl ConfigPaths {
    /// Creates a new set of config paths.
    #[must_use]
    pub fn new(project: impl Into<PathBuf>, fallback: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            fallback: fallback.into(),
        }
    }
}

/// Configuration service backed by an injected file system.
///
/// Construct one per process and share it by reference or `Arc`.
pub struct SettingsStore<F> {
    fs: F,
    paths: ConfigPaths,
    create_if_missing: bool,
    write_lock: Mutex<()>,
}

impl<F: FileSystem> SettingsStore<F> {
    /// Creates a store reading and writing the given paths.
    #[must_use]
    pub fn new(fs: F, paths: ConfigPaths) -> Self {
        Self {
            fs,
            paths,
            create_if_missing: false,
            write_lock: Mutex::new(()),
        }
    }

    /// Allows [`set_settings`](Self::set_settings) to create the project
    /// config file instead of failing when it does not exist yet.
    #[must_use]
    pub const fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Returns the active settings.
    ///
    /// Reads the project config if it exists, otherwise warns and reads the
    /// bundled default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] or [`SettingsError::Parse`] if the
    /// chosen file cannot be read or parsed.
    pub async fn get_settings(&self) -> Result<Settings, SettingsError> {
        if self.fs.exists(&self.paths.project).await {
            return self.read(&self.paths.project).await;
        }

        warn!("No project config file! Attempting to revert to default configuration...");
        self.read(&self.paths.fallback).await
    }

    /// Merges `update` over the stored settings and persists the result.
    ///
    /// Absent or empty fields keep their stored values. The resulting
    /// settings overwrite the project config file.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::ConfigurationImpossible`] if the project config is
    ///   missing and creation is not enabled
    /// - [`SettingsError::Invalid`] if the route is not allow-listed; nothing
    ///   is written
    /// - [`SettingsError::Write`] if the file cannot be written
    /// - [`SettingsError::Read`] or [`SettingsError::Parse`] if the existing
    ///   project config cannot be read or parsed
    pub async fn set_settings(&self, update: SettingsUpdate) -> Result<bool, SettingsError> {
        let _guard = self.write_lock.lock().await;

        let current = if self.fs.exists(&self.paths.project).await {
            Some(self.read(&self.paths.project).await?)
        } else if self.create_if_missing {
            debug!(path = %self.paths.project.display(), "creating project config file");
            None
        } else {
            return Err(SettingsError::ConfigurationImpossible(self.paths.project.clone()));
        };

        let settings = update.apply(current.as_ref())?;

        let new_config = serde_json::to_string_pretty(&settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        let logged = serde_json::to_string(&settings)
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;

        self.fs
            .write_file(&self.paths.project, new_config.as_bytes())
            .await
            .map_err(|source| SettingsError::Write {
                path: self.paths.project.clone(),
                source,
            })?;

        info!(config = %logged, "Successfully updated config!");
        Ok(true)
    }

    async fn read(&self, path: &Path) -> Result<Settings, SettingsError> {
        let content = self
            .fs
            .read_file_string(path)
            .await
            .map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
