//! Application error types

use thiserror::Error;

use crate::execute_request::RequestFailure;
use crate::settings_store::SettingsError;

/// Application-level errors.
///
/// Settings failures abort the call; request failures carry the
/// [`RequestFailure`] value unchanged.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The settings could not be resolved.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The request failed.
    #[error(transparent)]
    Request(#[from] RequestFailure),
}

impl ApplicationError {
    /// Returns the request failure, if that is what went wrong.
    #[must_use]
    pub const fn as_request_failure(&self) -> Option<&RequestFailure> {
        match self {
            Self::Request(failure) => Some(failure),
            Self::Settings(_) => None,
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
