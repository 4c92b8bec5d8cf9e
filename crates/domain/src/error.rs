//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The release channel is not one of the allow-listed routes.
    #[error("route must be one of these: {}, got \"{route}\"", allowed.join(","))]
    InvalidRoute {
        /// The rejected route name.
        route: String,
        /// The routes that would have been accepted.
        allowed: Vec<String>,
    },

    /// A character ID is not a positive number.
    #[error("invalid character ID: {0}")]
    InvalidCharacterId(i64),

    /// A lookup was requested for an empty list of character IDs.
    #[error("character ID list must not be empty")]
    EmptyCharacterIds,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
