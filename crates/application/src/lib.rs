//! ESI Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for storage and HTTP transport)
//! - The settings store and request executor
//! - Endpoint use cases and the client facade
//! - Application-level error handling

pub mod client;
pub mod error;
pub mod execute_request;
pub mod ports;
pub mod settings_store;
pub mod sleep;
pub mod use_cases;

#[cfg(test)]
#[allow(clippy::expect_used)]
mod test_support;

pub use client::EsiClient;
pub use error::{ApplicationError, ApplicationResult};
pub use execute_request::{ApiResult, RequestExecutor, RequestFailure, default_headers};
pub use ports::{FileSystem, FileSystemError, HttpClient, HttpClientError};
pub use settings_store::{ConfigPaths, SettingsError, SettingsStore};
pub use sleep::sleep;
pub use use_cases::{GetAffiliation, GetCorporationHistory, ListAlliances};
