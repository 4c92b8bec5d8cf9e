//! ESI Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the config file locations
//! and the bundled default config.

pub mod adapters;
pub mod config_paths;
pub mod persistence;

pub use adapters::ReqwestHttpClient;
pub use config_paths::{
    CONFIG_PATH_ENV, PROJECT_CONFIG_FILE, bundled_default_path, default_config_paths,
    resolve_config_paths,
};
pub use persistence::TokioFileSystem;
