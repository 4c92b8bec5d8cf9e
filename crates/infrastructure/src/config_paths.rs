//! Config file locations.
//!
//! The project config lives in the working directory unless overridden by
//! an explicit path or `ESI_CONFIG_PATH`. The bundled default ships with this crate and its
//! absolute path is fixed at compile time.

use std::path::{Path, PathBuf};

use esi_application::ConfigPaths;

/// File name of the project-level config.
pub const PROJECT_CONFIG_FILE: &str = "esi.json";

/// Environment variable overriding the project config path.
pub const CONFIG_PATH_ENV: &str = "ESI_CONFIG_PATH";

/// Path to the bundled default config.
#[must_use]
pub fn bundled_default_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/esi.default.json"))
}

/// Project config in the current directory plus the bundled default.
#[must_use]
pub fn default_config_paths() -> ConfigPaths {
    ConfigPaths::new(PROJECT_CONFIG_FILE, bundled_default_path())
}

/// Like [`default_config_paths`], with the project config taken from
/// `explicit` or else from `ESI_CONFIG_PATH` when either is set.
#[must_use]
pub fn resolve_config_paths(explicit: Option<PathBuf>) -> ConfigPaths {
    let from_env = || std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    config_paths_with_override(explicit.or_else(from_env))
}

fn project_config_paths(project: PathBuf) -> ConfigPaths {
    ConfigPaths::new(project, bundled_default_path())
}

fn config_paths_with_override(project: Option<PathBuf>) -> ConfigPaths {
    project
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(default_config_paths, project_config_paths)
}
