//! ESI Domain - Core types
//!
//! This crate defines the domain model for the ESI client.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod models;
pub mod request;
pub mod route;
pub mod settings;

pub use error::{DomainError, DomainResult};
pub use models::{
    AllianceId, CharacterAffiliation, CharacterId, CorporationHistoryEntry, CorporationId,
    FactionId,
};
pub use request::{HttpMethod, HttpRequest, HttpResponse};
pub use settings::{DEFAULT_LANGUAGE, Settings, SettingsUpdate, default_project_name};
