//! ESI payload types for the supported endpoints.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// EVE character identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub i64);

impl CharacterId {
    /// Checks that the identifier is a positive number.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCharacterId`] for zero or negative IDs.
    pub const fn validate(self) -> DomainResult<Self> {
        if self.0 > 0 {
            Ok(self)
        } else {
            Err(DomainError::InvalidCharacterId(self.0))
        }
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Alliance identifier as returned by the alliance listing.
pub type AllianceId = i64;

/// Corporation identifier.
pub type CorporationId = i64;

/// Faction identifier.
pub type FactionId = i64;

/// Affiliation of a single character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAffiliation {
    /// The character the affiliation describes.
    pub character_id: CharacterId,
    /// Current corporation.
    pub corporation_id: CorporationId,
    /// Current alliance, if the corporation is in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alliance_id: Option<AllianceId>,
    /// Faction warfare faction, if enlisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_id: Option<FactionId>,
}

/// One entry of a character's employment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporationHistoryEntry {
    /// Corporation the character joined.
    pub corporation_id: CorporationId,
    /// Whether the corporation has since been closed.
    #[serde(default)]
    pub is_deleted: bool,
    /// Monotonic record identifier, higher is more recent.
    pub record_id: i64,
    /// When the character joined.
    pub start_date: DateTime<Utc>,
}
