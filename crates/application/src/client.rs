//! ESI client facade
//!
//! Binds a [`SettingsStore`] and a [`RequestExecutor`] so callers do not
//! have to thread the base link and identification headers through every
//! call. Settings are re-read on each call.

use std::sync::Arc;

use esi_domain::{
    AllianceId, CharacterAffiliation, CharacterId, CorporationHistoryEntry, Settings,
};

use crate::error::ApplicationResult;
use crate::execute_request::{RequestExecutor, default_headers};
use crate::ports::{FileSystem, HttpClient};
use crate::settings_store::SettingsStore;
use crate::use_cases::{
    GetAffiliation, GetCorporationHistory, ListAlliances, check_character_id, check_character_ids,
};

/// High-level ESI client.
pub struct EsiClient<F, C: HttpClient> {
    settings: Arc<SettingsStore<F>>,
    executor: RequestExecutor<C>,
}

impl<F: FileSystem, C: HttpClient> EsiClient<F, C> {
    /// Creates a client over a shared settings store and HTTP client.
    #[must_use]
    pub const fn new(settings: Arc<SettingsStore<F>>, client: Arc<C>) -> Self {
        Self {
            settings,
            executor: RequestExecutor::new(client),
        }
    }

    /// Returns the settings store.
    #[must_use]
    pub fn settings(&self) -> &SettingsStore<F> {
        &self.settings
    }

    /// Lists all alliance IDs.
    ///
    /// # Errors
    /// Returns an error if the settings cannot be resolved or the request fails.
    pub async fn alliances(&self) -> ApplicationResult<Vec<AllianceId>> {
        let (settings, executor) = self.prepare().await?;
        Ok(ListAlliances::new(executor).execute(&settings.link).await?)
    }

    /// Looks up the affiliation of a batch of characters.
    ///
    /// The IDs are checked before the settings are read.
    ///
    /// # Errors
    /// Returns an error if the IDs are rejected, the settings cannot be
    /// resolved, or the request fails.
    pub async fn affiliation(
        &self,
        ids: &[CharacterId],
    ) -> ApplicationResult<Vec<CharacterAffiliation>> {
        check_character_ids(ids)?;
        let (settings, executor) = self.prepare().await?;
        Ok(GetAffiliation::new(executor)
            .execute(&settings.link, ids)
            .await?)
    }

    /// Fetches the corporation history of a character.
    ///
    /// The ID is checked before the settings are read.
    ///
    /// # Errors
    /// Returns an error if the ID is rejected, the settings cannot be
    /// resolved, or the request fails.
    pub async fn corporation_history(
        &self,
        character: CharacterId,
    ) -> ApplicationResult<Vec<CorporationHistoryEntry>> {
        let character = check_character_id(character)?;
        let (settings, executor) = self.prepare().await?;
        Ok(GetCorporationHistory::new(executor)
            .execute(&settings.link, character)
            .await?)
    }

    async fn prepare(&self) -> ApplicationResult<(Settings, RequestExecutor<C>)> {
        let settings = self.settings.get_settings().await?;
        let executor = self.executor.with_headers(default_headers(&settings));
        Ok((settings, executor))
    }
}
