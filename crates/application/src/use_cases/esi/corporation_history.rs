//! Corporation history use case

use esi_domain::{CharacterId, CorporationHistoryEntry, HttpMethod, route};
use tracing::error;

use crate::execute_request::{ApiResult, RequestExecutor};
use crate::ports::HttpClient;

/// Fetches the employment history of one character.
pub struct GetCorporationHistory<C: HttpClient> {
    executor: RequestExecutor<C>,
}

impl<C: HttpClient> GetCorporationHistory<C> {
    /// Creates a new `GetCorporationHistory` use case.
    #[must_use]
    pub const fn new(executor: RequestExecutor<C>) -> Self {
        Self { executor }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `link` - Base link from the active settings
    /// * `character` - Character whose history to fetch
    ///
    /// # Errors
    /// Returns [`RequestFailure::Validation`](crate::RequestFailure::Validation)
    /// without sending anything for a non-positive ID, otherwise any failure
    /// of the request itself.
    pub async fn execute(
        &self,
        link: &str,
        character: CharacterId,
    ) -> ApiResult<Vec<CorporationHistoryEntry>> {
        let character = check_character_id(character)?;

        let path = format!("characters/{character}/corporationhistory/");
        let url = route::endpoint(link, &path);
        self.executor
            .execute_json(HttpMethod::Get, &url, None)
            .await
    }
}

/// Checks a single character ID before anything is sent, logging a
/// rejection once.
///
/// # Errors
/// Returns [`RequestFailure::Validation`](crate::RequestFailure::Validation)
/// for a non-positive ID.
pub fn check_character_id(character: CharacterId) -> ApiResult<CharacterId> {
    let character = character.validate().inspect_err(|e| {
        error!("The function 'corpHistory' needs a character ID: {e}");
    })?;
    Ok(character)
}
