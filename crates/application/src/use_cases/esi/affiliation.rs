//! Character affiliation use case

use esi_domain::{CharacterAffiliation, CharacterId, DomainError, HttpMethod, route};
use serde_json::Value;
use tracing::error;

use crate::execute_request::{ApiResult, RequestExecutor, RequestFailure};
use crate::ports::HttpClient;

/// Resolves the corporation, alliance and faction of a batch of characters.
pub struct GetAffiliation<C: HttpClient> {
    executor: RequestExecutor<C>,
}

impl<C: HttpClient> GetAffiliation<C> {
    /// Creates a new `GetAffiliation` use case.
    #[must_use]
    pub const fn new(executor: RequestExecutor<C>) -> Self {
        Self { executor }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `link` - Base link from the active settings
    /// * `ids` - Characters to look up; must not be empty
    ///
    /// # Errors
    /// Returns [`RequestFailure::Validation`] without sending anything if
    /// `ids` is empty or holds a non-positive ID, otherwise any failure of
    /// the request itself.
    pub async fn execute(
        &self,
        link: &str,
        ids: &[CharacterId],
    ) -> ApiResult<Vec<CharacterAffiliation>> {
        check_character_ids(ids)?;

        let url = route::endpoint(link, "characters/affiliation/");
        let body = Value::from(ids.iter().map(|id| id.0).collect::<Vec<_>>());
        self.executor
            .execute_json(HttpMethod::Post, &url, Some(&body))
            .await
    }
}

/// Checks a batch of IDs before anything is sent, logging a rejection once.
///
/// # Errors
/// Returns [`RequestFailure::Validation`] if `ids` is empty or holds a
/// non-positive ID.
pub fn check_character_ids(ids: &[CharacterId]) -> ApiResult<()> {
    validate(ids).inspect_err(|e| {
        error!("The function 'affiliation' requires an array of character IDs: {e}");
    })
}

fn validate(ids: &[CharacterId]) -> Result<(), RequestFailure> {
    if ids.is_empty() {
        return Err(DomainError::EmptyCharacterIds.into());
    }
    for id in ids {
        id.validate()?;
    }
    Ok(())
}
