//! List alliances use case

use esi_domain::{AllianceId, HttpMethod, route};

use crate::execute_request::{ApiResult, RequestExecutor};
use crate::ports::HttpClient;

/// Lists the IDs of every active alliance.
pub struct ListAlliances<C: HttpClient> {
    executor: RequestExecutor<C>,
}

impl<C: HttpClient> ListAlliances<C> {
    /// Creates a new `ListAlliances` use case.
    #[must_use]
    pub const fn new(executor: RequestExecutor<C>) -> Self {
        Self { executor }
    }

    /// Executes the use case.
    ///
    /// # Arguments
    /// * `link` - Base link from the active settings
    ///
    /// # Errors
    /// Returns a [`RequestFailure`](crate::RequestFailure) if the request fails.
    pub async fn execute(&self, link: &str) -> ApiResult<Vec<AllianceId>> {
        let url = route::endpoint(link, "alliances/");
        self.executor
            .execute_json(HttpMethod::Get, &url, None)
            .await
    }
}
