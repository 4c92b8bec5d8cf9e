//! Request execution
//!
//! Every API call goes through [`RequestExecutor`]: one request, success
//! payload unwrapped, failures classified, logged once and returned as a
//! [`RequestFailure`] value instead of being raised.

use std::sync::Arc;

use esi_domain::{DomainError, HttpMethod, HttpRequest, HttpResponse, Settings};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::ports::{HttpClient, HttpClientError};

/// Result type shared by every request-performing operation.
pub type ApiResult<T> = Result<T, RequestFailure>;

/// Why a request produced no usable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    /// ESI answered with a structured `{"error": ...}` body.
    #[error("ESI error ({status}): {error}")]
    Esi {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body.
        error: String,
    },

    /// No response was received.
    #[error("transport error: {cause}")]
    Transport {
        /// Underlying transport failure.
        cause: HttpClientError,
    },

    /// A failure response without the structured error shape.
    #[error("unexpected response ({status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code.
        status: u16,
        /// Response body as text.
        body: String,
    },

    /// A success response whose payload could not be decoded.
    #[error("invalid response payload: {message}")]
    Decode {
        /// Decoder error text.
        message: String,
    },

    /// The input was rejected before any request was made.
    #[error("invalid input: {0}")]
    Validation(#[from] DomainError),
}

impl RequestFailure {
    /// Returns the short message callers report to users.
    ///
    /// For ESI errors this is the remote `error` text itself.
    #[must_use]
    pub fn error_message(&self) -> String {
        match self {
            Self::Esi { error, .. } => error.clone(),
            Self::Transport { .. } => "transport error".to_string(),
            Self::UnexpectedResponse { .. } => "unexpected response".to_string(),
            Self::Decode { .. } => "invalid response payload".to_string(),
            Self::Validation(e) => e.to_string(),
        }
    }

    /// Returns the HTTP status if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Esi { status, .. } | Self::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Headers identifying the caller, derived from the active settings.
#[must_use]
pub fn default_headers(settings: &Settings) -> Vec<(String, String)> {
    let mut headers = vec![
        ("X-User-Agent".to_string(), settings.project_name.clone()),
        ("Accept-Language".to_string(), settings.language.clone()),
    ];
    if let Some(token) = settings.auth_token.as_deref().filter(|t| !t.is_empty()) {
        headers.push(("Authorization".to_string(), format!("Bearer {token}")));
    }
    headers
}

/// Shared execution pattern for API calls.
///
/// Holds no mutable state; concurrent calls are independent.
pub struct RequestExecutor<C: HttpClient> {
    client: Arc<C>,
    headers: Vec<(String, String)>,
}

impl<C: HttpClient> Clone for RequestExecutor<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            headers: self.headers.clone(),
        }
    }
}

impl<C: HttpClient> RequestExecutor<C> {
    /// Creates an executor over the given HTTP client.
    #[must_use]
    pub const fn new(client: Arc<C>) -> Self {
        Self {
            client,
            headers: Vec::new(),
        }
    }

    /// Returns an executor sharing the same client that sends `headers`
    /// with every request.
    #[must_use]
    pub fn with_headers(&self, headers: Vec<(String, String)>) -> Self {
        Self {
            client: Arc::clone(&self.client),
            headers,
        }
    }

    /// Performs one request and returns the parsed JSON payload.
    ///
    /// The body is only sent for methods that carry one.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestFailure`] describing the failed request. Each
    /// failure is logged once at error level; successes are not logged.
    pub async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> ApiResult<Value> {
        let mut request = HttpRequest::new(method, url);
        request.headers.clone_from(&self.headers);
        if method.has_body() {
            request.body = body.cloned();
        }

        let outcome = self.client.execute(&request).await;
        classify(outcome).inspect_err(|failure| log_failure(method, url, failure))
    }

    /// Performs one request and decodes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), plus [`RequestFailure::Decode`]
    /// when the payload does not match `T`.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> ApiResult<T> {
        let data = self.execute(method, url, body).await?;
        serde_json::from_value(data).map_err(|e| {
            let failure = RequestFailure::Decode {
                message: e.to_string(),
            };
            log_failure(method, url, &failure);
            failure
        })
    }
}

fn classify(outcome: Result<HttpResponse, HttpClientError>) -> ApiResult<Value> {
    match outcome {
        Ok(response) if response.is_success() => {
            response.json_body().map_err(|e| RequestFailure::Decode {
                message: e.to_string(),
            })
        }
        Ok(response) => Err(structured_error(&response).map_or_else(
            || RequestFailure::UnexpectedResponse {
                status: response.status,
                body: response.text(),
            },
            |error| RequestFailure::Esi {
                status: response.status,
                error,
            },
        )),
        Err(cause) => Err(RequestFailure::Transport { cause }),
    }
}

/// Extracts the `error` field from an ESI failure body.
fn structured_error(response: &HttpResponse) -> Option<String> {
    let body = response.json_body().ok()?;
    match body.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn log_failure(method: HttpMethod, url: &str, failure: &RequestFailure) {
    match failure {
        RequestFailure::Esi { status, error } => {
            error!(%method, url, status, "From ESI: {error}");
        }
        other => {
            error!(%method, url, "From ESI: {}", other);
        }
    }
}
