//! HTTP Client port

use std::future::Future;

use esi_domain::{HttpRequest, HttpResponse};

/// Transport-level failures, raised when no response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HttpClientError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Underlying error text.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Remote host.
        host: String,
        /// Remote port.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport gave up waiting.
    #[error("request timed out")]
    Timeout,

    /// The redirect chain was too long.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Redirect limit.
        max: usize,
    },

    /// The request body could not be encoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for performing HTTP requests.
///
/// Implementations return `Ok` for every response that arrived, whatever
/// its status code, and `Err` only when no response could be obtained.
pub trait HttpClient: Send + Sync {
    /// Performs a single request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues or other
    /// transport problems.
    fn execute(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpClientError>> + Send;
}
