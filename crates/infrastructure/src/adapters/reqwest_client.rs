//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! Every response that arrives is returned as-is, whatever its status; only
//! failures to obtain a response become errors.

use esi_application::ports::{HttpClient, HttpClientError};
use esi_domain::{HttpMethod, HttpRequest, HttpResponse};
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

/// Maximum number of redirects followed.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer. No request timeout is configured.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "esi-rs/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("esi-rs/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    fn host_of(error: &reqwest::Error) -> String {
        error
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Joins an error with all of its sources.
    fn error_chain(error: &reqwest::Error) -> String {
        let mut message = error.to_string();
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout;
        }

        if error.is_connect() {
            let message = Self::error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: Self::host_of(error),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: Self::host_of(error),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(443),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        if error.is_body() || error.is_builder() {
            return HttpClientError::InvalidBody(error.to_string());
        }

        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpClientError> {
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        debug!(method = %request.method, %url, "sending request");

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| Self::map_error(&e))?;
        let status = response.status().as_u16();

        let body = response
            .bytes()
            .await
            .map_err(|e| HttpClientError::Other(format!("Failed to read body: {e}")))?
            .to_vec();

        debug!(status, bytes = body.len(), "received response");
        Ok(HttpResponse::new(status, body))
    }
}
