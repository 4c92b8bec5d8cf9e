//! HTTP Method enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTTP methods used by ESI endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
}

impl HttpMethod {
    /// Returns whether this method carries a request body.
    #[must_use]
    pub const fn has_body(self) -> bool {
        matches!(self, Self::Post)
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
