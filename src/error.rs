//! Error types for the DexScreener client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all DexScreener client operations.
#[derive(Error, Debug)]
pub enum DexScreenerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The API answered with a status other than 200 OK
    #[error("{0}")]
    Api(ApiError),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The configured base URL cannot carry path segments
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),

    /// Request rejected before it was sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl DexScreenerError {
    /// Check if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::HttpMiddleware(_))
    }

    /// Check if a 200 response body could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// The HTTP status of a failed response, if the API answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::Http(err) => err.status(),
            _ => None,
        }
    }
}

/// A non-200 response from the DexScreener API.
///
/// The body is read best-effort: if reading it fails, `body` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Raw response body text
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "request failed (status: {}, body: {})", self.status, self.body)
    }
}

impl ApiError {
    /// Create a new API error from a status and body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
    }

    /// Check if the API failed on its side.
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}
