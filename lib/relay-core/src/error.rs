//! Transport-level error taxonomy.

use bytes::Bytes;
use derive_more::{Display, Error};

/// Transport-level error for relay operations.
///
/// This is a closed set: every failure is created as one of these variants at
/// the point it is first observed (executor, interceptor, or REST client) and
/// never mutated afterwards. Interceptors either forward an error untouched or
/// replace it with another variant.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// HTTP-level error (non-2xx status code).
    ///
    /// The response body is preserved so upstream error handling can extract a
    /// server-provided message.
    #[display("HTTP error ({status})")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<Bytes>,
    },

    /// 401, re-specialized from [`Error::Http`] by the error normalizer.
    #[display("unauthorized access (401)")]
    Unauthorized,

    /// 403, re-specialized from [`Error::Http`] by the error normalizer.
    #[display("access forbidden (403)")]
    Forbidden,

    /// 404, re-specialized from [`Error::Http`] by the error normalizer.
    #[display("resource not found (404)")]
    NotFound,

    /// Request timed out.
    #[display("request timeout")]
    Timeout,

    /// No usable network connection.
    #[display("no internet connection")]
    NoConnection,

    /// The in-flight operation was cancelled.
    #[display("request cancelled")]
    Cancelled,

    /// Raw socket/connect failure as reported by the transport, before the
    /// error normalizer rewrites it to [`Error::NoConnection`].
    #[display("connection error: {_0}")]
    Connection(#[error(not(source))] String),

    /// URL could not be parsed.
    #[display("invalid URL: {_0}")]
    InvalidUrl(#[error(not(source))] String),

    /// Request could not be constructed.
    #[display("invalid request: {_0}")]
    InvalidRequest(#[error(not(source))] String),

    /// The transport reply was not a well-formed HTTP response.
    #[display("invalid response from server")]
    InvalidResponse,

    /// The response carried no body where one was required.
    #[display("no data received from server")]
    NoData,

    /// Response body failed to decode.
    #[display("decoding error at '{path}': {message}")]
    Decoding {
        /// Path to the field that failed (e.g., "results[2].name").
        path: String,
        /// Error message.
        message: String,
    },

    /// Request body failed to encode.
    #[display("encoding error: {_0}")]
    Encoding(#[error(not(source))] String),

    /// Anything that fits no other variant.
    #[display("unknown error: {_0}")]
    Unknown(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from a status code.
    #[must_use]
    pub const fn http(status: u16) -> Self {
        Self::Http { status, body: None }
    }

    /// Create an HTTP error with the response body preserved.
    #[must_use]
    pub const fn http_with_body(status: u16, body: Bytes) -> Self {
        Self::Http {
            status,
            body: Some(body),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl(url.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a decoding error with path context.
    #[must_use]
    pub fn decoding(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decoding {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an encoding error.
    #[must_use]
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }

    /// Create an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the response body if this is an HTTP error with a body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connectivity error (raw or normalized).
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::NoConnection)
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Pure retryability classification used by the retry interceptor.
    ///
    /// Retryable: timeouts, connectivity failures, and 5xx responses.
    /// Everything else - including 401/403/404 and their specialized
    /// variants - fails fast.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::NoConnection | Self::Connection(_) => true,
            Self::Http { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }
}
