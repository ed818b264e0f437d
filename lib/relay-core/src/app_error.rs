//! Application-facing error taxonomy.
//!
//! [`AppError`] is what repository-layer callers surface to users. The
//! [`From<Error>`] conversion is the single mapping out of the transport
//! taxonomy: it is pure, total, and deterministic - every transport variant
//! has exactly one target here. Status-code specialization (401/403/404)
//! belongs to the error normalizer interceptor; this mapping never
//! re-specializes.

use crate::Error;

/// Application-level error, suitable for direct display to a caller.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error)]
pub enum AppError {
    /// Server-acknowledged failure with an HTTP code and optional
    /// server-provided message.
    Api {
        /// HTTP status code reported by the server.
        code: u16,
        /// Server-provided message, when one could be extracted.
        #[error(not(source))]
        message: Option<String>,
    },

    /// Connectivity or protocol failure.
    Network {
        /// Human-readable reason.
        #[error(not(source))]
        reason: String,
    },

    /// Anything that fits neither bucket.
    Unknown {
        /// Human-readable message.
        #[error(not(source))]
        message: String,
    },
}

impl AppError {
    /// Create an API error with a message.
    #[must_use]
    pub fn api(code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: Some(message.into()),
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network {
            reason: reason.into(),
        }
    }

    /// Create an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api { code, message } => match message {
                Some(message) => write!(f, "{message}"),
                None => write!(f, "API error with code: {code}"),
            },
            Self::Network { reason } => write!(f, "Network error: {reason}"),
            Self::Unknown { message } => write!(f, "Unknown error: {message}"),
        }
    }
}

impl From<Error> for AppError {
    fn from(error: Error) -> Self {
        match error {
            Error::Http { status, body } => Self::Api {
                code: status,
                message: extract_error_message(body.as_deref()),
            },
            Error::Unauthorized => Self::api(401, "Unauthorized access"),
            Error::Forbidden => Self::api(403, "Access forbidden"),
            Error::NotFound => Self::api(404, "Resource not found"),
            Error::Timeout => Self::network("Request timeout"),
            Error::NoConnection => Self::network("No internet connection"),
            Error::Cancelled => Self::network("Request cancelled"),
            Error::Connection(reason) => Self::Network { reason },
            Error::InvalidUrl(url) => Self::network(format!("Invalid URL: {url}")),
            Error::InvalidRequest(reason) => Self::network(format!("Invalid request: {reason}")),
            Error::InvalidResponse => Self::network("Invalid response from server"),
            Error::NoData => Self::network("No data received from server"),
            Error::Decoding { path, message } => {
                Self::unknown(format!("decoding error at '{path}': {message}"))
            }
            Error::Encoding(message) | Error::Unknown(message) => Self::Unknown { message },
        }
    }
}

/// Pull a server-provided message out of an error body.
///
/// Both upstream APIs report failures as a JSON object with a `message` or
/// `error` string field; empty strings are treated as absent.
fn extract_error_message(body: Option<&[u8]>) -> Option<String> {
    let body = body?;
    let json: serde_json::Value = serde_json::from_slice(body).ok()?;

    ["message", "error"]
        .iter()
        .filter_map(|key| json.get(key).and_then(serde_json::Value::as_str))
        .find(|message| !message.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn app_error_display() {
        assert_eq!(AppError::api(401, "Unauthorized access").to_string(), "Unauthorized access");
        assert_eq!(
            AppError::Api { code: 418, message: None }.to_string(),
            "API error with code: 418"
        );
        assert_eq!(
            AppError::network("Request timeout").to_string(),
            "Network error: Request timeout"
        );
        assert_eq!(AppError::unknown("boom").to_string(), "Unknown error: boom");
    }

    #[test]
    fn maps_specialized_http_variants() {
        assert_eq!(
            AppError::from(Error::Unauthorized),
            AppError::api(401, "Unauthorized access")
        );
        assert_eq!(
            AppError::from(Error::Forbidden),
            AppError::api(403, "Access forbidden")
        );
        assert_eq!(
            AppError::from(Error::NotFound),
            AppError::api(404, "Resource not found")
        );
    }

    #[test]
    fn maps_http_error_with_server_message() {
        let err = Error::http_with_body(422, Bytes::from(r#"{"message":"name is required"}"#));
        assert_eq!(AppError::from(err), AppError::api(422, "name is required"));

        let err = Error::http_with_body(500, Bytes::from(r#"{"error":"boom"}"#));
        assert_eq!(AppError::from(err), AppError::api(500, "boom"));
    }

    #[test]
    fn maps_http_error_without_message() {
        let err = Error::http(502);
        assert_eq!(
            AppError::from(err),
            AppError::Api { code: 502, message: None }
        );

        // Non-JSON body yields no message rather than garbage.
        let err = Error::http_with_body(500, Bytes::from("<html>oops</html>"));
        assert_eq!(
            AppError::from(err),
            AppError::Api { code: 500, message: None }
        );

        // Empty message fields are treated as absent.
        let err = Error::http_with_body(500, Bytes::from(r#"{"message":""}"#));
        assert_eq!(
            AppError::from(err),
            AppError::Api { code: 500, message: None }
        );
    }

    #[test]
    fn maps_network_variants() {
        assert_eq!(AppError::from(Error::Timeout), AppError::network("Request timeout"));
        assert_eq!(
            AppError::from(Error::NoConnection),
            AppError::network("No internet connection")
        );
        assert_eq!(
            AppError::from(Error::Cancelled),
            AppError::network("Request cancelled")
        );
        assert_eq!(
            AppError::from(Error::connection("connection refused")),
            AppError::network("connection refused")
        );
        assert_eq!(
            AppError::from(Error::invalid_url("not a url")),
            AppError::network("Invalid URL: not a url")
        );
        assert_eq!(
            AppError::from(Error::invalid_request("bad header")),
            AppError::network("Invalid request: bad header")
        );
        assert_eq!(
            AppError::from(Error::InvalidResponse),
            AppError::network("Invalid response from server")
        );
        assert_eq!(
            AppError::from(Error::NoData),
            AppError::network("No data received from server")
        );
    }

    #[test]
    fn maps_unknown_variants() {
        assert_eq!(
            AppError::from(Error::encoding("not serializable")),
            AppError::unknown("not serializable")
        );
        assert_eq!(AppError::from(Error::unknown("boom")), AppError::unknown("boom"));
        assert!(matches!(
            AppError::from(Error::decoding("results[0]", "bad type")),
            AppError::Unknown { .. }
        ));
    }
}
