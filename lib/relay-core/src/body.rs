//! JSON body codec.

use bytes::Bytes;

use crate::{Error, Result};

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Encoding`] if serialization fails.
///
/// # Example
///
/// ```
/// use relay_core::to_json;
///
/// let bytes = to_json(&serde_json::json!({"name": "Portal"})).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"Portal"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(|e| Error::encoding(e.to_string()))
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so a decoding failure names the exact field
/// that failed (e.g., "results[2].name") instead of just a byte offset.
///
/// # Errors
///
/// Returns [`Error::Decoding`] if deserialization fails.
///
/// # Example
///
/// ```
/// use relay_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Genre { name: String }
///
/// let genre: Genre = from_json(br#"{"name":"Action"}"#).expect("deserialize");
/// assert_eq!(genre, Genre { name: "Action".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| Error::decoding(e.path().to_string(), e.inner().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Game {
            name: String,
            id: u64,
        }

        let game = Game {
            name: "Portal".to_string(),
            id: 13,
        };

        let bytes = to_json(&game).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"name":"Portal","id":13}"#);
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Game {
            name: String,
            id: u64,
        }

        let game: Game = from_json(br#"{"name":"Portal","id":13}"#).expect("deserialize");
        assert_eq!(
            game,
            Game {
                name: "Portal".to_string(),
                id: 13,
            }
        );
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Game {
            #[allow(dead_code)]
            name: String,
        }

        let result: Result<Game> = from_json(b"not json");
        let err = result.expect_err("should fail");
        assert!(matches!(err, Error::Decoding { .. }));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Genre {
            #[allow(dead_code)]
            name: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Envelope {
            #[allow(dead_code)]
            results: Vec<Genre>,
        }

        // Second element is missing 'name'.
        let bytes = br#"{"results":[{"name":"Action"},{}]}"#;
        let result: Result<Envelope> = from_json(bytes);

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("results[1]"), "expected path in error: {msg}");
        assert!(msg.contains("name"), "expected field name in error: {msg}");
    }
}
