// ABOUTME: Error types for JSON Feed decoding.
// ABOUTME: Provides the Error enum covering JSON parse, structural, and date failures.

use thiserror::Error;

/// Errors that can occur while decoding a JSON Feed document.
///
/// Builder validation is not represented here: a builder that rejects its
/// input returns `None` rather than an error.
#[derive(Debug, Error)]
pub enum Error {
    /// The bytes are not well-formed JSON. Carries the underlying parser
    /// error unchanged.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required wire field is absent (or null).
    #[error("{entity} is missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field holds the wrong JSON type.
    #[error("{entity} field `{field}` is not a {expected}")]
    InvalidType {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// A date field is not valid ISO 8601 with a numeric offset.
    #[error("field `{field}` holds an invalid ISO 8601 date: {value:?}")]
    InvalidDate {
        field: &'static str,
        value: String,
    },
}

impl Error {
    /// Creates a MissingField error for the given entity and wire field.
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Error::MissingField { entity, field }
    }

    /// Creates an InvalidType error for the given entity and wire field.
    pub fn invalid_type(entity: &'static str, field: &'static str, expected: &'static str) -> Self {
        Error::InvalidType {
            entity,
            field,
            expected,
        }
    }
}
