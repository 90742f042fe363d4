//! Error types for the raw JSON API client.
//!
//! # Design
//! A 400 from the server carries field-level messages, so it gets its own
//! `Validation` variant with the decoded map. `NotFound` stays separate for
//! unknown routes. Every other non-2xx response lands in `HttpError` with the
//! raw status and body.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the input (400). Messages are keyed by field.
    #[error("validation failed: {}", first_field_error(.0))]
    Validation(BTreeMap<String, Vec<String>>),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned some other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// `field: message` for the first reported field, as `field_errors` shapes it
/// on the server side.
fn first_field_error(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .find_map(|(field, messages)| {
            messages.first().map(|message| format!("{field}: {message}"))
        })
        .unwrap_or_else(|| "no field errors reported".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_names_field_and_message() {
        let err = ApiError::Validation(BTreeMap::from([(
            "text".to_string(),
            vec!["Todo text too long".to_string()],
        )]));
        assert_eq!(err.to_string(), "validation failed: text: Todo text too long");
    }

    #[test]
    fn validation_display_without_fields() {
        let err = ApiError::Validation(BTreeMap::new());
        assert_eq!(err.to_string(), "validation failed: no field errors reported");
    }
}
