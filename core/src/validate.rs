//! Input validation shared by every transport adapter.
//!
//! # Design
//! The store accepts any text and any id. Adapters call `AddTodo::validate`
//! and `RemoveTodo::validate` before delegating, so a rejected request never
//! reaches the store. Messages are part of the wire contract and are echoed
//! to clients verbatim.

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

use crate::types::{AddTodo, RemoveTodo};

/// Upper bound on todo text, counted in UTF-16 code units so clients that
/// measure string length the same way agree on the limit.
pub const MAX_TEXT_LEN: usize = 200;

/// Length of a hyphenated UUID string (8-4-4-4-12).
const HYPHENATED_UUID_LEN: usize = 36;

/// Reasons an add or remove request is rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field was absent or null.
    #[error("Required")]
    Missing { field: &'static str },

    #[error("Todo text is required")]
    EmptyText,

    #[error("Todo text too long")]
    TextTooLong { len: usize },

    #[error("Invalid todo ID")]
    InvalidId,
}

impl ValidationError {
    /// Name of the input field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field } => *field,
            ValidationError::EmptyText | ValidationError::TextTooLong { .. } => "text",
            ValidationError::InvalidId => "id",
        }
    }

    /// Messages keyed by field name, the shape used in 400 response bodies.
    pub fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        BTreeMap::from([(self.field().to_string(), vec![self.to_string()])])
    }
}

/// Check todo text against the 1..=200 UTF-16 code unit bound. Characters
/// outside the Basic Multilingual Plane count as two.
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    let len = text.encode_utf16().count();
    if len > MAX_TEXT_LEN {
        return Err(ValidationError::TextTooLong { len });
    }
    Ok(())
}

/// Check that `id` is a hyphenated UUID string, in any letter case, and
/// hand it back unchanged. Braced, urn and simple forms are rejected even
/// though `Uuid` could parse them. The store matches the returned string
/// exactly, so a differently-cased spelling of a stored id matches nothing.
pub fn validate_todo_id(id: &str) -> Result<&str, ValidationError> {
    if id.len() != HYPHENATED_UUID_LEN {
        return Err(ValidationError::InvalidId);
    }
    Uuid::try_parse(id).map_err(|_| ValidationError::InvalidId)?;
    Ok(id)
}

impl AddTodo {
    /// Validate and return the text to hand to the store.
    pub fn validate(self) -> Result<String, ValidationError> {
        let text = self.text.ok_or(ValidationError::Missing { field: "text" })?;
        validate_text(&text)?;
        Ok(text)
    }
}

impl RemoveTodo {
    /// Validate and return the id string to hand to the store.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let id = self
            .id
            .as_deref()
            .ok_or(ValidationError::Missing { field: "id" })?;
        validate_todo_id(id)
    }
}
