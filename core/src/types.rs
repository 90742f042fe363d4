//! Domain DTOs shared by the store, the transport adapters and the client.
//!
//! # Design
//! Input payloads (`AddTodo`, `RemoveTodo`) keep their fields optional so a
//! missing field reaches validation as a field-level error instead of failing
//! deserialization. `Todo` is the only type the store ever hands out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
}

/// Request payload for adding a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTodo {
    #[serde(default)]
    pub text: Option<String>,
}

impl AddTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// Request payload for removing a todo. The id stays a raw string until
/// validated, since malformed ids must be reported rather than rejected by
/// the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveTodo {
    #[serde(default)]
    pub id: Option<String>,
}

impl RemoveTodo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Response to a remove call. Always `success: true`, whether or not a
/// record matched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveResponse {
    pub success: bool,
}

impl RemoveResponse {
    pub const SUCCESS: Self = Self { success: true };
}

/// Body of a 400 response from the raw JSON API: messages keyed by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorBody {
    pub error: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Uuid::nil(),
            text: "Test".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["text"], "Test");
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn add_todo_missing_text_is_none() {
        let input: AddTodo = serde_json::from_str("{}").unwrap();
        assert!(input.text.is_none());
    }

    #[test]
    fn add_todo_null_text_is_none() {
        let input: AddTodo = serde_json::from_str(r#"{"text":null}"#).unwrap();
        assert!(input.text.is_none());
    }

    #[test]
    fn add_todo_rejects_non_string_text() {
        let result: Result<AddTodo, _> = serde_json::from_str(r#"{"text":42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn remove_todo_keeps_raw_id() {
        let input: RemoveTodo = serde_json::from_str(r#"{"id":"not-a-uuid"}"#).unwrap();
        assert_eq!(input.id.as_deref(), Some("not-a-uuid"));
    }

    #[test]
    fn remove_response_serializes_success() {
        let json = serde_json::to_string(&RemoveResponse::SUCCESS).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
