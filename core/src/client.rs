//! Stateless request builder and response parser for the raw JSON API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the caller runs the round-trip in
//! between. After a successful add or remove, callers are expected to list
//! again rather than patch a local copy.

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddTodo, RemoveResponse, Todo, ValidationErrorBody};

/// Route prefix of the raw JSON API.
pub const API_PREFIX: &str = "/api/todos";

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{API_PREFIX}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_todo(&self, input: &AddTodo) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{API_PREFIX}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_remove_todo(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}{API_PREFIX}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_add_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The server reports success whether or not the id matched anything.
    pub fn parse_remove_todo(&self, response: HttpResponse) -> Result<RemoveResponse, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Every raw API operation answers 200 on success.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    match response.status {
        200 => Ok(()),
        400 => match serde_json::from_str::<ValidationErrorBody>(&response.body) {
            Ok(body) => Err(ApiError::Validation(body.error)),
            Err(_) => Err(ApiError::HttpError {
                status: 400,
                body: response.body.clone(),
            }),
        },
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_add_todo_produces_correct_request() {
        let req = client().build_add_todo(&AddTodo::new("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/api/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"text": "Buy milk"}));
    }

    #[test]
    fn build_remove_todo_puts_id_in_path() {
        let req = client().build_remove_todo(Uuid::nil());
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(
            req.path,
            "http://localhost:3000/api/todos/00000000-0000-0000-0000-000000000000"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":"00000000-0000-0000-0000-000000000001","text":"Test"}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "Test");
    }

    #[test]
    fn parse_add_todo_success() {
        let response = HttpResponse::new(
            200,
            r#"{"id":"00000000-0000-0000-0000-000000000001","text":"New"}"#,
        );
        let todo = client().parse_add_todo(response).unwrap();
        assert_eq!(todo.text, "New");
    }

    #[test]
    fn parse_add_todo_validation_error() {
        let response = HttpResponse::new(400, r#"{"error":{"text":["Todo text too long"]}}"#);
        let err = client().parse_add_todo(response).unwrap_err();
        match err {
            ApiError::Validation(fields) => {
                assert_eq!(fields["text"], vec!["Todo text too long".to_string()]);
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn parse_400_without_field_errors_is_http_error() {
        let response = HttpResponse::new(400, "bad request");
        let err = client().parse_add_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 400, .. }));
    }

    #[test]
    fn parse_add_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_add_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_remove_todo_success() {
        let response = HttpResponse::new(200, r#"{"success":true}"#);
        let result = client().parse_remove_todo(response).unwrap();
        assert!(result.success);
    }

    #[test]
    fn parse_remove_todo_not_found_route() {
        let response = HttpResponse::new(404, "");
        let err = client().parse_remove_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:3000/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://localhost:3000/api/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }
}
