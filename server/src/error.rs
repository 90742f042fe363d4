//! Rejections for the raw JSON API.
//!
//! Every rejection is a 400 with `{"error": {"<field>": ["<message>"]}}`.
//! Bodies that fail to parse as JSON are reported under the `body` key.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::{ValidationError, ValidationErrorBody};
use tracing::warn;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

impl AppError {
    fn field_errors(&self) -> BTreeMap<String, Vec<String>> {
        match self {
            AppError::Validation(err) => err.field_errors(),
            AppError::MalformedBody(message) => {
                BTreeMap::from([("body".to_string(), vec![message.clone()])])
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(error = %self, "rejected api request");
        let body = ValidationErrorBody {
            error: self.field_errors(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
