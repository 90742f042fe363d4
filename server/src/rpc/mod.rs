//! Typed RPC adapters.
//!
//! # Design
//! Two call conventions share one dispatcher. `trpc` addresses a procedure
//! by dotted name in the path and splits queries (GET) from mutations
//! (POST). `orpc` addresses it by slash path and wraps input and output in a
//! `{"json": ...}` envelope. Both resolve to a [`Procedure`] and go through
//! [`dispatch`], which validates input before touching the service.

pub mod orpc;
pub mod trpc;

use std::str::FromStr;

use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use todo_core::{AddTodo, RemoveResponse, RemoveTodo, TodoService, ValidationError};

/// Every procedure the `todo` router exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Procedure {
    List,
    Add,
    Remove,
}

impl Procedure {
    pub fn name(self) -> &'static str {
        match self {
            Procedure::List => "todo.list",
            Procedure::Add => "todo.add",
            Procedure::Remove => "todo.remove",
        }
    }

    /// Queries read state; everything else is a mutation.
    pub fn is_query(self) -> bool {
        matches!(self, Procedure::List)
    }
}

impl FromStr for Procedure {
    type Err = RpcError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "todo.list" => Ok(Procedure::List),
            "todo.add" => Ok(Procedure::Add),
            "todo.remove" => Ok(Procedure::Remove),
            other => Err(RpcError::new(
                RpcCode::NotFound,
                format!("No procedure found on path \"{other}\""),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcCode {
    ParseError,
    BadRequest,
    NotFound,
    MethodNotSupported,
    InternalServerError,
}

impl RpcCode {
    pub fn as_str(self) -> &'static str {
        match self {
            RpcCode::ParseError => "PARSE_ERROR",
            RpcCode::BadRequest => "BAD_REQUEST",
            RpcCode::NotFound => "NOT_FOUND",
            RpcCode::MethodNotSupported => "METHOD_NOT_SUPPORTED",
            RpcCode::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(self) -> StatusCode {
        match self {
            RpcCode::ParseError | RpcCode::BadRequest => StatusCode::BAD_REQUEST,
            RpcCode::NotFound => StatusCode::NOT_FOUND,
            RpcCode::MethodNotSupported => StatusCode::METHOD_NOT_ALLOWED,
            RpcCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Error)]
#[error("{code:?}: {message}")]
pub struct RpcError {
    pub code: RpcCode,
    pub message: String,
}

impl RpcError {
    pub fn new(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for RpcError {
    fn from(err: ValidationError) -> Self {
        RpcError::new(RpcCode::BadRequest, format!("{}: {err}", err.field()))
    }
}

/// Run `procedure` against `service`. A missing or null input decodes to an
/// empty payload, which then fails validation for procedures that need one.
pub fn dispatch(
    service: &dyn TodoService,
    procedure: Procedure,
    input: Option<Value>,
) -> Result<Value, RpcError> {
    match procedure {
        Procedure::List => encode(service.list()),
        Procedure::Add => {
            let text = decode::<AddTodo>(input)?.validate()?;
            encode(service.add(text))
        }
        Procedure::Remove => {
            let input = decode::<RemoveTodo>(input)?;
            service.remove(input.validate()?);
            encode(RemoveResponse::SUCCESS)
        }
    }
}

/// Parse a raw request body. An empty body means no input.
pub(crate) fn parse_body(body: &[u8]) -> Result<Option<Value>, RpcError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| RpcError::new(RpcCode::ParseError, e.to_string()))
}

fn decode<T: DeserializeOwned + Default>(input: Option<Value>) -> Result<T, RpcError> {
    match input {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value)
            .map_err(|e| RpcError::new(RpcCode::BadRequest, e.to_string())),
    }
}

fn encode<T: Serialize>(output: T) -> Result<Value, RpcError> {
    serde_json::to_value(output)
        .map_err(|e| RpcError::new(RpcCode::InternalServerError, e.to_string()))
}
