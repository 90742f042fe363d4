//! Path-per-procedure RPC: `GET /trpc/todo.list`, `POST /trpc/todo.add`,
//! `POST /trpc/todo.remove`.
//!
//! Success bodies are `{"result":{"data":...}}`; failures are
//! `{"error":{"message":...,"code":...,"path":...}}`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use super::{dispatch, parse_body, Procedure, RpcCode, RpcError};
use crate::SharedService;

pub fn routes() -> Router<SharedService> {
    Router::new().route("/trpc/{procedure}", get(query).post(mutation))
}

async fn query(State(service): State<SharedService>, Path(name): Path<String>) -> Response {
    let result = resolve(&name, true).and_then(|procedure| dispatch(&*service, procedure, None));
    respond(&name, result)
}

async fn mutation(
    State(service): State<SharedService>,
    Path(name): Path<String>,
    body: Bytes,
) -> Response {
    let result = resolve(&name, false).and_then(|procedure| {
        let input = parse_body(&body)?;
        dispatch(&*service, procedure, input)
    });
    respond(&name, result)
}

/// Look up the procedure and check it is called with the right method.
fn resolve(name: &str, via_get: bool) -> Result<Procedure, RpcError> {
    let procedure: Procedure = name.parse()?;
    if procedure.is_query() != via_get {
        let expected = if procedure.is_query() { "GET" } else { "POST" };
        return Err(RpcError::new(
            RpcCode::MethodNotSupported,
            format!("Unsupported method for \"{name}\", use {expected}"),
        ));
    }
    Ok(procedure)
}

fn respond(name: &str, result: Result<Value, RpcError>) -> Response {
    match result {
        Ok(data) => Json(json!({ "result": { "data": data } })).into_response(),
        Err(err) => {
            warn!(procedure = name, error = %err, "rpc call rejected");
            let body = json!({
                "error": {
                    "message": err.message,
                    "code": err.code.as_str(),
                    "path": name,
                }
            });
            (err.code.status(), Json(body)).into_response()
        }
    }
}
