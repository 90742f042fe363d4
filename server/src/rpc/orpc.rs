//! Envelope RPC: `POST /rpc/todo/{list,add,remove}` with `{"json": input}`,
//! answered with `{"json": output}`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use super::{dispatch, parse_body, Procedure, RpcCode, RpcError};
use crate::SharedService;

pub fn routes() -> Router<SharedService> {
    Router::new().route("/rpc/{*path}", post(call))
}

async fn call(
    State(service): State<SharedService>,
    Path(path): Path<String>,
    body: Bytes,
) -> Response {
    let name = path.trim_matches('/').replace('/', ".");
    let result = name.parse::<Procedure>().and_then(|procedure| {
        let input = unwrap_envelope(parse_body(&body)?)?;
        dispatch(&*service, procedure, input)
    });

    match result {
        Ok(output) => Json(json!({ "json": output })).into_response(),
        Err(err) => {
            warn!(procedure = %name, error = %err, "rpc call rejected");
            let status = err.code.status();
            let body = json!({
                "json": {
                    "defined": false,
                    "code": err.code.as_str(),
                    "status": status.as_u16(),
                    "message": err.message,
                }
            });
            (status, Json(body)).into_response()
        }
    }
}

/// Pull the input out of `{"json": ...}`. A missing body or missing `json`
/// key means no input.
fn unwrap_envelope(body: Option<Value>) -> Result<Option<Value>, RpcError> {
    match body {
        None => Ok(None),
        Some(Value::Object(mut fields)) => Ok(fields.remove("json")),
        Some(_) => Err(RpcError::new(
            RpcCode::BadRequest,
            "request body must be an object with a \"json\" field",
        )),
    }
}
