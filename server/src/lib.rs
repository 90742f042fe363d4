//! axum server exposing one todo store through several call conventions.
//!
//! | Adapter | Routes |
//! |---|---|
//! | raw JSON API | `GET/POST /api/todos`, `DELETE /api/todos/{id}` |
//! | path-per-procedure RPC | `GET /trpc/todo.list`, `POST /trpc/todo.{add,remove}` |
//! | envelope RPC | `POST /rpc/todo/{list,add,remove}` |
//! | form actions | `GET /`, `POST /actions/{add,remove}` |
//!
//! Every adapter validates input, then delegates to the shared
//! [`TodoService`] handle passed to [`app`].

use std::{future::Future, sync::Arc};

use axum::{http::StatusCode, routing::get, Router};
use todo_core::TodoService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod rpc;

/// Handle every adapter holds. Built once at startup.
pub type SharedService = Arc<dyn TodoService>;

pub fn app(service: SharedService) -> Router {
    Router::new()
        .merge(api::routes())
        .merge(rpc::trpc::routes())
        .merge(rpc::orpc::routes())
        .merge(forms::routes())
        .route("/health", get(health))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener, service: SharedService) -> Result<(), std::io::Error> {
    axum::serve(listener, app(service)).await
}

/// Like [`run`], but stops accepting connections once `shutdown` resolves
/// and returns after in-flight requests finish.
pub async fn run_with_shutdown<F>(
    listener: TcpListener,
    service: SharedService,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
