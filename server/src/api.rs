//! Raw JSON API: `GET`/`POST /api/todos`, `DELETE /api/todos/{id}`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{delete, get},
    Json, Router,
};
use todo_core::{validate::validate_todo_id, AddTodo, RemoveResponse, Todo};

use crate::error::AppError;
use crate::SharedService;

pub fn routes() -> Router<SharedService> {
    Router::new()
        .route("/api/todos", get(list_todos).post(add_todo))
        .route("/api/todos/{id}", delete(remove_todo))
}

async fn list_todos(State(service): State<SharedService>) -> Json<Vec<Todo>> {
    Json(service.list())
}

async fn add_todo(
    State(service): State<SharedService>,
    payload: Result<Json<AddTodo>, JsonRejection>,
) -> Result<Json<Todo>, AppError> {
    let Json(input) = payload?;
    let text = input.validate()?;
    Ok(Json(service.add(text)))
}

/// Answers success whether or not the id matched a todo.
async fn remove_todo(
    State(service): State<SharedService>,
    Path(raw): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let id = validate_todo_id(&raw)?;
    service.remove(id);
    Ok(Json(RemoveResponse::SUCCESS))
}
