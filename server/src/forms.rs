//! Server-rendered page with form actions.
//!
//! `GET /` renders the list straight from the service. The add and remove
//! forms post urlencoded fields to `/actions/*`, which validate, delegate
//! and redirect back to `/` so the browser reloads a fresh page.

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use thiserror::Error;
use todo_core::{AddTodo, RemoveTodo, Todo};
use tracing::warn;

use crate::SharedService;

pub fn routes() -> Router<SharedService> {
    Router::new()
        .route("/", get(page))
        .route("/actions/add", post(add_action))
        .route("/actions/remove", post(remove_action))
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] todo_core::ValidationError),

    #[error("Invalid input")]
    Malformed(#[from] FormRejection),
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        warn!(error = %self, "form action rejected");
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

async fn page(State(service): State<SharedService>) -> Html<String> {
    Html(render_page(&service.list()))
}

async fn add_action(
    State(service): State<SharedService>,
    form: Result<Form<AddTodo>, FormRejection>,
) -> Result<Redirect, ActionError> {
    let Form(input) = form?;
    let text = input.validate()?;
    service.add(text);
    Ok(Redirect::to("/"))
}

async fn remove_action(
    State(service): State<SharedService>,
    form: Result<Form<RemoveTodo>, FormRejection>,
) -> Result<Redirect, ActionError> {
    let Form(input) = form?;
    let id = input.validate()?;
    service.remove(id);
    Ok(Redirect::to("/"))
}

fn render_page(todos: &[Todo]) -> String {
    let items: String = todos
        .iter()
        .map(|todo| {
            format!(
                concat!(
                    "      <li>{text}\n",
                    "        <form method=\"post\" action=\"/actions/remove\" style=\"display: inline\">\n",
                    "          <input type=\"hidden\" name=\"id\" value=\"{id}\" />\n",
                    "          <button type=\"submit\">Delete</button>\n",
                    "        </form>\n",
                    "      </li>\n",
                ),
                text = escape_html(&todo.text),
                id = todo.id,
            )
        })
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "  <head><meta charset=\"utf-8\" /><title>Todo App</title></head>\n",
            "  <body>\n",
            "    <main>\n",
            "    <h1>Todo App (Form Actions)</h1>\n",
            "    <ul>\n",
            "{items}",
            "    </ul>\n",
            "    <form method=\"post\" action=\"/actions/add\">\n",
            "      <input type=\"text\" name=\"text\" placeholder=\"Add a todo...\" maxlength=\"200\" required />\n",
            "      <button type=\"submit\">Add</button>\n",
            "    </form>\n",
            "    </main>\n",
            "  </body>\n",
            "</html>\n",
        ),
        items = items,
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
