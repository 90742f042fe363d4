//! Todo domain core: the in-memory store, the service trait every transport
//! delegates to, shared input validation, and a client for the raw JSON API.
//!
//! # Overview
//! `TodoStore` is the single authoritative, ordered collection of todos for
//! a process. Transports never touch it directly: they validate input with
//! the rules in [`validate`] and call through [`TodoService`].
//!
//! # Design
//! - No async and no network in this crate. Store calls are short critical
//!   sections around one lock.
//! - `TodoClient` follows the host-does-IO pattern: it builds `HttpRequest`
//!   values and parses `HttpResponse` values, the caller runs the round-trip.
//! - Removing an unknown id is not an error anywhere in this crate.

pub mod client;
pub mod error;
pub mod http;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use service::TodoService;
pub use store::TodoStore;
pub use types::{AddTodo, RemoveResponse, RemoveTodo, Todo, ValidationErrorBody};
pub use validate::ValidationError;
