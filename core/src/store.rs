//! The authoritative in-memory todo collection.
//!
//! # Design
//! `TodoStore` owns an ordered `Vec<Todo>` behind a single `RwLock`. `list`
//! takes the read side, `add` and `remove` the write side, so each mutation
//! is atomic with respect to every other store call. No call blocks on I/O
//! or awaits; lock hold times are a clone or a single `Vec` edit.
//!
//! The store does not validate anything. Text length and id format are
//! checked by the adapters before they call in.

use parking_lot::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::types::Todo;

/// Text of the records a fresh process starts with.
pub const SEED_TEXTS: [&str; 2] = ["Learn Next.js", "Build a todo app"];

#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two seed records, each with a fresh id.
    pub fn seeded() -> Self {
        let store = Self::new();
        for text in SEED_TEXTS {
            store.add(text.to_string());
        }
        store
    }

    /// Snapshot of every todo in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.read().clone()
    }

    /// Append a new todo and return it.
    pub fn add(&self, text: String) -> Todo {
        let todo = Todo {
            id: Uuid::new_v4(),
            text,
        };
        self.todos.write().push(todo.clone());
        debug!(id = %todo.id, "todo added");
        todo
    }

    /// Remove the todo whose id string is exactly `id`. Ids are stored in
    /// lowercase hyphenated form, so any other spelling matches nothing.
    /// Unknown ids are ignored.
    pub fn remove(&self, id: &str) {
        let mut todos = self.todos.write();
        let found = todos.iter().position(|todo| {
            let mut buf = Uuid::encode_buffer();
            &*todo.id.hyphenated().encode_lower(&mut buf) == id
        });
        match found {
            Some(index) => {
                todos.remove(index);
                debug!(id, "todo removed");
            }
            None => debug!(id, "remove matched nothing"),
        }
    }

    pub fn len(&self) -> usize {
        self.todos.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.read().is_empty()
    }
}
