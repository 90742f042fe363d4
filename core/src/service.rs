//! The list/add/remove capability every transport adapter delegates to.

use crate::store::TodoStore;
use crate::types::Todo;

/// Operations a transport adapter may perform on the todo collection.
///
/// Inputs are assumed valid: adapters run `validate` first.
pub trait TodoService: Send + Sync {
    fn list(&self) -> Vec<Todo>;

    fn add(&self, text: String) -> Todo;

    /// Exact string match against stored ids. Silent no-op when nothing
    /// matches.
    fn remove(&self, id: &str);
}

impl TodoService for TodoStore {
    fn list(&self) -> Vec<Todo> {
        TodoStore::list(self)
    }

    fn add(&self, text: String) -> Todo {
        TodoStore::add(self, text)
    }

    fn remove(&self, id: &str) {
        TodoStore::remove(self, id)
    }
}
