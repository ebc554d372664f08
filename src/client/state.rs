//! Local UI state: an in-memory mirror of the server's todo list and the
//! create-form fields. The list is loaded once and then patched per mutation
//! via explicit events instead of re-fetching, so it can drift from the
//! server if another client writes concurrently.

use crate::model::Todo;
use crate::schema::CreateTodoSchema;

/// Events the UI applies to its local list after a successful remote call.
#[derive(Debug, Clone)]
pub enum ListEvent {
    /// Full refresh from the initial load
    Loaded(Vec<Todo>),
    /// A create succeeded; append the server-assigned row
    Created(Todo),
    /// A toggle or update succeeded; replace the matching row in place
    Updated(Todo),
    /// A delete call returned; the row is removed only when the server
    /// actually removed one
    Deleted { id: i64, success: bool },
}

/// In-memory mirror of the server's todo list, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ListEvent) {
        match event {
            ListEvent::Loaded(todos) => self.todos = todos,
            ListEvent::Created(todo) => self.todos.push(todo),
            ListEvent::Updated(updated) => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == updated.id) {
                    *todo = updated;
                }
            }
            ListEvent::Deleted { id, success } => {
                if success {
                    self.todos.retain(|t| t.id != id);
                }
            }
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }
}

/// Local state of the create form, independent of the list.
#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    pub title: String,
    pub description: Option<String>,
}

impl CreateForm {
    // The form submits only with a non-blank title
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn as_input(&self) -> CreateTodoSchema {
        CreateTodoSchema {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    // Cleared only after a successful create
    pub fn reset(&mut self) {
        self.title.clear();
        self.description = None;
    }
}
