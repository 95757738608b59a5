//! Write-through cache of the active project's todos.
//!
//! [`TodoSync`] owns the only in-memory copy of the todo list. Every mutation
//! is split in two: a request method returns the [`Effect`] to run, and an
//! `on_*` method applies the service's answer once it arrives. The cache is
//! only ever written from confirmed service responses, keyed by todo id.
//! Failures never escape: they become the single current [`SyncError`].

use log::{debug, info, warn};
use uuid::Uuid;

use super::effects::Effect;
use crate::service::{ProjectStats, Todo, TodoPatch};

/// Which kind of operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Listing todos failed; the view body shows the error instead of the list.
    LoadFailure,
    /// Add, update or delete failed; the list stays and the error is advisory.
    MutationFailure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncError {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct TodoSync {
    project_id: Uuid,
    todos: Vec<Todo>,
    loading: bool,
    error: Option<SyncError>,
}

impl TodoSync {
    /// A cache for `project_id` that has not loaded yet.
    pub fn new(project_id: Uuid) -> Self {
        Self {
            project_id,
            todos: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
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

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&SyncError> {
        self.error.as_ref()
    }

    pub fn stats(&self) -> ProjectStats {
        ProjectStats::from_todos(&self.todos)
    }

    pub fn position(&self, todo_id: Uuid) -> Option<usize> {
        self.todos.iter().position(|t| t.id == todo_id)
    }

    /// Re-subscribe to another project. Returns the refresh to run, or `None`
    /// when the project is already the active one.
    pub fn switch_project(&mut self, project_id: Uuid) -> Option<Effect> {
        if project_id == self.project_id {
            return None;
        }
        info!("TodoSync: switching from project {} to {}", self.project_id, project_id);
        *self = Self::new(project_id);
        Some(self.refresh())
    }

    /// Start a full reload: sets loading and clears the current error.
    pub fn refresh(&mut self) -> Effect {
        self.loading = true;
        self.error = None;
        Effect::LoadTodos {
            project_id: self.project_id,
        }
    }

    /// Apply the outcome of a reload. Loading is cleared whether it succeeded or not.
    pub fn on_loaded(&mut self, project_id: Uuid, result: Result<Vec<Todo>, String>) -> bool {
        if !self.is_current(project_id) {
            return false;
        }

        match result {
            Ok(todos) => {
                info!("TodoSync: loaded {} todos", todos.len());
                self.todos = todos;
            }
            Err(message) => self.record(FailureKind::LoadFailure, message),
        }
        self.loading = false;
        true
    }

    /// Request creation of a todo. Titles that trim to nothing are ignored.
    pub fn add_todo(&self, title: &str) -> Option<Effect> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Effect::AddTodo {
            project_id: self.project_id,
            title: title.to_string(),
        })
    }

    /// Insert a created todo at the head of the list and return it.
    pub fn on_added(&mut self, project_id: Uuid, result: Result<Todo, String>) -> Option<Todo> {
        if !self.is_current(project_id) {
            return None;
        }

        match result {
            Ok(todo) => {
                info!("TodoSync: added todo {} '{}'", todo.id, todo.title);
                self.todos.insert(0, todo.clone());
                Some(todo)
            }
            Err(message) => {
                self.record(FailureKind::MutationFailure, message);
                None
            }
        }
    }

    /// Request the next status in the cycle open -> in_progress -> done -> open.
    pub fn toggle_todo(&self, todo: &Todo) -> Effect {
        Effect::UpdateTodo {
            project_id: self.project_id,
            todo_id: todo.id,
            patch: TodoPatch::status(todo.status.next()),
        }
    }

    /// Request a title change. Titles that trim to nothing are ignored.
    pub fn update_todo_title(&self, todo: &Todo, title: &str) -> Option<Effect> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Effect::UpdateTodo {
            project_id: self.project_id,
            todo_id: todo.id,
            patch: TodoPatch::title(title),
        })
    }

    /// Replace the cached entry with the service's copy.
    pub fn on_updated(&mut self, project_id: Uuid, todo_id: Uuid, result: Result<Option<Todo>, String>) -> bool {
        if !self.is_current(project_id) {
            return false;
        }

        match result {
            Ok(Some(updated)) => match self.position(todo_id) {
                Some(index) => {
                    debug!("TodoSync: replaced todo {}", todo_id);
                    self.todos[index] = updated;
                    true
                }
                None => {
                    debug!("TodoSync: ignoring update for todo {} no longer in the list", todo_id);
                    false
                }
            },
            Ok(None) => {
                debug!("TodoSync: service did not find todo {}", todo_id);
                false
            }
            Err(message) => {
                self.record(FailureKind::MutationFailure, message);
                false
            }
        }
    }

    pub fn delete_todo(&self, todo: &Todo) -> Effect {
        Effect::DeleteTodo {
            project_id: self.project_id,
            todo_id: todo.id,
        }
    }

    /// Drop the entry once the service confirms the deletion.
    pub fn on_deleted(&mut self, project_id: Uuid, todo_id: Uuid, result: Result<bool, String>) -> bool {
        if !self.is_current(project_id) {
            return false;
        }

        match result {
            Ok(true) => {
                let before = self.todos.len();
                self.todos.retain(|t| t.id != todo_id);
                info!("TodoSync: deleted todo {}", todo_id);
                self.todos.len() != before
            }
            Ok(false) => {
                debug!("TodoSync: service reported nothing to delete for {}", todo_id);
                false
            }
            Err(message) => {
                self.record(FailureKind::MutationFailure, message);
                false
            }
        }
    }

    fn is_current(&self, project_id: Uuid) -> bool {
        if project_id != self.project_id {
            debug!("TodoSync: dropping stale result for project {}", project_id);
            return false;
        }
        true
    }

    /// Only the latest failure is kept.
    fn record(&mut self, kind: FailureKind, message: String) {
        warn!("TodoSync: {:?}: {}", kind, message);
        self.error = Some(SyncError { kind, message });
    }
}
