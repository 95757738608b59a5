//! Todo and project service interfaces.
//!
//! The interactive core only talks to storage through these two traits, so
//! any backend (the bundled SQLite one, or a test double) can sit behind it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{project, todo, TodoStatus};

pub mod local;

pub use local::LocalService;

pub type Todo = todo::Model;
pub type Project = project::Model;

/// Errors surfaced by service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Arguments for creating a todo.
#[derive(Clone, Debug)]
pub struct NewTodo {
    pub title: String,
}

/// Partial update of a todo; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            status: None,
        }
    }

    pub fn status(status: TodoStatus) -> Self {
        Self {
            title: None,
            status: Some(status),
        }
    }
}

/// Per-status todo counts of one project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub open: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl ProjectStats {
    /// Tally a sequence of statuses.
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = TodoStatus>,
    {
        statuses.into_iter().fold(Self::default(), |mut stats, status| {
            match status {
                TodoStatus::Open => stats.open += 1,
                TodoStatus::InProgress => stats.in_progress += 1,
                TodoStatus::Done => stats.done += 1,
            }
            stats
        })
    }

    pub fn from_todos(todos: &[Todo]) -> Self {
        Self::from_statuses(todos.iter().map(|t| t.status))
    }
}

/// `2 open, 1 in progress, 3 done`, omitting zero in-progress and done clauses.
impl fmt::Display for ProjectStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} open", self.open)?;
        if self.in_progress > 0 {
            write!(f, ", {} in progress", self.in_progress)?;
        }
        if self.done > 0 {
            write!(f, ", {} done", self.done)?;
        }
        Ok(())
    }
}

/// A project together with its aggregated counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectWithStats {
    pub project: Project,
    pub stats: ProjectStats,
}

/// CRUD operations on the todos of a project.
#[async_trait]
pub trait TodoService: Send + Sync {
    async fn list(&self, project_id: Uuid) -> Result<Vec<Todo>, ServiceError>;
    async fn add(&self, project_id: Uuid, input: NewTodo) -> Result<Todo, ServiceError>;
    /// Returns `None` when no todo has the given id.
    async fn update(&self, todo_id: Uuid, patch: TodoPatch) -> Result<Option<Todo>, ServiceError>;
    /// Returns whether a todo was removed.
    async fn delete(&self, todo_id: Uuid) -> Result<bool, ServiceError>;
}

/// Project lookup and aggregation.
#[async_trait]
pub trait ProjectService: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError>;
    /// Exactly one project exists per distinct path.
    async fn get_or_create_project(&self, path: &Path) -> Result<Project, ServiceError>;
    async fn get_project_stats(&self, project_id: Uuid) -> Result<ProjectStats, ServiceError>;
}

/// Shared handles to the services, cheap to clone into background tasks.
#[derive(Clone)]
pub struct Services {
    pub todos: Arc<dyn TodoService>,
    pub projects: Arc<dyn ProjectService>,
}

impl Services {
    pub fn new(todos: Arc<dyn TodoService>, projects: Arc<dyn ProjectService>) -> Self {
        Self { todos, projects }
    }
}
