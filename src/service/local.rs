//! SQLite-backed implementation of the service traits.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use sea_orm::ActiveValue;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use super::{NewTodo, Project, ProjectService, ProjectStats, ServiceError, Todo, TodoPatch, TodoService};
use crate::entities::todo;
use crate::repositories::{ProjectRepository, TodoRepository};
use crate::storage::LocalStorage;

/// Service over the local database.
#[derive(Clone)]
pub struct LocalService {
    storage: Arc<LocalStorage>,
}

impl LocalService {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }

    /// Display name for a project path: its last component, or the whole path.
    pub fn project_name_for(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| path.display().to_string())
    }
}

fn clean_title(title: &str) -> Result<String, ServiceError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput("title cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[async_trait]
impl TodoService for LocalService {
    async fn list(&self, project_id: Uuid) -> Result<Vec<Todo>, ServiceError> {
        let todos = TodoRepository::get_for_project(&self.storage.conn, project_id).await?;
        debug!("LocalService: listed {} todos for project {}", todos.len(), project_id);
        Ok(todos)
    }

    async fn add(&self, project_id: Uuid, input: NewTodo) -> Result<Todo, ServiceError> {
        let title = clean_title(&input.title)?;
        if ProjectRepository::get_by_id(&self.storage.conn, project_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("project {}", project_id)));
        }

        let todo = TodoRepository::insert(&self.storage.conn, project_id, &title).await?;
        info!("LocalService: created todo {} '{}'", todo.id, todo.title);
        Ok(todo)
    }

    async fn update(&self, todo_id: Uuid, patch: TodoPatch) -> Result<Option<Todo>, ServiceError> {
        let Some(existing) = TodoRepository::get_by_id(&self.storage.conn, todo_id).await? else {
            return Ok(None);
        };

        let mut active: todo::ActiveModel = existing.into();
        if let Some(title) = &patch.title {
            active.title = ActiveValue::Set(clean_title(title)?);
        }
        if let Some(status) = patch.status {
            active.status = ActiveValue::Set(status);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = TodoRepository::update(&self.storage.conn, active).await?;
        info!(
            "LocalService: updated todo {} '{}' ({})",
            updated.id,
            updated.title,
            updated.status.as_str()
        );
        Ok(Some(updated))
    }

    async fn delete(&self, todo_id: Uuid) -> Result<bool, ServiceError> {
        let deleted = TodoRepository::delete(&self.storage.conn, todo_id).await?;
        info!("LocalService: delete todo {} -> {}", todo_id, deleted);
        Ok(deleted)
    }
}

#[async_trait]
impl ProjectService for LocalService {
    async fn list_projects(&self) -> Result<Vec<Project>, ServiceError> {
        Ok(ProjectRepository::get_all(&self.storage.conn).await?)
    }

    async fn get_or_create_project(&self, path: &Path) -> Result<Project, ServiceError> {
        let key = path.display().to_string();
        if key.is_empty() {
            return Err(ServiceError::InvalidInput("project path cannot be empty".to_string()));
        }

        if let Some(project) = ProjectRepository::get_by_path(&self.storage.conn, &key).await? {
            return Ok(project);
        }

        let project = ProjectRepository::insert(&self.storage.conn, &Self::project_name_for(path), &key).await?;
        info!("LocalService: created project '{}' for {}", project.name, key);
        Ok(project)
    }

    async fn get_project_stats(&self, project_id: Uuid) -> Result<ProjectStats, ServiceError> {
        let statuses = TodoRepository::statuses_for_project(&self.storage.conn, project_id).await?;
        Ok(ProjectStats::from_statuses(statuses))
    }
}
