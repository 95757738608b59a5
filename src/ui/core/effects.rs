//! Side effects requested by the UI.
//!
//! Views never await services themselves. They return an [`Effect`], the
//! task manager runs it, and the outcome comes back as exactly one
//! [`Action`] carrying either the service's value or an error message.

use log::warn;
use uuid::Uuid;

use super::actions::Action;
use crate::service::{NewTodo, ProjectWithStats, ServiceError, Services, TodoPatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadTodos { project_id: Uuid },
    AddTodo { project_id: Uuid, title: String },
    UpdateTodo { project_id: Uuid, todo_id: Uuid, patch: TodoPatch },
    DeleteTodo { project_id: Uuid, todo_id: Uuid },
    LoadProjects,
}

impl Effect {
    /// Short description used in logs.
    pub fn describe(&self) -> String {
        match self {
            Effect::LoadTodos { project_id } => format!("Load todos for project {}", project_id),
            Effect::AddTodo { title, .. } => format!("Add todo '{}'", title),
            Effect::UpdateTodo { todo_id, .. } => format!("Update todo {}", todo_id),
            Effect::DeleteTodo { todo_id, .. } => format!("Delete todo {}", todo_id),
            Effect::LoadProjects => "Load projects".to_string(),
        }
    }

    /// Perform the service call and wrap its outcome in a result action.
    pub async fn execute(self, services: &Services) -> Action {
        match self {
            Effect::LoadTodos { project_id } => Action::TodosLoaded {
                project_id,
                result: services.todos.list(project_id).await.map_err(|e| failure("load todos", e)),
            },
            Effect::AddTodo { project_id, title } => Action::TodoAdded {
                project_id,
                result: services
                    .todos
                    .add(project_id, NewTodo { title })
                    .await
                    .map_err(|e| failure("add todo", e)),
            },
            Effect::UpdateTodo {
                project_id,
                todo_id,
                patch,
            } => Action::TodoUpdated {
                project_id,
                todo_id,
                result: services
                    .todos
                    .update(todo_id, patch)
                    .await
                    .map_err(|e| failure("update todo", e)),
            },
            Effect::DeleteTodo { project_id, todo_id } => Action::TodoDeleted {
                project_id,
                todo_id,
                result: services.todos.delete(todo_id).await.map_err(|e| failure("delete todo", e)),
            },
            Effect::LoadProjects => Action::ProjectsLoaded {
                result: load_projects_with_stats(services).await,
            },
        }
    }
}

fn failure(operation: &str, error: ServiceError) -> String {
    warn!("Failed to {}: {}", operation, error);
    error.to_string()
}

/// Fetch every project, then all of their stats concurrently.
async fn load_projects_with_stats(services: &Services) -> Result<Vec<ProjectWithStats>, String> {
    let projects = services
        .projects
        .list_projects()
        .await
        .map_err(|e| failure("load projects", e))?;

    let handles: Vec<_> = projects
        .iter()
        .map(|project| {
            let service = services.projects.clone();
            let project_id = project.id;
            tokio::spawn(async move { service.get_project_stats(project_id).await })
        })
        .collect();

    let mut with_stats = Vec::with_capacity(projects.len());
    for (project, handle) in projects.into_iter().zip(handles) {
        let stats = handle
            .await
            .map_err(|e| format!("Stats task failed: {}", e))?
            .map_err(|e| failure("load project stats", e))?;
        with_stats.push(ProjectWithStats { project, stats });
    }

    Ok(with_stats)
}
