//! Todo repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::todo::{self, TodoStatus};

/// Repository for todo-related database operations.
pub struct TodoRepository;

impl TodoRepository {
    /// Get all todos of a project, newest first.
    pub async fn get_for_project<C>(conn: &C, project_id: Uuid) -> Result<Vec<todo::Model>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        todo::Entity::find()
            .filter(todo::Column::ProjectId.eq(project_id))
            .order_by_desc(todo::Column::CreatedAt)
            .all(conn)
            .await
    }

    /// Get a single todo by id.
    pub async fn get_by_id<C>(conn: &C, id: Uuid) -> Result<Option<todo::Model>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        todo::Entity::find_by_id(id).one(conn).await
    }

    /// Get only the statuses of a project's todos.
    pub async fn statuses_for_project<C>(conn: &C, project_id: Uuid) -> Result<Vec<TodoStatus>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Self::get_for_project(conn, project_id)
            .await?
            .into_iter()
            .map(|t| t.status)
            .collect())
    }

    /// Insert a new open todo.
    pub async fn insert<C>(conn: &C, project_id: Uuid, title: &str) -> Result<todo::Model, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        todo::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            project_id: ActiveValue::Set(project_id),
            title: ActiveValue::Set(title.to_string()),
            status: ActiveValue::Set(TodoStatus::Open),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(conn)
        .await
    }

    /// Update a todo in the database.
    pub async fn update<C>(conn: &C, todo: todo::ActiveModel) -> Result<todo::Model, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        todo.update(conn).await
    }

    /// Delete a todo by id, returning whether a row was removed.
    pub async fn delete<C>(conn: &C, id: Uuid) -> Result<bool, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        let result = todo::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }
}
