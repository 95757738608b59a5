//! Project repository for database operations.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::project;

/// Repository for project-related database operations.
pub struct ProjectRepository;

impl ProjectRepository {
    /// Get all projects ordered by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<project::Model>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find()
            .order_by_asc(project::Column::Name)
            .all(conn)
            .await
    }

    /// Get a single project by id.
    pub async fn get_by_id<C>(conn: &C, id: Uuid) -> Result<Option<project::Model>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find_by_id(id).one(conn).await
    }

    /// Get a single project by its filesystem path.
    pub async fn get_by_path<C>(conn: &C, path: &str) -> Result<Option<project::Model>, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        project::Entity::find()
            .filter(project::Column::Path.eq(path))
            .one(conn)
            .await
    }

    /// Insert a new project.
    pub async fn insert<C>(conn: &C, name: &str, path: &str) -> Result<project::Model, sea_orm::DbErr>
    where
        C: ConnectionTrait,
    {
        project::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            path: ActiveValue::Set(path.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(conn)
        .await
    }
}
