use anyhow::{Context, Result};
use log::info;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use std::path::Path;

use crate::config::StorageConfig;
use crate::entities::{project, todo};

/// Value of `database_path` that selects a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// SQLite-backed store for projects and todos.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Open the database described by the storage configuration.
    pub async fn open(config: &StorageConfig) -> Result<Self> {
        let path = config.resolved_database_path()?;
        if path.as_os_str() == IN_MEMORY {
            return Self::in_memory().await;
        }
        Self::open_file(&path).await
    }

    /// Open (or create) a database file.
    pub async fn open_file(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let url = format!("sqlite://{}?mode=rwc", path.display());
        let mut options = ConnectOptions::new(url);
        options.sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        info!("Storage: opened database at {}", path.display());
        let storage = Self { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Open a private in-memory database.
    pub async fn in_memory() -> Result<Self> {
        // A single pooled connection keeps the in-memory database alive and shared.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .context("Failed to open in-memory database")?;

        let storage = Self { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create tables that do not exist yet.
    async fn init_schema(&self) -> Result<()> {
        self.create_table(project::Entity).await?;
        self.create_table(todo::Entity).await?;
        Ok(())
    }

    async fn create_table<E>(&self, entity: E) -> Result<()>
    where
        E: EntityTrait,
    {
        let table = entity.table_name().to_string();
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);
        let mut statement = schema.create_table_from_entity(entity);
        statement.if_not_exists();

        self.conn
            .execute(backend.build(&statement))
            .await
            .with_context(|| format!("Failed to create table {}", table))?;
        Ok(())
    }
}
