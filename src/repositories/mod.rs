//! Repository layer for database operations.
//!
//! Repositories are stateless query helpers generic over any
//! [`sea_orm::ConnectionTrait`], so the same query runs against a plain
//! connection or inside a transaction. Entities stay pure data models.

pub mod project;
pub mod todo;

pub use project::ProjectRepository;
pub use todo::TodoRepository;
