//! Local storage module for project and todo persistence.
//!
//! Opens the SQLite database through SeaORM and creates the schema from the
//! entity definitions.

pub mod db;

pub use db::LocalStorage;
