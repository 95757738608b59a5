//! Todos - project-scoped todo lists in the terminal
//!
//! Every working directory is a project with its own list of todos, kept in
//! a local SQLite database and edited through a keyboard-driven interface
//! built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`storage`] - Local database and schema setup
//! * [`service`] - Todo and project service interfaces and their SQLite implementation
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and UI text
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Status icon themes
pub mod icons;

/// File logging setup
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Todo and project services
pub mod service;

/// SQLite storage
pub mod storage;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export entity models for convenient access
pub use entities::{project, todo};
