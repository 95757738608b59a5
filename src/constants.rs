//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// File locations
pub const APP_DIR: &str = "todos";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_FILE_NAME: &str = "todos.toml";
pub const DATABASE_FILE_NAME: &str = "todos.db";
pub const LOG_FILE_NAME: &str = "todos.log";

// Todo list view
pub const TODOS_TITLE: &str = "todo";
pub const NEW_TODO_MARKER: &str = "[+] ";
pub const NEW_TODO_PLACEHOLDER: &str = "Add new todo...";
pub const TODOS_LOADING: &str = "Loading todos...";
pub const TODOS_EMPTY: &str = "No todos yet. Add one above!";
pub const TODOS_HELP: &str = "↑/↓ navigate  space toggle  e edit  d delete  r refresh  ← projects  q quit";
pub const EDIT_HELP: &str = "enter save  esc cancel";
pub const SEPARATOR_WIDTH: usize = 41;

// Projects view
pub const PROJECTS_TITLE: &str = "Projects";
pub const PROJECTS_LOADING: &str = "Loading projects...";
pub const PROJECTS_EMPTY: &str = "No projects found.";
pub const PROJECTS_EMPTY_HELP: &str = "→ or Esc to go back";
pub const PROJECTS_HELP: &str = "↑/↓ navigate  enter select  → back  q quit";

// Selection markers
pub const SELECTED_PREFIX: &str = ">";
pub const UNSELECTED_PREFIX: &str = " ";
pub const CURRENT_PROJECT_MARKER: &str = " *";

// Messages
pub const ERROR_PREFIX: &str = "Error: ";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_NOT_A_TERMINAL: &str = "Error: Interactive TUI requires a terminal (TTY).";
