//! Reusable UI components

pub mod text_input;
pub mod todo_item;

// Views
pub mod projects_component;
pub mod todo_list_component;

// Component exports
pub use projects_component::{LoadState, ProjectsComponent};
pub use text_input::TextInput;
pub use todo_item::TodoItem;
pub use todo_list_component::TodoListComponent;
