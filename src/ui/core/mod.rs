//! Core UI functionality.
//!
//! # Architecture
//!
//! 1. **Components** implement [`Component`]: key handling is synchronous and
//!    returns an [`Action`]; rendering is a pure function of component state.
//! 2. **Actions** carry intents and the results of finished effects.
//! 3. **Effects** describe service calls; the [`TaskManager`] runs them in the
//!    background and sends the result action back to the UI loop.
//! 4. [`TodoSync`] is the write-through cache of the active project's todos.
//! 5. The [`EventHandler`] polls the terminal for input.

pub mod actions;
pub mod component;
pub mod effects;
pub mod event_handler;
pub mod task_manager;
pub mod todo_sync;

pub use actions::Action;
pub use component::Component;
pub use effects::Effect;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
pub use todo_sync::{FailureKind, SyncError, TodoSync};
