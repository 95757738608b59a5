use uuid::Uuid;

use super::effects::Effect;
use crate::service::{Project, ProjectWithStats, Todo};

/// Everything that can change application state: intents produced by key
/// handling and the results of finished effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation between views
    SwitchToProjects,
    BackToTodos,
    SelectProject(Project),

    /// Hand a side effect to the task manager.
    Run(Effect),

    // Effect results
    TodosLoaded {
        project_id: Uuid,
        result: Result<Vec<Todo>, String>,
    },
    TodoAdded {
        project_id: Uuid,
        result: Result<Todo, String>,
    },
    TodoUpdated {
        project_id: Uuid,
        todo_id: Uuid,
        result: Result<Option<Todo>, String>,
    },
    TodoDeleted {
        project_id: Uuid,
        todo_id: Uuid,
        result: Result<bool, String>,
    },
    ProjectsLoaded {
        result: Result<Vec<ProjectWithStats>, String>,
    },

    // App control
    Quit,
    None,
}

impl Action {
    /// True for actions carrying the outcome of an effect.
    pub fn is_effect_result(&self) -> bool {
        matches!(
            self,
            Action::TodosLoaded { .. }
                | Action::TodoAdded { .. }
                | Action::TodoUpdated { .. }
                | Action::TodoDeleted { .. }
                | Action::ProjectsLoaded { .. }
        )
    }
}
