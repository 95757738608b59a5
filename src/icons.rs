//! Icon service for todo status markers
//!
//! Two themes are available: bracketed ASCII markers that work in any
//! terminal, and single-cell Unicode glyphs.

use crate::entities::TodoStatus;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Unicode symbols
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Todo status icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub open: &'static str,
    pub in_progress: &'static str,
    pub done: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    #[must_use]
    pub fn icons(&self) -> StatusIcons {
        match self.current_theme {
            IconTheme::Unicode => StatusIcons {
                open: "○",
                in_progress: "◐",
                done: "●",
            },
            IconTheme::Ascii => StatusIcons {
                open: "[ ]",
                in_progress: "[~]",
                done: "[x]",
            },
        }
    }

    /// Icon for a todo status
    #[must_use]
    pub fn status(&self, status: TodoStatus) -> &'static str {
        let icons = self.icons();
        match status {
            TodoStatus::Open => icons.open,
            TodoStatus::InProgress => icons.in_progress,
            TodoStatus::Done => icons.done,
        }
    }
}
