use crate::constants::{
    CURRENT_PROJECT_MARKER, ERROR_PREFIX, PROJECTS_EMPTY, PROJECTS_EMPTY_HELP, PROJECTS_HELP, PROJECTS_LOADING,
    PROJECTS_TITLE, SELECTED_PREFIX, UNSELECTED_PREFIX,
};
use crate::service::{Project, ProjectWithStats};
use crate::ui::core::{Action, Component, Effect};
use crossterm::event::{KeyCode, KeyEvent};
use log::{info, warn};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use uuid::Uuid;

const FIRST_PROJECT_ROW: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<ProjectWithStats>),
    Failed(String),
}

/// Project picker. Reloads the list with stats every time it is opened.
pub struct ProjectsComponent {
    current_project: Option<Uuid>,
    state: LoadState,
    selected_index: usize,
}

impl Default for ProjectsComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectsComponent {
    pub fn new() -> Self {
        Self {
            current_project: None,
            state: LoadState::Loading,
            selected_index: 0,
        }
    }

    /// Enter the view with `current` as the active project and start loading.
    pub fn open(&mut self, current: &Project) -> Action {
        self.current_project = Some(current.id);
        self.state = LoadState::Loading;
        self.selected_index = 0;
        Action::Run(Effect::LoadProjects)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn projects(&self) -> &[ProjectWithStats] {
        match &self.state {
            LoadState::Loaded(projects) => projects,
            _ => &[],
        }
    }

    fn is_current(&self, project: &Project) -> bool {
        self.current_project == Some(project.id)
    }

    fn row(&self, index: usize, entry: &ProjectWithStats) -> Line<'static> {
        let selected = index == self.selected_index;
        let current = self.is_current(&entry.project);

        let marker = if selected { SELECTED_PREFIX } else { UNSELECTED_PREFIX };
        let mut style = Style::default();
        if current {
            style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
        }
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let mut text = format!("{} {} ({})", marker, entry.project.name, entry.stats);
        if current {
            text.push_str(CURRENT_PROJECT_MARKER);
        }
        Line::from(Span::styled(text, style))
    }

    /// The whole frame as text lines, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        let title_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let title = match &self.state {
            LoadState::Loaded(projects) if !projects.is_empty() => format!("{} ({})", PROJECTS_TITLE, projects.len()),
            _ => PROJECTS_TITLE.to_string(),
        };
        let mut lines = vec![Line::styled(title, title_style), Line::default()];

        let help = match &self.state {
            LoadState::Loading => {
                lines.push(Line::styled(PROJECTS_LOADING, dim));
                PROJECTS_EMPTY_HELP
            }
            LoadState::Failed(message) => {
                lines.push(Line::styled(format!("{}{}", ERROR_PREFIX, message), Style::default().fg(Color::Red)));
                PROJECTS_EMPTY_HELP
            }
            LoadState::Loaded(projects) if projects.is_empty() => {
                lines.push(Line::styled(PROJECTS_EMPTY, dim));
                PROJECTS_EMPTY_HELP
            }
            LoadState::Loaded(projects) => {
                lines.extend(projects.iter().enumerate().map(|(i, entry)| self.row(i, entry)));
                PROJECTS_HELP
            }
        };

        lines.push(Line::default());
        lines.push(Line::styled(help, dim));
        lines
    }
}

impl Component for ProjectsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Esc => return Action::BackToTodos,
            KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }

        let count = self.projects().len();
        if count == 0 {
            return Action::None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected_index + 1 < count {
                    self.selected_index += 1;
                }
                Action::None
            }
            KeyCode::Enter => match self.projects().get(self.selected_index) {
                Some(entry) => Action::SelectProject(entry.project.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ProjectsLoaded { result } => {
                match result {
                    Ok(projects) => {
                        info!("Projects: loaded {} projects", projects.len());
                        self.selected_index = projects
                            .iter()
                            .position(|entry| self.is_current(&entry.project))
                            .unwrap_or(0);
                        self.state = LoadState::Loaded(projects);
                    }
                    Err(message) => {
                        warn!("Projects: load failed: {}", message);
                        self.state = LoadState::Failed(message);
                    }
                }
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let height = rect.height as usize;
        let selected_row = FIRST_PROJECT_ROW + self.selected_index;
        let scroll = if height == 0 { 0 } else { selected_row.saturating_sub(height - 1) };

        f.render_widget(Paragraph::new(self.lines()).scroll((scroll as u16, 0)), rect);
    }
}
