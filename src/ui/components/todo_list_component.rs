//! The todo list view.
//!
//! Row 0 is the new-todo input; rows `1..=len` are the todos of the active
//! project. The component keeps the selection and edit state on top of a
//! [`TodoSync`] cache and never lets either point at a row that is gone.

use crate::config::UiConfig;
use crate::constants::{
    EDIT_HELP, ERROR_PREFIX, NEW_TODO_MARKER, NEW_TODO_PLACEHOLDER, SELECTED_PREFIX, SEPARATOR_WIDTH, TODOS_EMPTY,
    TODOS_HELP, TODOS_LOADING, TODOS_TITLE, UNSELECTED_PREFIX,
};
use crate::icons::IconService;
use crate::service::{Project, Todo};
use crate::ui::components::text_input::TextInput;
use crate::ui::components::todo_item::TodoItem;
use crate::ui::core::{Action, Component, FailureKind, TodoSync};
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use uuid::Uuid;

// Fixed rows of the rendered frame
const INPUT_ROW: usize = 2;
const FIRST_TODO_ROW: usize = 4;

/// An in-progress title edit, bound to the todo id rather than its row.
#[derive(Debug, Clone)]
struct EditState {
    todo_id: Uuid,
    input: TextInput,
}

pub struct TodoListComponent {
    project: Project,
    sync: TodoSync,
    selected_index: usize,
    editing: Option<EditState>,
    new_todo: TextInput,
    icons: IconService,
    show_ids: bool,
}

impl TodoListComponent {
    pub fn new(project: Project, ui: &UiConfig) -> Self {
        Self {
            sync: TodoSync::new(project.id),
            project,
            selected_index: 0,
            editing: None,
            new_todo: TextInput::new(),
            icons: IconService::new(ui.icon_theme),
            show_ids: ui.show_ids,
        }
    }

    /// First load of the project's todos.
    pub fn init(&mut self) -> Action {
        Action::Run(self.sync.refresh())
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn sync(&self) -> &TodoSync {
        &self.sync
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Row being edited, derived from the edited todo's current position.
    pub fn editing_index(&self) -> Option<usize> {
        let edit = self.editing.as_ref()?;
        self.sync.position(edit.todo_id).map(|i| i + 1)
    }

    pub fn edit_text(&self) -> Option<&str> {
        self.editing.as_ref().map(|edit| edit.input.value())
    }

    pub fn new_todo_text(&self) -> &str {
        self.new_todo.value()
    }

    /// Point the view at another project. A different project resets the
    /// view and returns the refresh to run.
    pub fn set_project(&mut self, project: Project) -> Action {
        if project.id == self.project.id {
            self.project = project;
            return Action::None;
        }

        let effect = self.sync.switch_project(project.id);
        self.project = project;
        self.selected_index = 0;
        self.editing = None;
        self.new_todo.clear();
        effect.map(Action::Run).unwrap_or(Action::None)
    }

    fn selected_todo(&self) -> Option<&Todo> {
        if self.selected_index == 0 {
            return None;
        }
        self.sync.todos().get(self.selected_index - 1)
    }

    fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_down(&mut self) {
        if self.selected_index < self.sync.len() {
            self.selected_index += 1;
        }
    }

    /// Re-establish the selection and edit invariants after the list changed.
    fn reconcile(&mut self) {
        self.selected_index = self.selected_index.min(self.sync.len());

        if let Some(edit) = &self.editing {
            if self.sync.position(edit.todo_id).is_none() {
                debug!("TodoList: edited todo {} disappeared, leaving edit mode", edit.todo_id);
                self.editing = None;
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => {
                self.editing = None;
                Action::None
            }
            KeyCode::Enter => {
                // Leave edit mode before the update resolves
                let Some(edit) = self.editing.take() else {
                    return Action::None;
                };
                let Some(todo) = self.sync.position(edit.todo_id).map(|i| &self.sync.todos()[i]) else {
                    return Action::None;
                };
                self.sync
                    .update_todo_title(todo, edit.input.value())
                    .map(Action::Run)
                    .unwrap_or(Action::None)
            }
            _ => {
                if let Some(edit) = self.editing.as_mut() {
                    edit.input.handle_key(key);
                }
                Action::None
            }
        }
    }

    fn handle_input_row_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.move_up();
                Action::None
            }
            KeyCode::Down => {
                self.move_down();
                Action::None
            }
            KeyCode::Left => Action::SwitchToProjects,
            KeyCode::Esc => Action::Quit,
            KeyCode::Enter => match self.sync.add_todo(self.new_todo.value()) {
                Some(effect) => {
                    self.new_todo.clear();
                    Action::Run(effect)
                }
                None => Action::None,
            },
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete | KeyCode::Home | KeyCode::End => {
                self.new_todo.handle_key(key);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_todo_row_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                Action::None
            }
            KeyCode::Left => Action::SwitchToProjects,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') => Action::Run(self.sync.refresh()),
            KeyCode::Char(' ') => match self.selected_todo() {
                Some(todo) => Action::Run(self.sync.toggle_todo(todo)),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Char('x') => match self.selected_todo() {
                Some(todo) => Action::Run(self.sync.delete_todo(todo)),
                None => Action::None,
            },
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(todo) = self.selected_todo() {
                    self.editing = Some(EditState {
                        todo_id: todo.id,
                        input: TextInput::with_text(&todo.title),
                    });
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn header(&self) -> Line<'static> {
        Line::from(Span::styled(
            format!("{} - {} ({})", TODOS_TITLE, self.project.name, self.sync.stats()),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
    }

    fn input_line(&self) -> Line<'static> {
        let selected = self.selected_index == 0 && self.editing.is_none();
        let marker = if selected { SELECTED_PREFIX } else { UNSELECTED_PREFIX };
        let prefix = Span::styled(
            format!("{} {}", marker, NEW_TODO_MARKER),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );

        let text = if self.new_todo.is_empty() && !selected {
            Span::styled(NEW_TODO_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.new_todo.value().to_string())
        };

        Line::from(vec![prefix, text])
    }

    fn todo_item(&self, index: usize) -> Option<TodoItem<'_>> {
        let todo = self.sync.todos().get(index)?;
        let editing = self
            .editing
            .as_ref()
            .filter(|edit| edit.todo_id == todo.id)
            .map(|edit| &edit.input);

        Some(TodoItem {
            todo,
            selected: self.selected_index == index + 1,
            editing,
            icons: &self.icons,
            show_ids: self.show_ids,
        })
    }

    fn shows_rows(&self) -> bool {
        !self.sync.is_loading()
            && !self.sync.is_empty()
            && !matches!(self.sync.error(), Some(e) if e.kind == FailureKind::LoadFailure)
    }

    /// The whole frame as text lines, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        let error_style = Style::default().fg(Color::Red);

        let mut lines = vec![self.header(), Line::default(), self.input_line()];

        let load_error = self.sync.error().filter(|e| e.kind == FailureKind::LoadFailure);
        if self.sync.is_loading() {
            lines.push(Line::styled(TODOS_LOADING, dim));
        } else if let Some(error) = load_error {
            lines.push(Line::styled(format!("{}{}", ERROR_PREFIX, error.message), error_style));
        } else if self.sync.is_empty() {
            lines.push(Line::styled(TODOS_EMPTY, dim));
        } else {
            lines.push(Line::styled("─".repeat(SEPARATOR_WIDTH), dim));
            lines.extend((0..self.sync.len()).filter_map(|i| self.todo_item(i)).map(|item| item.line()));
        }

        if let Some(error) = self.sync.error().filter(|e| e.kind == FailureKind::MutationFailure) {
            lines.push(Line::default());
            lines.push(Line::styled(format!("{}{}", ERROR_PREFIX, error.message), error_style));
        }

        lines.push(Line::default());
        let help = if self.editing.is_some() { EDIT_HELP } else { TODOS_HELP };
        lines.push(Line::styled(help, dim));

        lines
    }

    /// Terminal cursor as (column, row) within the frame, while text is being typed.
    pub fn cursor(&self) -> Option<(u16, u16)> {
        if self.editing.is_some() {
            let index = self.editing_index()? - 1;
            if !self.shows_rows() {
                return None;
            }
            let column = self.todo_item(index)?.cursor_column()?;
            return Some((column, (FIRST_TODO_ROW + index) as u16));
        }

        if self.selected_index == 0 {
            let prefix = format!("{} {}", SELECTED_PREFIX, NEW_TODO_MARKER);
            let column = Span::raw(prefix).width() + Span::raw(self.new_todo.before_cursor()).width();
            return Some((column as u16, INPUT_ROW as u16));
        }

        None
    }

    fn selected_row(&self) -> usize {
        if self.selected_index == 0 || !self.shows_rows() {
            INPUT_ROW
        } else {
            FIRST_TODO_ROW + self.selected_index - 1
        }
    }
}

impl Component for TodoListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing.is_some() {
            return self.handle_edit_key(key);
        }

        if self.selected_index == 0 {
            self.handle_input_row_key(key)
        } else {
            self.handle_todo_row_key(key)
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::TodosLoaded { project_id, result } => {
                self.sync.on_loaded(project_id, result);
            }
            Action::TodoAdded { project_id, result } => {
                if self.sync.on_added(project_id, result).is_some() {
                    self.selected_index = 1;
                }
            }
            Action::TodoUpdated {
                project_id,
                todo_id,
                result,
            } => {
                self.sync.on_updated(project_id, todo_id, result);
            }
            Action::TodoDeleted {
                project_id,
                todo_id,
                result,
            } => {
                self.sync.on_deleted(project_id, todo_id, result);
            }
            other => return other,
        }

        self.reconcile();
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let height = rect.height as usize;
        let scroll = if height == 0 {
            0
        } else {
            self.selected_row().saturating_sub(height - 1)
        };

        f.render_widget(Paragraph::new(self.lines()).scroll((scroll as u16, 0)), rect);

        if let Some((column, row)) = self.cursor() {
            let row = row.saturating_sub(scroll as u16);
            if (row as usize) < height {
                f.set_cursor_position((rect.x + column, rect.y + row));
            }
        }
    }
}
