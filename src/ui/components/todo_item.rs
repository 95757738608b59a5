use crate::constants::{SELECTED_PREFIX, UNSELECTED_PREFIX};
use crate::entities::TodoStatus;
use crate::icons::IconService;
use crate::service::Todo;
use crate::ui::components::text_input::TextInput;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// One todo row: `<prefix> <status icon> <title> <short id>`.
pub struct TodoItem<'a> {
    pub todo: &'a Todo,
    pub selected: bool,
    /// Edit buffer shown in place of the title
    pub editing: Option<&'a TextInput>,
    pub icons: &'a IconService,
    pub show_ids: bool,
}

impl TodoItem<'_> {
    fn prefix(&self) -> String {
        let marker = if self.selected { SELECTED_PREFIX } else { UNSELECTED_PREFIX };
        format!("{} {} ", marker, self.icons.status(self.todo.status))
    }

    /// Column of the edit cursor, relative to the start of the row.
    pub fn cursor_column(&self) -> Option<u16> {
        let input = self.editing?;
        let width = Span::raw(self.prefix()).width() + Span::raw(input.before_cursor()).width();
        Some(width as u16)
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        let prefix_style = if self.selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(self.prefix(), prefix_style));

        if let Some(input) = self.editing {
            spans.push(Span::styled(
                input.value().to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
            ));
            return Line::from(spans);
        }

        let title_style = match (self.todo.status, self.selected) {
            (TodoStatus::Done, _) => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
            (TodoStatus::InProgress, _) => Style::default().fg(Color::Yellow),
            (TodoStatus::Open, true) => Style::default().add_modifier(Modifier::BOLD),
            (TodoStatus::Open, false) => Style::default(),
        };
        spans.push(Span::styled(self.todo.title.clone(), title_style));

        if self.show_ids {
            spans.push(Span::styled(
                format!(" {}", self.todo.short_id()),
                Style::default().fg(Color::DarkGray),
            ));
        }

        Line::from(spans)
    }
}
