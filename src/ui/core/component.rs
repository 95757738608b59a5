use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

pub trait Component {
    /// Translate a key press into an action, applying local state changes immediately.
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// React to an action routed to this component. Unhandled actions are returned.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
