use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::Duration;

/// Polls the terminal for input without blocking the runtime for long.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_timeout: Duration::from_millis(50),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        if poll(Duration::from_millis(0))? {
            return Ok(Self::classify(crossterm::event::read()?));
        }

        // Give background tasks a chance to report before polling again
        tokio::time::sleep(self.poll_timeout).await;
        Ok(EventType::Tick)
    }

    fn classify(event: Event) -> EventType {
        match event {
            // Ignore release/repeat events reported by some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
