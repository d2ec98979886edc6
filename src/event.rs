use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tracing::error;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal focus regained; treated as the app coming to the foreground.
    Foreground,
    Background,
    Tick,
    Resize(u16, u16),
}

impl AppEvent {
    fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::FocusGained => Some(AppEvent::Foreground),
            Event::FocusLost => Some(AppEvent::Background),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Paste(_) => None,
        }
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Run `source` on a background thread. It returns `Ok(None)` when
    /// nothing arrived within the tick rate. The thread stops on the first
    /// error, which closes the channel so `next` fails instead of blocking.
    pub fn with_source<F>(tick_rate: Duration, mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            loop {
                let app_event = match source(tick_rate) {
                    Ok(Some(raw)) => AppEvent::from_terminal(raw),
                    Ok(None) => Some(AppEvent::Tick),
                    Err(err) => {
                        error!("terminal event source failed: {err}");
                        return;
                    }
                };
                if let Some(app_event) = app_event {
                    if tx.send(app_event).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_idle_source_yields_ticks() {
        let events = EventHandler::with_source(Duration::from_millis(1), |_| Ok(None));
        assert!(matches!(events.next().unwrap(), AppEvent::Tick));
    }

    #[test]
    fn test_focus_maps_to_app_state() {
        let mut queue = vec![Event::FocusLost, Event::FocusGained];
        let events = EventHandler::with_source(Duration::from_millis(1), move |_| {
            Ok(queue.pop())
        });
        assert!(matches!(events.next().unwrap(), AppEvent::Foreground));
        assert!(matches!(events.next().unwrap(), AppEvent::Background));
    }

    #[test]
    fn test_source_error_closes_channel() {
        let mut sent = false;
        let events = EventHandler::with_source(Duration::from_millis(1), move |_| {
            if sent {
                return Err(io::Error::other("tty gone"));
            }
            sent = true;
            Ok(Some(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE))))
        });
        assert!(matches!(events.next().unwrap(), AppEvent::Key(_)));
        assert!(events.next().is_err());
    }
}
