//! Terminal input: a thin layer over crossterm events so handlers and tests
//! work with small owned types.

pub mod keyboard;
pub mod mouse;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use mouse::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Only presses; releases and repeats would double-apply keys on
            // terminals that report them.
            Event::Key(k) if k.kind == event::KeyEventKind::Press => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(MouseEvent::from(m)),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
