// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A character that should be typed into a text field: printable and not
/// combined with Ctrl or Alt.
pub fn typed_char(ev: &KeyEvent) -> Option<char> {
    match ev.code {
        KeyCode::Char(c)
            if !ev
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}
