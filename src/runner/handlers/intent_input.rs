use std::time::Instant;

use crate::app::settings::keybinds;
use crate::app::{App, Focus};
use crate::input::keyboard::typed_char;
use crate::input::KeyEvent;

use super::start_run;

/// Keys while the intent field has focus. Every printable key is text, so
/// the quit key does not apply here.
pub fn handle_intent(app: &mut App, key: &KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if keybinds::is_enter(key) {
        start_run(app, now);
    } else if keybinds::is_backspace(key) {
        app.state.intent.backspace();
    } else if keybinds::is_esc(key) {
        app.set_focus(Focus::Templates);
    } else if let Some(c) = typed_char(key) {
        app.state.intent.push(c);
    }
    Ok(false)
}
