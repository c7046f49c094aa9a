//! Key and mouse dispatch. The top-level handler deals with global keys and
//! then delegates to the submodule of the focused surface.

pub mod intent_input;
pub mod mouse;
pub mod run_button;
pub mod templates;

pub use intent_input::handle_intent;
pub use mouse::handle_mouse;
pub use run_button::{handle_run_button, start_run};
pub use templates::handle_templates;

use std::time::Instant;

use crate::app::settings::keybinds;
use crate::app::{App, Focus};
use crate::input::KeyEvent;

/// Handle one key press. Returns `Ok(true)` when the app should exit.
///
/// `page_size` is the number of visible log rows, used for PgUp/PgDn.
pub fn handle_key(
    app: &mut App,
    key: KeyEvent,
    page_size: usize,
    now: Instant,
) -> anyhow::Result<bool> {
    if keybinds::is_force_quit(&key) {
        return Ok(true);
    }
    if keybinds::is_run(&key) {
        start_run(app, now);
        return Ok(false);
    }
    if keybinds::is_tab(&key) {
        app.focus_next();
        return Ok(false);
    }
    if keybinds::is_backtab(&key) {
        app.focus_prev();
        return Ok(false);
    }
    if keybinds::is_page_up(&key) {
        app.state.log.scroll_up(page_size.max(1), page_size);
        return Ok(false);
    }
    if keybinds::is_page_down(&key) {
        app.state.log.scroll_down(page_size.max(1), page_size);
        return Ok(false);
    }

    match app.focus() {
        Focus::Templates => handle_templates(app, &key),
        Focus::Intent => handle_intent(app, &key, now),
        Focus::Run => handle_run_button(app, &key, now),
    }
}
