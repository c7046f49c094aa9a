use std::time::Instant;

use tracing::debug;

use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::{KeyCode, KeyEvent};

/// Run the demo with the current intent. A rejected run has already shown
/// its warning on the pulse, so the error only goes to the log file.
pub fn start_run(app: &mut App, now: Instant) {
    if let Err(e) = app.trigger_run(now) {
        debug!("run not started: {e}");
    }
}

pub fn handle_run_button(app: &mut App, key: &KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if keybinds::is_quit(key) {
        return Ok(true);
    }
    if keybinds::is_enter(key) || key.code == KeyCode::Char(' ') {
        start_run(app, now);
    }
    Ok(false)
}
