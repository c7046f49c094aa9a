use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyEvent;

/// Keys while the template list has focus: move the selection, Enter fills
/// the intent field from the selected entry.
pub fn handle_templates(app: &mut App, key: &KeyEvent) -> anyhow::Result<bool> {
    if keybinds::is_quit(key) {
        return Ok(true);
    }
    if keybinds::is_up(key) {
        app.state.templates.select_prev();
    } else if keybinds::is_down(key) {
        app.state.templates.select_next();
    } else if keybinds::is_enter(key) {
        let idx = app.state.templates.selected();
        if app.activate_template(idx) {
            tracing::debug!(index = idx, "template activated");
        }
    }
    Ok(false)
}
