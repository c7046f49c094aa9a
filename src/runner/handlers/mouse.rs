use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::{App, Focus, Surface};
use crate::input::{MouseButton, MouseEvent, MouseEventKind};
use crate::ui::layout;

use super::start_run;

const SCROLL_ROWS: usize = 3;

/// Dispatch a mouse event using the same regions the frame was drawn with.
pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect, now: Instant) -> anyhow::Result<()> {
    let regions = layout::compute(term);
    let target = regions.surface_at(me.column, me.row);

    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => match target {
            Some(Surface::Templates) => {
                app.set_focus(Focus::Templates);
                if let Some(idx) = regions.template_index_at(me.row, &app.state.templates) {
                    app.activate_template(idx);
                }
            }
            Some(Surface::Intent) => app.set_focus(Focus::Intent),
            Some(Surface::Run) => {
                app.set_focus(Focus::Run);
                start_run(app, now);
            }
            _ => {}
        },
        MouseEventKind::ScrollUp if target == Some(Surface::Log) => {
            app.state.log.scroll_up(SCROLL_ROWS, regions.log_height());
        }
        MouseEventKind::ScrollDown if target == Some(Surface::Log) => {
            app.state.log.scroll_down(SCROLL_ROWS, regions.log_height());
        }
        _ => {}
    }
    Ok(())
}
