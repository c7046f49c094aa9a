pub mod intent;
pub mod log;
pub mod pulse;
pub mod run_button;
pub mod templates;

use ratatui::widgets::{Block, Borders};

use crate::ui::colors::Colors;

/// Bordered block shared by all surfaces; the border picks up the accent
/// colour when the surface has focus.
pub(crate) fn surface_block<'a>(title: &'a str, focused: bool, colors: &Colors) -> Block<'a> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(colors.block_style);
    if focused {
        block.border_style(colors.focused_border_style)
    } else {
        block
    }
}
