use ratatui::{layout::{Position, Rect}, widgets::Paragraph, Frame};
use unicode_width::UnicodeWidthStr;
use crate::app::IntentField;

/// Render the intent input. Long text scrolls so the end stays visible, and
/// the terminal cursor is placed after it while focused. Offsets are in
/// terminal columns, so wide characters count twice.
pub fn render(f: &mut Frame, area: Rect, field: &IntentField, focused: bool) {
    let colors = crate::ui::colors::current();
    let block = super::surface_block(" Intent ", focused, &colors);
    let inner = block.inner(area);

    let width = u16::try_from(field.value().width()).unwrap_or(u16::MAX);
    let room = inner.width.saturating_sub(1);
    let skip = width.saturating_sub(room);

    let p = Paragraph::new(field.value()).block(block).scroll((0, skip));
    f.render_widget(p, area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position(Position::new(inner.x + (width - skip).min(room), inner.y));
    }
}
