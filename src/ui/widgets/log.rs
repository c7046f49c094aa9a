use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};
use crate::app::LogBuffer;

/// Render the log, scrolled to the buffer's current view offset (the bottom
/// unless the user scrolled up).
pub fn render(f: &mut Frame, area: Rect, log: &LogBuffer) {
    let colors = crate::ui::colors::current();
    let block = super::surface_block(" Log ", false, &colors);
    let height = block.inner(area).height as usize;
    let offset = log.view_offset(height);
    let lines: Vec<Line> = log.lines().iter().map(|l| Line::raw(l.as_str())).collect();
    let p = Paragraph::new(lines).block(block).scroll((offset as u16, 0));
    f.render_widget(p, area);
}
