use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use crate::app::Pulse;

pub fn render(f: &mut Frame, area: Rect, pulse: &Pulse) {
    let colors = crate::ui::colors::current();
    let p = Paragraph::new(pulse.message())
        .block(super::surface_block(" Status ", false, &colors))
        .style(colors.pulse_style(pulse.style()));
    f.render_widget(p, area);
}
