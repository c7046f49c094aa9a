use ratatui::{layout::{Alignment, Rect}, widgets::{Block, Borders, Paragraph}, Frame};

pub const LABEL: &str = "Run";

pub fn render(f: &mut Frame, area: Rect, focused: bool) {
    let colors = crate::ui::colors::current();
    let style = if focused { colors.run_button_focused_style } else { colors.run_button_style };
    let p = Paragraph::new(LABEL)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(colors.block_style))
        .style(style);
    f.render_widget(p, area);
}
