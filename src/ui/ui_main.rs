use ratatui::backend::Backend;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::app::{App, Focus};
use crate::ui::layout;
use crate::ui::widgets;

pub const TITLE: &str = " intentDemo — demo mode ";
pub const HELP: &str = "Tab:focus  ↑/↓:template  Enter:select/run  F5:run  PgUp/PgDn:log  q:quit";

/// Draw one frame using the provided Terminal.
pub fn draw_frame<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> std::io::Result<()> {
    terminal.draw(|f| ui(f, app)).map(|_| ())
}

/// Draw every surface into `f`.
pub fn ui(f: &mut Frame, app: &App) {
    let regions = layout::compute(f.area());
    let colors = crate::ui::colors::current();
    let state = &app.state;

    let title = Line::from(vec![Span::styled(TITLE, colors.title_style)]);
    f.render_widget(Paragraph::new(title).style(colors.block_style), regions.title);

    let templates_focused = state.focus == Focus::Templates;
    widgets::templates::render(f, regions.templates, &state.templates, templates_focused);
    widgets::intent::render(f, regions.intent, &state.intent, state.focus == Focus::Intent);
    widgets::run_button::render(f, regions.run, state.focus == Focus::Run);
    widgets::pulse::render(f, regions.pulse, &state.pulse);
    widgets::log::render(f, regions.log, &state.log);

    f.render_widget(Paragraph::new(HELP).style(colors.help_style), regions.help);
}
