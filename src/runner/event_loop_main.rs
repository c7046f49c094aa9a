use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::info;

use crate::app::settings::Settings;
use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// How long to wait for input: until the next demo step is due, but never
/// longer than `tick`.
pub fn poll_timeout(next_due: Option<Instant>, now: Instant, tick: Duration) -> Duration {
    match next_due {
        Some(due) => due.saturating_duration_since(now).min(tick),
        None => tick,
    }
}

pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    let mut terminal = init_terminal(settings.mouse_enabled)?;
    let mut app = App::new(settings);
    info!(
        invalidate_stale_runs = app.settings.invalidate_stale_runs,
        "intentDemo started"
    );

    // Restore the terminal even when the loop fails.
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal(terminal)?;
    info!("intentDemo exiting");
    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let tick = Duration::from_millis(app.settings.tick_ms.max(1));

    while !app.should_quit {
        app.tick(Instant::now());
        ui::draw_frame(terminal, app)?;

        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let page_size = ui::layout::compute(area).log_height();

        let timeout = poll_timeout(app.runner.next_deadline(), Instant::now(), tick);
        if !poll(timeout)? {
            continue;
        }
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(app, key, page_size, Instant::now())? {
                    app.should_quit = true;
                }
            }
            InputEvent::Mouse(me) if app.settings.mouse_enabled => {
                handlers::handle_mouse(app, me, area, Instant::now())?;
            }
            InputEvent::Resize(_, _) | InputEvent::Mouse(_) | InputEvent::Other => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_waits_for_next_step_but_caps_at_tick() {
        let now = Instant::now();
        let tick = Duration::from_millis(100);
        assert_eq!(poll_timeout(None, now, tick), tick);
        assert_eq!(
            poll_timeout(Some(now + Duration::from_millis(30)), now, tick),
            Duration::from_millis(30)
        );
        assert_eq!(poll_timeout(Some(now + Duration::from_secs(2)), now, tick), tick);
        assert_eq!(poll_timeout(Some(now), now + Duration::from_millis(5), tick), Duration::ZERO);
    }
}
