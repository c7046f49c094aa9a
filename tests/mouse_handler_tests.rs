use std::time::Instant;

use intentDemo::app::{App, Focus, PulseStyle};
use intentDemo::catalog;
use intentDemo::input::{MouseButton, MouseEvent, MouseEventKind};
use intentDemo::runner::handlers;
use intentDemo::ui::layout;
use ratatui::layout::Rect;

fn term() -> Rect {
    Rect::new(0, 0, 100, 24)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        column,
        row,
        kind: MouseEventKind::Down(MouseButton::Left),
    }
}

#[test]
fn clicking_each_template_fills_intent() {
    let regions = layout::compute(term());
    let mut app = App::default();
    for (i, t) in catalog().iter().enumerate() {
        let me = click(regions.templates.x + 3, regions.templates.y + 1 + i as u16);
        handlers::handle_mouse(&mut app, me, term(), Instant::now()).unwrap();
        assert_eq!(app.state.intent.value(), t.intent);
        assert_eq!(app.state.templates.selected(), i);
    }
    // Activation fills the field and nothing else: no run started.
    assert!(app.state.log.is_empty());
    assert_eq!(app.runner.pending(), 0);
}

#[test]
fn clicking_below_the_entries_changes_nothing() {
    let regions = layout::compute(term());
    let mut app = App::default();
    let me = click(regions.templates.x + 3, regions.templates.y + 6);
    handlers::handle_mouse(&mut app, me, term(), Instant::now()).unwrap();
    assert_eq!(app.state.intent.value(), "");
}

#[test]
fn clicking_run_starts_or_rejects() {
    let regions = layout::compute(term());
    let mut app = App::default();
    let run = click(regions.run.x + 2, regions.run.y + 1);

    handlers::handle_mouse(&mut app, run, term(), Instant::now()).unwrap();
    assert_eq!(app.focus(), Focus::Run);
    assert_eq!(app.state.pulse.style(), PulseStyle::Warn);
    assert!(app.state.log.is_empty());

    app.state.intent.set("hello");
    handlers::handle_mouse(&mut app, run, term(), Instant::now()).unwrap();
    assert_eq!(app.state.log.lines(), &["Intent: hello"]);
    assert_eq!(app.runner.pending(), 3);
}

#[test]
fn clicking_intent_focuses_it() {
    let regions = layout::compute(term());
    let mut app = App::default();
    let me = click(regions.intent.x + 1, regions.intent.y + 1);
    handlers::handle_mouse(&mut app, me, term(), Instant::now()).unwrap();
    assert_eq!(app.focus(), Focus::Intent);
}

#[test]
fn wheel_over_log_scrolls_it() {
    let regions = layout::compute(term());
    let mut app = App::default();
    for i in 0..50 {
        app.state.log.append(format!("{i}"));
    }
    let me = MouseEvent {
        column: regions.log.x + 2,
        row: regions.log.y + 2,
        kind: MouseEventKind::ScrollUp,
    };
    handlers::handle_mouse(&mut app, me, term(), Instant::now()).unwrap();
    assert!(!app.state.log.is_following());

    // The same wheel over the template list leaves the log alone.
    let mut other = App::default();
    for i in 0..50 {
        other.state.log.append(format!("{i}"));
    }
    let me = MouseEvent {
        column: regions.templates.x + 2,
        row: regions.templates.y + 2,
        kind: MouseEventKind::ScrollUp,
    };
    handlers::handle_mouse(&mut other, me, term(), Instant::now()).unwrap();
    assert!(other.state.log.is_following());
}

#[test]
fn short_terminal_clicks_follow_the_scrolled_list() {
    // Six rows leave room for two entries; with the last one selected the
    // list is drawn scrolled down by one.
    let short = Rect::new(0, 0, 100, 6);
    let regions = layout::compute(short);
    let mut app = App::default();
    app.state.templates.select(2);

    let me = click(regions.templates.x + 3, regions.templates.y + 2);
    handlers::handle_mouse(&mut app, me, short, Instant::now()).unwrap();
    assert_eq!(app.state.intent.value(), catalog()[2].intent);

    let me = click(regions.templates.x + 3, regions.templates.y + 1);
    handlers::handle_mouse(&mut app, me, short, Instant::now()).unwrap();
    assert_eq!(app.state.intent.value(), catalog()[1].intent);
    assert_eq!(app.state.templates.selected(), 1);
}
