use std::time::Instant;

use super::catalog::{catalog, Template};
use super::settings::Settings;
use super::state::UIState;
use super::types::{Focus, RunId};
use crate::errors::RunError;
use crate::runner::demo::DemoRunner;

pub struct App {
    pub state: UIState,
    pub runner: DemoRunner,
    pub settings: Settings,
    pub should_quit: bool,
    catalog: &'static [Template],
}

impl App {
    pub fn new(settings: Settings) -> Self {
        let catalog = catalog();
        App {
            state: UIState::new(catalog),
            runner: DemoRunner::new(settings.invalidate_stale_runs),
            settings,
            should_quit: false,
            catalog,
        }
    }

    pub fn catalog(&self) -> &'static [Template] {
        self.catalog
    }

    /// Rebuild the template list from the catalog.
    pub fn render_templates(&mut self) {
        self.state.templates.render(self.catalog);
    }

    pub fn activate_template(&mut self, index: usize) -> bool {
        self.state.activate_template(index)
    }

    /// Run the demo with whatever is in the intent field.
    pub fn trigger_run(&mut self, now: Instant) -> Result<RunId, RunError> {
        let intent = self.state.intent.value().to_owned();
        self.runner.run(&mut self.state, &intent, now)
    }

    /// Fire any demo steps that are due.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.runner.fire_due(&mut self.state, now)
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.state.focus = self.state.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.state.focus = self.state.focus.prev();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
