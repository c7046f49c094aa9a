//! Screen regions for every surface, computed from the terminal area.
//!
//! Drawing and mouse hit-testing both go through [`compute`] so a click
//! always lands on the surface that was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::app::{Surface, TemplateList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub templates: Rect,
    pub intent: Rect,
    pub run: Rect,
    pub pulse: Rect,
    pub log: Rect,
    pub help: Rect,
}

pub fn compute(area: Rect) -> Regions {
    // title (1), main (min), help (1)
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(rows[1]);

    // intent + run (3), pulse (3), log (min)
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(main[1]);

    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(9)])
        .split(right[0]);

    Regions {
        title: rows[0],
        templates: main[0],
        intent: input_row[0],
        run: input_row[1],
        pulse: right[1],
        log: right[2],
        help: rows[2],
    }
}

impl Regions {
    pub fn rect(&self, surface: Surface) -> Rect {
        match surface {
            Surface::Intent => self.intent,
            Surface::Run => self.run,
            Surface::Log => self.log,
            Surface::Pulse => self.pulse,
            Surface::Templates => self.templates,
        }
    }

    /// Surface under the given terminal cell.
    pub fn surface_at(&self, column: u16, row: u16) -> Option<Surface> {
        Surface::ALL
            .into_iter()
            .find(|s| self.rect(*s).contains(Position::new(column, row)))
    }

    /// Template index for a click on `row`. The list is bordered, so entries
    /// start one row below the top edge, and it may be scrolled to keep the
    /// selection visible.
    pub fn template_index_at(&self, row: u16, list: &TemplateList) -> Option<usize> {
        let first = self.templates.y + 1;
        let last = self.templates.bottom().saturating_sub(1);
        if row < first || row >= last {
            return None;
        }
        let idx = (row - first) as usize + list.view_offset(self.templates_height());
        (idx < list.len()).then_some(idx)
    }

    /// Rows of entries visible inside the bordered template block.
    pub fn templates_height(&self) -> usize {
        self.templates.height.saturating_sub(2) as usize
    }

    /// Rows of log text visible inside the bordered log block.
    pub fn log_height(&self) -> usize {
        self.log.height.saturating_sub(2) as usize
    }
}
