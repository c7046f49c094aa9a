//! The observable surfaces of the demo: status pulse, log, intent field and
//! template list. Each one owns its data; drawing lives in `ui::widgets`.

use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use super::catalog::Template;
use crate::errors::ParseError;

/// Severity shown by the pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PulseStyle {
    #[default]
    Neutral,
    Warn,
    Ok,
}

impl PulseStyle {
    /// The style tag: `""`, `"warn"` or `"ok"`.
    pub fn tag(self) -> &'static str {
        match self {
            PulseStyle::Neutral => "",
            PulseStyle::Warn => "warn",
            PulseStyle::Ok => "ok",
        }
    }
}

impl fmt::Display for PulseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PulseStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(PulseStyle::Neutral),
            "warn" => Ok(PulseStyle::Warn),
            "ok" => Ok(PulseStyle::Ok),
            other => Err(ParseError::UnknownStyleTag(other.to_string())),
        }
    }
}

/// Single-line status indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pulse {
    message: String,
    style: PulseStyle,
}

impl Pulse {
    /// Replace both the text and the style.
    pub fn set(&mut self, message: impl Into<String>, style: PulseStyle) {
        self.message = message.into();
        self.style = style;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn style(&self) -> PulseStyle {
        self.style
    }

    /// Class list as the page used it: `pulse`, `pulse warn`, `pulse ok`.
    pub fn class(&self) -> String {
        match self.style {
            PulseStyle::Neutral => "pulse".to_string(),
            s => format!("pulse {}", s.tag()),
        }
    }
}

/// Append-only log with bottom-following scroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogBuffer {
    lines: Vec<String>,
    follow: bool,
    offset: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            follow: true,
            offset: 0,
        }
    }
}

impl LogBuffer {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.follow = true;
        self.offset = 0;
    }

    /// Append one line and snap the view back to the bottom.
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.follow = true;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Full text, one `\n`-terminated line per entry.
    pub fn text(&self) -> String {
        self.lines.iter().map(|l| format!("{l}\n")).collect()
    }

    fn max_offset(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height)
    }

    /// First visible line for a view `height` rows tall.
    pub fn view_offset(&self, height: usize) -> usize {
        if self.follow {
            self.max_offset(height)
        } else {
            self.offset.min(self.max_offset(height))
        }
    }

    pub fn scroll_up(&mut self, rows: usize, height: usize) {
        self.offset = self.view_offset(height).saturating_sub(rows);
        self.follow = self.offset >= self.max_offset(height);
    }

    pub fn scroll_down(&mut self, rows: usize, height: usize) {
        let max = self.max_offset(height);
        self.offset = (self.view_offset(height) + rows).min(max);
        self.follow = self.offset >= max;
    }
}

/// Free-text intent input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentField {
    value: String,
}

impl IntentField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last grapheme cluster, so `é` typed as `e` + combining
    /// accent goes away in one keypress.
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.value.grapheme_indices(true).next_back() {
            self.value.truncate(idx);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// One rendered, selectable template entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub label: String,
    pub intent: String,
}

/// Rendered template list plus the keyboard selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateList {
    entries: Vec<TemplateEntry>,
    selected: usize,
}

impl TemplateList {
    /// Clear and rebuild the entries from `catalog`, in catalog order.
    pub fn render(&mut self, catalog: &[Template]) {
        self.entries.clear();
        self.entries.extend(catalog.iter().map(|t| TemplateEntry {
            label: t.name.to_string(),
            intent: t.intent.to_string(),
        }));
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1) % self.entries.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.entries.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.entries.len() - 1);
        }
    }

    /// First entry shown in a list `height` rows tall: the top, unless the
    /// selection would fall below the last visible row.
    pub fn view_offset(&self, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        (self.selected + 1).saturating_sub(height)
    }

    /// Intent text of entry `index`, if it exists.
    pub fn intent_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.intent.as_str())
    }
}
