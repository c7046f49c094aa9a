use ratatui::style::{Modifier, Style};
use crate::app::PulseStyle;
use crate::ui::Theme;
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Concrete styles derived from the active theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Colors {
	pub title_style: Style,
	pub block_style: Style,
	pub focused_border_style: Style,
	pub selected_style: Style,
	pub run_button_style: Style,
	pub run_button_focused_style: Style,
	pub pulse_neutral_style: Style,
	pub pulse_warn_style: Style,
	pub pulse_ok_style: Style,
	pub help_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn derive(theme: &Theme) -> Colors {
	let base = theme.style_fg();
	Colors {
		title_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		block_style: base,
		focused_border_style: base.fg(theme.accent),
		selected_style: Style::default().fg(theme.bg).bg(theme.accent),
		run_button_style: base.add_modifier(Modifier::BOLD),
		run_button_focused_style: Style::default()
			.fg(theme.bg)
			.bg(theme.accent)
			.add_modifier(Modifier::BOLD),
		pulse_neutral_style: base,
		pulse_warn_style: base.fg(theme.warn),
		pulse_ok_style: base.fg(theme.ok),
		help_style: base.add_modifier(Modifier::DIM),
	}
}

/// Derive runtime styles from `theme` and make them current.
pub fn set_from_theme(theme: &Theme) {
	*CURRENT.lock().unwrap_or_else(|e| e.into_inner()) = derive(theme);
}

pub fn current() -> Colors {
	CURRENT.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

impl Colors {
	pub fn pulse_style(&self, style: PulseStyle) -> Style {
		match style {
			PulseStyle::Neutral => self.pulse_neutral_style,
			PulseStyle::Warn => self.pulse_warn_style,
			PulseStyle::Ok => self.pulse_ok_style,
		}
	}
}
