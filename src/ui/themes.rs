use std::path::Path;

use ratatui::style::{Color, Style};
use serde::Deserialize;

use crate::errors::SettingsError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub warn: Color,
    pub ok: Color,
}

#[derive(Deserialize)]
struct ThemeFile {
    palette: Option<Pal>,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
    warn: Option<String>,
    ok: Option<String>,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            warn: Color::Yellow,
            ok: Color::Green,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            warn: Color::Rgb(176, 96, 0),
            ok: Color::Rgb(0, 128, 0),
        }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Parse a theme file. Without a `palette` table the dark theme is used;
    /// `warn` and `ok` fall back to the dark theme's colours when omitted.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let file: ThemeFile = toml::from_str(s)?;
        let base = Self::dark();
        let Some(p) = file.palette else {
            return Ok(base);
        };
        Ok(Self {
            bg: parse_hex(&p.bg),
            fg: parse_hex(&p.fg),
            accent: parse_hex(&p.accent),
            warn: p.warn.as_deref().map(parse_hex).unwrap_or(base.warn),
            ok: p.ok.as_deref().map(parse_hex).unwrap_or(base.ok),
        })
    }

    /// Resolve a `theme` setting: a built-in name or a path to a `.toml` file.
    pub fn resolve(name: &str) -> Result<Self, SettingsError> {
        match name {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            p if p.ends_with(".toml") => {
                let path = Path::new(p);
                let s = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Self::from_toml(&s)?)
            }
            other => Err(SettingsError::UnknownTheme(other.to_string())),
        }
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_overrides_and_fallbacks() {
        let t = Theme::from_toml(
            r##"
            palette = { bg = "#000000", fg = "#FFFFFF", accent = "#00ff00", ok = "#010203" }
            "##,
        )
        .unwrap();
        assert_eq!(t.bg, Color::Rgb(0, 0, 0));
        assert_eq!(t.accent, Color::Rgb(0, 255, 0));
        assert_eq!(t.ok, Color::Rgb(1, 2, 3));
        assert_eq!(t.warn, Theme::dark().warn);
    }

    #[test]
    fn bad_hex_becomes_reset() {
        assert_eq!(parse_hex("#12"), Color::Reset);
        assert_eq!(parse_hex("zzzzzz"), Color::Reset);
    }

    #[test]
    fn resolve_names() {
        assert_eq!(Theme::resolve("light").unwrap(), Theme::light());
        assert!(matches!(
            Theme::resolve("solarized"),
            Err(SettingsError::UnknownTheme(_))
        ));
    }
}
