use std::path::Path;

use tracing::debug;

use super::config_dirs::settings_path;
use super::Settings;
use crate::errors::SettingsError;

pub fn parse_settings(s: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(s)?)
}

pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    debug!("loading settings from {}", path.display());
    let s = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&s)
}

/// Load `settings.toml` from the user config dir. A missing file yields the
/// defaults; an unreadable or malformed one is an error.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_path() {
        Some(p) if p.exists() => load_settings_from(&p),
        _ => Ok(Settings::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_settings("").unwrap(), Settings::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = parse_settings(
            r#"
            invalidate_stale_runs = true
            [keybinds]
            run = ["f9"]
            "#,
        )
        .unwrap();
        assert!(s.invalidate_stale_runs);
        assert_eq!(s.tick_ms, 100);
        assert_eq!(s.theme, "dark");
        assert_eq!(s.keybinds["run"], vec!["f9".to_string()]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(
            parse_settings("tick_ms = \"soon\""),
            Err(SettingsError::Parse(_))
        ));
    }
}
