use std::io::Write;

use intentDemo::app::settings::runtime_keybinds::Keybinds;
use intentDemo::app::settings::{load_settings_from, Settings};
use intentDemo::errors::SettingsError;
use intentDemo::input::{KeyCode, KeyEvent, KeyModifiers};
use intentDemo::ui::colors::{current, set_from_theme};
use intentDemo::ui::Theme;
use ratatui::style::Color;

#[test]
fn example_settings_file_parses() {
    let p = format!("{}/resources/settings.example.toml", env!("CARGO_MANIFEST_DIR"));
    let s = load_settings_from(std::path::Path::new(&p)).expect("parse");
    assert_eq!(s.theme, "dark");
    assert!(!s.invalidate_stale_runs);
    let mut k = Keybinds::default();
    k.apply_overrides(&s.keybinds).expect("known keybinds");
    assert!(k.is_bound("run", &KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)));
}

#[test]
fn settings_from_temp_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "invalidate_stale_runs = true\ntick_ms = 40").unwrap();
    let s = load_settings_from(f.path()).unwrap();
    assert_eq!(
        s,
        Settings {
            invalidate_stale_runs: true,
            tick_ms: 40,
            ..Settings::default()
        }
    );
}

#[test]
fn missing_settings_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_settings_from(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn unknown_key_name_is_reported() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[keybinds]\nrun = [\"hyper-r\"]").unwrap();
    let s = load_settings_from(f.path()).unwrap();
    let err = Keybinds::default().apply_overrides(&s.keybinds).unwrap_err();
    assert!(matches!(err, SettingsError::UnknownKey { ref key, .. } if key == "hyper-r"));
}

#[test]
fn theme_files_load_and_drive_pulse_colours() {
    let p = format!("{}/resources/themes/light.toml", env!("CARGO_MANIFEST_DIR"));
    let t = Theme::resolve(&p).expect("theme file");
    assert_eq!(t.ok, Color::Rgb(0, 128, 0));

    set_from_theme(&t);
    assert_eq!(current().pulse_ok_style.fg, Some(Color::Rgb(0, 128, 0)));
    assert_eq!(current().pulse_warn_style.fg, Some(Color::Rgb(176, 96, 0)));
}

#[test]
fn dark_theme_file_differs_from_builtin_accent() {
    let p = format!("{}/resources/themes/dark.toml", env!("CARGO_MANIFEST_DIR"));
    let s = std::fs::read_to_string(p).expect("read theme");
    let t = Theme::from_toml(&s).expect("parse");
    assert_ne!(t.accent, Theme::dark().accent);
}
