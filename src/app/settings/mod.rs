pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod runtime_keybinds;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use config_dirs::{project_config_dir, settings_path, user_cache_dir};
pub use keybinds::*;
pub use read_settings::{load_settings, load_settings_from, parse_settings};

/// User settings read from `settings.toml`. Every field has a default so a
/// partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `dark`, `light`, or a path to a theme `.toml` file.
    pub theme: String,
    /// Drop pending steps of earlier runs when a new run starts.
    pub invalidate_stale_runs: bool,
    /// Upper bound on how long the event loop waits for input.
    pub tick_ms: u64,
    pub mouse_enabled: bool,
    /// Action name to key names, e.g. `run = ["f5", "ctrl-r"]`.
    pub keybinds: BTreeMap<String, Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            invalidate_stale_runs: false,
            tick_ms: 100,
            mouse_enabled: true,
            keybinds: BTreeMap::new(),
        }
    }
}
