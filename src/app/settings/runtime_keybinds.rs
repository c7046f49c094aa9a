//! Keybind table consulted by the predicates in `keybinds`.
//!
//! Defaults are built in; `settings.toml` may replace the key list of any
//! known action. The active table is process-wide.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use once_cell::sync::Lazy;

use crate::errors::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    fn matches(&self, ev: &KeyEvent) -> bool {
        // Shift is folded into the key itself (`A`, BackTab) so it is ignored.
        let strip = |m: KeyModifiers| m - KeyModifiers::SHIFT;
        self.code == ev.code && strip(self.modifiers) == strip(ev.modifiers)
    }
}

/// Parse a key name such as `enter`, `f5`, `q` or `ctrl-r`.
pub fn parse_key(name: &str) -> Option<KeyBinding> {
    let lower = name.trim().to_ascii_lowercase();
    let (mods, key) = match lower.rsplit_once('-') {
        Some((m, k)) if !k.is_empty() => (m, k),
        _ => ("", lower.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for m in mods.split('-').filter(|m| !m.is_empty()) {
        modifiers |= match m {
            "ctrl" => KeyModifiers::CONTROL,
            "alt" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let code = match key {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "space" => KeyCode::Char(' '),
        k if k.len() > 1 && k.starts_with('f') => KeyCode::F(k[1..].parse().ok()?),
        k => {
            let mut chars = k.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyBinding { code, modifiers })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyBinding>>,
}

const DEFAULTS: &[(&str, &[&str])] = &[
    ("quit", &["q"]),
    ("force_quit", &["ctrl-c"]),
    ("run", &["f5", "ctrl-r"]),
    ("up", &["up"]),
    ("down", &["down"]),
    ("enter", &["enter"]),
    ("backspace", &["backspace"]),
    ("esc", &["esc"]),
    ("tab", &["tab"]),
    ("backtab", &["backtab"]),
    ("page_up", &["pageup"]),
    ("page_down", &["pagedown"]),
];

impl Default for Keybinds {
    fn default() -> Self {
        let map = DEFAULTS
            .iter()
            .map(|(action, keys)| {
                let binds = keys.iter().filter_map(|k| parse_key(k)).collect();
                (action.to_string(), binds)
            })
            .collect();
        Self { map }
    }
}

impl Keybinds {
    pub fn is_bound(&self, action: &str, ev: &KeyEvent) -> bool {
        self.map
            .get(action)
            .is_some_and(|binds| binds.iter().any(|b| b.matches(ev)))
    }

    pub fn bindings(&self, action: &str) -> &[KeyBinding] {
        self.map.get(action).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace the keys of each named action. Unknown actions or key names
    /// are rejected and leave the table unchanged.
    pub fn apply_overrides(
        &mut self,
        overrides: &BTreeMap<String, Vec<String>>,
    ) -> Result<(), SettingsError> {
        let mut next = self.map.clone();
        for (action, keys) in overrides {
            let slot = next
                .get_mut(action)
                .ok_or_else(|| SettingsError::UnknownAction(action.clone()))?;
            let parsed = keys
                .iter()
                .map(|k| {
                    parse_key(k).ok_or_else(|| SettingsError::UnknownKey {
                        action: action.clone(),
                        key: k.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            *slot = parsed;
        }
        self.map = next;
        Ok(())
    }
}

static CURRENT: Lazy<RwLock<Keybinds>> = Lazy::new(|| RwLock::new(Keybinds::default()));

/// Snapshot of the active keybinds.
pub fn get() -> Keybinds {
    with(Keybinds::clone)
}

/// Run `f` against the active keybinds under the read lock.
pub fn with<R>(f: impl FnOnce(&Keybinds) -> R) -> R {
    f(&CURRENT.read().unwrap_or_else(|e| e.into_inner()))
}

pub fn set(binds: Keybinds) {
    *CURRENT.write().unwrap_or_else(|e| e.into_inner()) = binds;
}
