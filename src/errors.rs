use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the demo runner when a run cannot start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The intent text was empty or whitespace only.
    #[error("intent is empty after trimming")]
    EmptyIntent,
}

/// Errors produced while parsing the string forms of UI identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown pulse style tag `{0}` (expected \"\", \"warn\" or \"ok\")")]
    UnknownStyleTag(String),

    #[error("unknown surface id `{0}`")]
    UnknownSurface(String),
}

/// Errors produced while loading settings, themes and keybinds.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown keybind action `{0}`")]
    UnknownAction(String),

    #[error("unknown key `{key}` bound to action `{action}`")]
    UnknownKey { action: String, key: String },

    #[error("unknown theme `{0}` (expected dark, light or a .toml file)")]
    UnknownTheme(String),
}
