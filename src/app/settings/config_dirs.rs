use std::path::PathBuf;

use directories_next::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "intentDemo", "intentDemo")
}

/// Per-user configuration directory, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory; the log file lives here.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join("settings.toml"))
}
