//! Tracing setup. The terminal belongs to the UI, so records go to a file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use crate::app::settings::user_cache_dir;

pub const LOG_FILE_NAME: &str = "intentDemo.log";

/// `<cache dir>/intentDemo.log`, or the temp dir when there is no cache dir.
pub fn default_log_path() -> PathBuf {
    user_cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_FILE_NAME)
}

/// Install the global subscriber writing to `path`. `RUST_LOG` overrides the
/// default `info` filter. Keep the returned guard alive until exit or
/// buffered records are lost.
pub fn init_logging(path: &Path) -> anyhow::Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path
        .file_name()
        .with_context(|| format!("log path `{}` has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory `{}`", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false),
    );
    tracing::subscriber::set_global_default(subscriber)
        .context("installing tracing subscriber")?;
    // Forward records from crates that log through the `log` facade.
    tracing_log::LogTracer::init().context("installing log bridge")?;
    Ok(guard)
}
