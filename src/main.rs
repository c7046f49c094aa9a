use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use intentDemo::app::catalog::{catalog, format_listing};
use intentDemo::app::settings::{self, runtime_keybinds, Settings};
use intentDemo::runner::{self, logging};
use intentDemo::ui::{colors, Theme};

#[derive(Parser)]
#[command(
    name = "intentDemo",
    about = "Pick or type an intent and watch a mocked plan/execute run",
    version
)]
struct Cli {
    /// Settings file (default: settings.toml in the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme: dark, light, or a path to a theme .toml file
    #[arg(long)]
    theme: Option<String>,

    /// Drop pending steps of earlier runs when a new run starts
    #[arg(long)]
    invalidate_stale_runs: bool,

    /// Log file (default: intentDemo.log in the user cache dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the template catalog and exit
    #[arg(long)]
    list_templates: bool,

    /// With --list-templates, print JSON
    #[arg(long, short = 'j', requires = "list_templates")]
    json: bool,
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut s = match &cli.config {
        Some(p) => settings::load_settings_from(p)?,
        None => settings::load_settings()?,
    };
    if let Some(theme) = &cli.theme {
        s.theme = theme.clone();
    }
    s.invalidate_stale_runs |= cli.invalidate_stale_runs;
    Ok(s)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_templates {
        print!("{}", format_listing(catalog(), cli.json)?);
        if cli.json {
            println!();
        }
        return Ok(());
    }

    // Before settings, so records from loading them reach the file.
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    let _guard = logging::init_logging(&log_path)?;

    let settings = load_settings(&cli).context("loading settings")?;
    let theme = Theme::resolve(&settings.theme).context("loading theme")?;
    colors::set_from_theme(&theme);

    let mut binds = runtime_keybinds::Keybinds::default();
    binds
        .apply_overrides(&settings.keybinds)
        .context("applying keybinds")?;
    runtime_keybinds::set(binds);

    runner::run_app(settings)
}
