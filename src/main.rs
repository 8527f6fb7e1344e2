mod calculator;
mod config;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// A keypad-driven tape calculator.
#[derive(Parser)]
#[command(name = "tapecalc", version, about)]
struct Cli {
    /// Select the display theme and persist it for future sessions.
    #[arg(long, value_enum)]
    theme: Option<config::Theme>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let theme = match cli.theme {
        Some(theme) => {
            config::save_theme(theme)?;
            theme
        }
        None => config::load_theme(),
    };
    debug!(?theme, "starting");

    ui::run(theme)
}
