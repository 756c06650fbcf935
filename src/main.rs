use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use univusaver::app::App;
use univusaver::config::Settings;

#[derive(Parser)]
#[command(
    name = "univusaver",
    version,
    about = "Command-line personal finance tracker",
    long_about = "uNivUSaver records income and expenses, groups them into categories \
                  and reports totals. Commands are read line by line from standard \
                  input; type 'help' to list them and 'bye' to exit."
)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(long, env = "UNIVUSAVER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, env = "UNIVUSAVER_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Stderr)
        .init();

    let settings = Settings::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load settings from {}", path.display()),
        None => "Failed to load default settings".to_string(),
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    App::new(settings).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
