mod cli;
mod config;
mod error;
mod registry;
mod report;
mod score;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::NavigatorError;

fn run() -> Result<(), NavigatorError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;
    if loaded.is_none() {
        tracing::debug!("no config file found, using built-in defaults");
    }
    let defaults = loaded
        .as_ref()
        .map(|cfg| cfg.need_defaults())
        .unwrap_or_default();

    let needs = cli.needs(&defaults);
    let results = score::score_all(&registry::PROFILES, &needs);
    let summary = score::summary::summarize(&results);

    let format = if cli.json {
        report::OutputFormat::Json
    } else {
        report::OutputFormat::Human
    };
    tracing::info!(
        best = summary.best_profile.as_str(),
        json = cli.json,
        "rendering recommendation"
    );
    let rendered = report::render(&needs, &results, &summary, format)?;
    println!("{rendered}");

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
