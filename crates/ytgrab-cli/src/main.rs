mod args;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let filter = match cli.verbose {
        0 => "ytgrab=info,ytgrab_core=info,ytgrab_web=info",
        1 => "ytgrab=debug,ytgrab_core=debug,ytgrab_web=debug",
        2 => "ytgrab=trace,ytgrab_core=trace,ytgrab_web=trace",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Some(Commands::Serve { listen }) => commands::serve::run(listen.as_deref(), config_path).await,
        Some(Commands::Info { url }) => commands::info::run(&url, config_path).await,
        Some(Commands::Download {
            url,
            quality,
            output,
        }) => commands::download::run(&url, quality.as_deref(), output, config_path).await,
        Some(Commands::Doctor) => commands::doctor::run(config_path).await,
        Some(Commands::Config) => commands::config::run(config_path).await,
        None => commands::serve::run(None, config_path).await,
    }
}
