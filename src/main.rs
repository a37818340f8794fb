use anyhow::Result;
use clap::Parser;
use forecourt::cli::{Cli, Commands};
use forecourt::commands::{self, AnalyzeConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            current,
            history,
            horizon,
            config,
            format,
            output,
            verbosity,
        } => {
            init_logging(verbosity);
            commands::handle_analyze(AnalyzeConfig {
                current,
                history,
                horizon,
                config,
                format,
                output,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::init_config(&std::env::current_dir()?, force)
        }
    }
}
