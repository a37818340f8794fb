use crate::config::MAX_HORIZON;
use crate::io::OutputFormat;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "forecourt")]
#[command(about = "Fuel station performance analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one period against an optional history series
    Analyze {
        /// Current period record (JSON object)
        #[arg(short, long)]
        current: PathBuf,

        /// Historical series (JSON array of numbers, oldest first)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Forecast horizon in periods (defaults to the configured horizon)
        #[arg(
            long,
            value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_HORIZON as u64)
        )]
        horizon: Option<usize>,

        /// Configuration file (defaults to ./forecourt.toml when present)
        #[arg(long, env = "FORECOURT_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a default forecourt.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
