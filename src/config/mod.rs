#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "payment-order")]
#[command(about = "Decode, validate and encode payment order payloads")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode and validate a payload, then print its canonical encoding
    Decode {
        #[arg(short, long, default_value = "-", help = "Input file, or - for stdin")]
        input: String,

        #[arg(long, help = "Pretty-print the output")]
        pretty: bool,
    },
    /// Print a JSON report of every violation in a payload
    Validate {
        #[arg(short, long, default_value = "-", help = "Input file, or - for stdin")]
        input: String,
    },
    /// Re-encode a payload without validating it
    Encode {
        #[arg(short, long, default_value = "-", help = "Input file, or - for stdin")]
        input: String,

        #[arg(long, help = "Pretty-print the output")]
        pretty: bool,
    },
    /// List the validation rules in the order they run
    Rules,
}
