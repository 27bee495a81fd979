use std::path::PathBuf;

use clap::Parser;

use crate::config::credentials::API_KEY_ENV;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_TIMESTAMP"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "vtscan",
    version,
    long_version = LONG_VERSION,
    about = "Submit a file to VirusTotal and print the per-vendor detection report"
)]
pub struct Cli {
    /// File to upload for scanning
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// VirusTotal API key
    #[arg(short, long, value_name = "api_key", env = API_KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// Do not print vendor analysis results
    #[arg(short, long)]
    pub quiet: bool,

    /// Show only positive results in vendor analysis
    #[arg(short, long)]
    pub positive: bool,

    /// Save the raw JSON report to a file
    #[arg(short, long, value_name = "file")]
    pub out: Option<PathBuf>,

    /// Clear screen before printing vendor analysis results
    #[arg(short, long)]
    pub clear: bool,

    /// YAML configuration file
    #[arg(long, value_name = "file")]
    pub config: Option<PathBuf>,

    /// Network timeout in seconds (no timeout by default)
    #[arg(long, value_name = "secs", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
