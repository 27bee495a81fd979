use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use vtscan::cli;
use vtscan::errors::VtScanError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let result = tokio::select! {
        result = cli::scan::handle_scan(cli) => result,
        Ok(()) = tokio::signal::ctrl_c() => {
            println!("\n[*] Exiting...");
            std::process::exit(130);
        }
    };

    match result {
        Ok(()) => {}
        Err(VtScanError::RateLimit) => {
            println!("{} Request rate limit exceeded", style("[-]").red());
            std::process::exit(VtScanError::RateLimit.classify().exit_code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.classify().exit_code);
        }
    }
}
