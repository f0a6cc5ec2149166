//! rookies-bot CLI binary.

use clap::Parser;
use rookies_bot::{Cli, ObservabilityConfig, init_observability, run};
use std::process::ExitCode;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let observability = ObservabilityConfig::new()
        .with_verbose(cli.verbose)
        .with_json_logs(cli.json_logs);
    if let Err(e) = init_observability(&observability) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(&cli.config, &cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
