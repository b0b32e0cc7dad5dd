use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "hearth",
    about = "Household financial analysis engine (metrics, risk, goals, debt payoff, retirement Monte Carlo)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the analysis HTTP API.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Analyze a snapshot JSON file and print the result.
    Analyze {
        /// Path to a snapshot payload; omitted fields use defaults.
        #[arg(long)]
        input: PathBuf,
        /// Override the simulation seed from the payload.
        #[arg(long)]
        seed: Option<u64>,
        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Serve { port } => {
            if let Err(e) = hearth::api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Analyze {
            input,
            seed,
            pretty,
        } => match run_analysis(&input, seed, pretty) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run_analysis(input: &Path, seed: Option<u64>, pretty: bool) -> Result<String, String> {
    let raw = fs::read_to_string(input).map_err(|e| format!("cannot read {}: {e}", input.display()))?;
    let mut snapshot = hearth::api::snapshot_from_json(&raw)?;
    if let Some(seed) = seed {
        snapshot.assumptions.seed = seed;
    }

    let analysis = hearth::core::analyze(&snapshot);
    let encoded = if pretty {
        serde_json::to_string_pretty(&analysis)
    } else {
        serde_json::to_string(&analysis)
    };
    encoded.map_err(|e| format!("cannot encode analysis: {e}"))
}
