use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use hessfix_generate::{EmitEngine, EmitError, EmitOptions};

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Emit(#[from] EmitError),
}

#[derive(Parser, Debug)]
#[command(name = "hessfix", version, about = "Hessian fixture generator")]
struct Cli {
    /// Catalog variant to generate, e.g. ListOfRecord7.
    #[arg(value_name = "VARIANT")]
    variant: String,
    /// Number of elements per container.
    #[arg(long, value_name = "N")]
    count: u64,
    /// Exclusive upper bound on generated string length.
    #[arg(long, value_name = "S")]
    size: u32,
    /// Output path stem; artifacts land at {stem}.txt and {stem}.json.
    #[arg(long, value_name = "PATH")]
    outfile: PathBuf,
    /// Fixed RNG seed for reproducible artifacts.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let engine = EmitEngine::new(EmitOptions {
        count: cli.count,
        size: cli.size,
        seed: cli.seed,
    });
    let result = engine.run(&cli.variant, &cli.outfile)?;

    tracing::info!(
        variant = %result.variant,
        binary = %result.binary_path.display(),
        json = %result.json_path.display(),
        "run finished"
    );
    Ok(())
}
