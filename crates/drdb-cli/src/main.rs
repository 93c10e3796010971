use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod run;

#[derive(Debug, Parser)]
#[command(name = "drdb-cli")]
#[command(about = "Convert crawled doctor profiles (JSON Lines) into a CSV dataset")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Process a JSON Lines file and write the CSV dataset
    Run {
        /// Input JSON Lines file [default: DRDB_INPUT_PATH or output.jl]
        input: Option<PathBuf>,
        /// Output CSV file [default: DRDB_OUTPUT_PATH or doctoralia_data.csv]
        output: Option<PathBuf>,
        /// Do not prefix the CSV with a UTF-8 byte-order mark
        #[arg(long)]
        no_bom: bool,
        /// Rows per frequency table in the summary
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            input,
            output,
            no_bom,
            top,
        } => {
            let config =
                drdb_core::load_app_config_with_overrides(&run::config_overrides(no_bom, top))?;
            init_tracing(&config)?;
            let settings = run::RunSettings::resolve(&config, input, output);
            run::run_convert(&settings)?;
        }
    }

    Ok(())
}

fn init_tracing(config: &drdb_core::AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests;
