mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sheetmark-cli")]
#[command(about = "Brand-name lookup over the published registration spreadsheets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every discovered sheet for brand names containing QUERY
    Search {
        /// Case-insensitive substring to look for; empty matches every brand
        query: String,

        /// Override the configured scan policy (`exhaustive` or `first-match`)
        #[arg(long)]
        policy: Option<String>,

        /// Batch size used with `--policy first-match`
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// List the spreadsheet ids found in the configured folder
    Sheets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = sheetmark_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            query,
            policy,
            batch_size,
        }) => {
            search::run_search(&config, &query, policy.as_deref(), batch_size).await?;
        }
        Some(Commands::Sheets) => search::run_sheets(&config).await?,
        None => println!("sheetmark-cli: run with --help to list commands"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
