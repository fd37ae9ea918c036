//! search-history — command-line access to the search history store.
//!
//! Uses the same settings file and data directory as the RPC server.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use search_history::app::App;
use search_history::types::history::SearchHistoryItem;

#[derive(Parser)]
#[command(name = "search-history", version, about = "Manage recent search queries")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Data directory (defaults to the platform data directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a query at the front of the history
    Add { query: String },
    /// List the history, most recent first
    List,
    /// Remove one entry by id
    Remove { id: String },
    /// Remove every entry
    Clear,
    /// Show suggestions for a (possibly empty) query
    Suggest {
        #[arg(default_value = "")]
        query: String,
    },
}

fn print_items(items: &[SearchHistoryItem], as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}\t{}\t{}", item.id, item.timestamp, item.query);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = App::new(cli.config, cli.data_dir)?;

    match cli.command {
        Commands::Add { query } => app.store.add_to_history(&query).await?,
        Commands::List => print_items(&app.store.get_history()?, cli.json)?,
        Commands::Remove { id } => app.store.remove_from_history(&id).await?,
        Commands::Clear => app.store.clear_history().await?,
        Commands::Suggest { query } => print_items(&app.store.suggestions(&query)?, cli.json)?,
    }

    Ok(())
}
