use anyhow::Result;
use analytics_log_core::env_parse_with_default;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_PORT: u16 = 5050;
const DATA_DIR_ENV: &str = "ANALYTICS_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "server/data";

#[derive(Parser)]
#[command(name = "analytics-log")]
#[command(about = "Append-only analytics logging server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Listening port [default: $PORT or 5050]
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Directory holding db.json [default: $ANALYTICS_DATA_DIR or server/data]
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Create the data directory and an empty document
    Init {
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Print every record of a collection as JSON
    List {
        /// activities, searches, or learnings
        collection: String,
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

fn resolve_port(flag: Option<u16>) -> u16 {
    flag.unwrap_or_else(|| env_parse_with_default("PORT", DEFAULT_PORT))
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, data_dir } => {
            commands::serve::run(resolve_port(port), host, resolve_data_dir(data_dir)).await?;
        },
        Commands::Init { data_dir } => commands::init::run(resolve_data_dir(data_dir))?,
        Commands::List { collection, data_dir } => {
            commands::list::run(&collection, resolve_data_dir(data_dir))?;
        },
    }

    Ok(())
}
