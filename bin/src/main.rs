//! brvm CLI - Collects BRVM market data into dated snapshots and serves them.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod display;

use commands::Settings;

#[derive(Parser)]
#[command(name = "brvm")]
#[command(about = "BRVM market data snapshots", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (warnings and errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Data directory holding raw/ and processed/ snapshots
    #[arg(long, env = "BRVM_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Document store URI; mirroring is disabled when unset
    #[arg(long, env = "BRVM_STORE_URI", global = true)]
    store_uri: Option<String>,

    /// Exchange site base URL
    #[arg(long, env = "BRVM_BASE_URL", global = true, default_value = brvm_lib::BASE_URL)]
    base_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the snapshot directories
    Init,

    /// Run one ingestion
    Collect {
        /// Snapshot date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an ingestion now and then periodically
    Schedule {
        /// Minutes between runs
        #[arg(short, long, default_value = "60")]
        interval: u64,
    },

    /// Print the freshest snapshot of an entity
    Show {
        /// Entity (market-status, indices, stocks, bonds, news)
        entity: String,

        /// Requested date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Serve snapshots over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "5000")]
        port: u16,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "warn",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    init_tracing(cli.verbose, cli.quiet);
    let settings = Settings::new(cli.data_dir, cli.store_uri, cli.base_url);

    match command {
        Commands::Init => commands::init::init(&settings),
        Commands::Collect { date, json } => {
            commands::collect::collect(&settings, date.as_deref(), json).await
        }
        Commands::Schedule { interval } => commands::schedule::schedule(&settings, interval).await,
        Commands::Show { entity, date } => {
            commands::show::show(&settings, &entity, date.as_deref())
        }
        Commands::Serve { host, port } => commands::serve::serve(&settings, &host, port).await,
    }
}
