use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use video_store::config::StoreConfig;
use video_store::storage;

mod commands;
mod error;

#[derive(Parser, Debug)]
#[command(name = "video-cli")]
#[command(about = "Run the video-store handlers locally against a bucket or directory")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(flatten)]
    store: StoreConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOpts {
    /// JSON output format (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every video in the collection
    List,
    /// Download one video
    Retrieve(commands::retrieve::RetrieveArgs),
    /// Upload a local .mp4 file
    Upload(commands::upload::UploadArgs),
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[tokio::main]
async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = match cli.global.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.store.validate()?;
    let store = storage::create_store(&cli.store)?;
    tracing::debug!(backend = ?cli.store.storage_backend, %store, "Store ready");

    let output = match cli.command {
        Commands::List => commands::list::run(store.as_ref()).await,
        Commands::Retrieve(args) => commands::retrieve::run(store.as_ref(), args).await?,
        Commands::Upload(args) => commands::upload::run(store.as_ref(), args).await?,
    };

    output.print(&cli.global);
    Ok(output.exit_code())
}
