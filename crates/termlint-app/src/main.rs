use std::fs::File;
use std::future::Future;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::Ordering;

use clap::Parser;
use termlint_config::Config;
use tokio::signal;

mod controller;
mod events;
mod io;
mod report;
mod state;


use self::controller::AppController;
use self::state::AppState;

/// Screen identifier names against a curated term dictionary
#[derive(Parser)]
#[command(name = "termlint", version, about)]
struct Cli {
    /// Term dictionary file (JSON); defaults to the embedded dictionary
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Symbol list to screen, one record per line; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };

    // CLI takes precedence over config file and environment
    if let Some(path) = &cli.dictionary {
        config.dictionary.path = Some(path.display().to_string());
    }

    let state = Arc::new(AppState::new(config));

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    run(state, cli.input, shutdown).await
}

/// Load a JSON config file
fn load_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

pub async fn run(
    state: Arc<AppState>,
    input: Option<PathBuf>,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let controller = AppController::new(state.clone());
    let mut tasks = controller.spawn_tasks(input);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
                break;
            }
            result = tasks.join_next() => match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => tracing::error!("task exited with error: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => break,
            },
        }
    }

    // Dropping the controller closes its channel endpoints, so the remaining
    // tasks drain and stop instead of waiting on a channel nobody feeds.
    drop(controller);
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
            Err(e) => tracing::error!("task panicked: {e}"),
        }
    }

    let checked = state.status.symbols_checked.load(Ordering::Relaxed);
    let flagged = state.status.symbols_flagged.load(Ordering::Relaxed);
    tracing::info!("Screened {checked} symbols, {flagged} flagged");

    Ok(())
}
