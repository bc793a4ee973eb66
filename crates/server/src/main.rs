mod api;
mod error;
mod models;
mod store;

use crate::api::server::start_server;
use crate::store::core::MemoryStore;
use crate::store::core::StoreContext;
use anyhow::Result;
use clap::Parser;
use log::error;
use log::info;
use log::LevelFilter;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
struct Args {
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port
    #[arg(short = 'p', long, default_value = "3002")]
    port: u16,

    /// Directory holding goals.json, users.json and categories.json
    #[arg(short = 'd', long, default_value = "data")]
    data_dir: PathBuf,

    /// Log level
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = match args.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info, // Default to Info if the level is unrecognized
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let store = match MemoryStore::load(&args.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!(
                "Failed to load datasets from {}: {}",
                args.data_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} goals, {} categories, {} users",
        store.goals().len(),
        store.categories().len(),
        store.read_users()?.len()
    );

    let store_context = Arc::new(StoreContext::new(store));

    tokio::select! {
        res = start_server(&args.host, args.port, store_context) => {
            if let Err(e) = res {
                error!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            error!("Shutdown signal received");
        }
    }

    Ok(())
}
