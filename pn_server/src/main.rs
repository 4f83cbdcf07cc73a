//! Poker night league server.
//!
//! Serves the league over HTTP and runs live hands with blind alerts over
//! WebSocket, recording every win into the league file.

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Error};
use log::{info, warn};
use pico_args::Arguments;
use pn_server::{
    api::{self, AppState},
    config::ServerConfig,
    logging,
};
use poker_night::{BlindScheduler, FileSystemStore, blinds::TimerAlerter};

const HELP: &str = "\
Run a poker night league server

USAGE:
  pn_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:5000]
  --db         PATH        League file                 [default: env LEAGUE_DB_PATH or game.db.json]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  LEAGUE_DB_PATH           League file path
  BLIND_BASE_MINUTES       Minutes between blind levels before adding players [default: 5]
  RUST_LOG                 Log filter (e.g., debug)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let bind: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let league_path: Option<PathBuf> = pargs.opt_value_from_str("--db")?;

    logging::init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("Ignoring unrecognized arguments: {:?}", remaining);
    }

    let config = ServerConfig::from_env(bind, league_path)?;
    config.validate()?;

    info!("Opening league file {}", config.league_path.display());
    let store = FileSystemStore::from_path(&config.league_path).with_context(|| {
        format!(
            "Failed to open league file {}",
            config.league_path.display()
        )
    })?;

    let scheduler =
        BlindScheduler::new(Arc::new(TimerAlerter)).with_base_minutes(config.blind_base_minutes);
    info!(
        "Blinds rise every {} minutes plus one per player",
        config.blind_base_minutes
    );

    let app = api::create_router(AppState::new(Arc::new(store), scheduler));

    info!("Starting HTTP/WebSocket server on {}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
