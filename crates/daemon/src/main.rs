// SPDX-License-Identifier: MIT

//! Chime daemon (chimed)
//!
//! Background process that drives the dispatch loop: wakes once per tick,
//! launches matching jobs, and hot-reloads the crontab when it changes.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod config;

use std::path::{Path, PathBuf};

use chime_adapters::{FileConfigSource, ProcessLauncher, TracedLauncher};
use chime_core::{Dispatcher, SystemClock};
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

use crate::config::Config;

/// Startup marker prefix written to the log before anything else.
/// Full format: "--- chimed: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- chimed: starting (pid: ";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("chime.toml")
    };

    // Load configuration
    let config = Config::load(&config_path)?;
    let log_path = config.log_path();

    // Write startup marker to log (before tracing setup; an unwritable
    // log sink is fatal here)
    write_startup_marker(&log_path)?;

    // Set up logging
    let log_guard = setup_logging(&log_path)?;

    info!(
        crontab = %config.crontab.display(),
        tick = ?config.tick,
        "starting chimed"
    );

    // Build the adapter stack and load generation 0
    let launcher = TracedLauncher::new(ProcessLauncher::new());
    let source = FileConfigSource::new(&config.crontab);
    let mut dispatcher = match Dispatcher::start(launcher, source, SystemClock).await {
        Ok(d) => d,
        Err(e) => {
            error!("failed to start: {}", e);
            drop(log_guard);
            return Err(e.into());
        }
    };

    // Set up signal handlers
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigquit = signal(SignalKind::quit())?;
    let mut sighup = signal(SignalKind::hangup())?;

    // First tick lands one full period after startup
    let mut ticker = tokio::time::interval_at(
        tokio::time::Instant::now() + config.tick,
        config.tick,
    );
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    info!("chimed ready");

    // Main dispatch loop
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                dispatcher.tick().await;
            }

            // Graceful shutdown after the current tick
            _ = sigterm.recv() => {
                info!("received SIGTERM, shutting down");
                break;
            }

            _ = sigint.recv() => {
                info!("received SIGINT, shutting down");
                break;
            }

            _ = sigquit.recv() => {
                info!("received SIGQUIT, shutting down");
                break;
            }

            // Reserved: accepted but has no effect yet
            _ = sighup.recv() => {
                info!("received SIGHUP, ignoring");
            }
        }
    }

    info!("chimed stopped");
    Ok(())
}

/// Write startup marker to the log file (appends to existing log)
fn write_startup_marker(log_path: &Path) -> Result<(), std::io::Error> {
    use std::io::Write;

    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    writeln!(file, "{}{})", STARTUP_MARKER_PREFIX, std::process::id())?;

    Ok(())
}

fn setup_logging(
    log_path: &Path,
) -> Result<tracing_appender::non_blocking::WorkerGuard, std::io::Error> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| std::io::Error::other("log path has no file name"))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}
