use std::thread;

use tracing::{info, warn};

use crate::cli::Args;
use crate::player;
use crate::tray::{StatusNotifier, TrayError};

mod poll;
mod settings;

pub use poll::*;

/// Id and title of the exported tray item.
const TRAY_ID: &str = "mpdtray";

/// Failures that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Error connecting to mpd server at {host}:{port}. {source}.")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: mpd::error::Error,
    },

    #[error("Failed to initialize the tray icon: {0}")]
    Tray(#[from] TrayError),
}

/// Connect, export the tray icon and poll until the player reports a state
/// that cannot be drawn. The icon then stays frozen until the process is
/// killed, so this only returns on startup errors.
pub fn run(args: &Args) -> Result<(), StartupError> {
    let settings = settings::load_settings(args);
    let target = &settings.mpd;

    let mut client = player::connect(&target.host, target.port, target.timeout())
        .map_err(|source| StartupError::Connect {
            host: target.host.clone(),
            port: target.port,
            source,
        })?;
    info!(host = %target.host, port = target.port, "connected to mpd");

    let mut tray = StatusNotifier::new(TRAY_ID)?;

    let polls = run_poll_loop(&mut client, &mut tray, POLL_INTERVAL);
    warn!(polls, "polling stopped, tray icon frozen");

    loop {
        thread::park();
    }
}
