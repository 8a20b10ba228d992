use tracing::warn;

use crate::cli::Args;
use crate::config;

pub fn load_settings(args: &Args) -> config::Settings {
    let settings = match config::Settings::load() {
        Ok(s) => s,
        Err(e) => {
            // Config is optional; failures should not prevent the tray from starting.
            warn!(error = %e, "failed to load config, using defaults");
            config::Settings::default()
        }
    };

    settings.with_args(args).unwrap_or_else(|msg| {
        warn!("invalid config, using defaults: {msg}");
        config::Settings::default()
            .with_args(args)
            .unwrap_or_else(|msg| {
                warn!("invalid command line, ignoring it: {msg}");
                config::Settings::default()
            })
    })
}
