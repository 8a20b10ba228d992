use std::{env, path::PathBuf};

use super::schema::Settings;
use crate::cli::Args;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then environment
/// variables (prefix `MPDTRAY__`), and falls back to struct defaults.
impl Settings {
    /// Load settings from the optional config file and environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("MPDTRAY")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Apply command line flags on top of loaded settings.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(host) = &args.host {
            self.mpd.host = host.clone();
        }
        if let Some(port) = args.port {
            self.mpd.port = port;
        }
        if let Some(timeout) = args.timeout {
            self.mpd.timeout = timeout;
        }
    }

    /// Overlay `args` and validate the result.
    pub fn with_args(mut self, args: &Args) -> Result<Self, String> {
        self.apply_args(args);
        self.validate()?;
        Ok(self)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.mpd.host.trim().is_empty() {
            return Err("mpd.host must not be empty".to_string());
        }
        if self.mpd.port == 0 {
            return Err("mpd.port must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `MPDTRAY_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("MPDTRAY_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/mpdtray/config.toml`
/// or `~/.config/mpdtray/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("mpdtray").join("config.toml"))
}
