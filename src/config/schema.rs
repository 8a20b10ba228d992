use std::time::Duration;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/mpdtray/config.toml` or `~/.config/mpdtray/config.toml`
///
/// Precedence (highest wins):
/// 1) Command line flags
/// 2) Environment variables (prefix `MPDTRAY__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mpd: MpdSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MpdSettings {
    /// Host name or address of the MPD server.
    pub host: String,
    pub port: u16,
    /// Socket timeout in milliseconds. 0 uses the client default.
    pub timeout: u64,
}

impl Default for MpdSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6600,
            timeout: 0,
        }
    }
}

impl MpdSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}
