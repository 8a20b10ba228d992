use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use crate::cli::Args;
use std::time::Duration;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_mpdtray_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("MPDTRAY_CONFIG_PATH", "/tmp/mpdtray-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/mpdtray-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g0 = EnvGuard::remove("MPDTRAY_CONFIG_PATH");
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("mpdtray")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("mpdtray")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_a_local_mpd() {
    let s = Settings::default();
    assert_eq!(s.mpd.host, "localhost");
    assert_eq!(s.mpd.port, 6600);
    assert_eq!(s.mpd.timeout, 0);
    assert_eq!(s.mpd.timeout(), Duration::ZERO);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[mpd]
host = "music.lan"
port = 6601
timeout = 1500
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MPDTRAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MPDTRAY__MPD__HOST");
    let _g3 = EnvGuard::remove("MPDTRAY__MPD__PORT");
    let _g4 = EnvGuard::remove("MPDTRAY__MPD__TIMEOUT");

    let s = Settings::load().unwrap();
    assert_eq!(s.mpd.host, "music.lan");
    assert_eq!(s.mpd.port, 6601);
    assert_eq!(s.mpd.timeout(), Duration::from_millis(1500));
}

#[test]
fn missing_config_file_uses_defaults() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("does-not-exist.toml");

    let _g1 = EnvGuard::set("MPDTRAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("MPDTRAY__MPD__HOST");
    let _g3 = EnvGuard::remove("MPDTRAY__MPD__PORT");
    let _g4 = EnvGuard::remove("MPDTRAY__MPD__TIMEOUT");

    let s = Settings::load().unwrap();
    assert_eq!(s.mpd.host, "localhost");
    assert_eq!(s.mpd.port, 6600);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[mpd]
port = 6601
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("MPDTRAY_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("MPDTRAY__MPD__PORT", "7700");
    let _g3 = EnvGuard::remove("MPDTRAY__MPD__HOST");
    let _g4 = EnvGuard::remove("MPDTRAY__MPD__TIMEOUT");

    let s = Settings::load().unwrap();
    assert_eq!(s.mpd.port, 7700);
    assert_eq!(s.mpd.host, "localhost");
}

#[test]
fn command_line_flags_override_everything() {
    let mut s = Settings::default();
    s.mpd.port = 7700;

    s.apply_args(&Args {
        host: Some("10.0.0.2".to_string()),
        port: None,
        timeout: Some(250),
    });
    assert_eq!(s.mpd.host, "10.0.0.2");
    assert_eq!(s.mpd.port, 7700);
    assert_eq!(s.mpd.timeout, 250);

    s.apply_args(&Args::default());
    assert_eq!(s.mpd.host, "10.0.0.2");
}

#[test]
fn validate_rejects_empty_host_and_zero_port() {
    let mut s = Settings::default();
    s.mpd.host = "  ".to_string();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.mpd.port = 0;
    assert!(s.validate().is_err());
}

#[test]
fn port_zero_is_rejected_on_the_command_line() {
    use clap::Parser;

    assert!(Args::try_parse_from(["mpdtray", "--port", "0"]).is_err());
    assert!(Args::try_parse_from(["mpdtray", "-p", "0"]).is_err());
    let args = Args::try_parse_from(["mpdtray", "-p", "6601"]).unwrap();
    assert_eq!(args.port, Some(6601));
}

#[test]
fn flags_are_validated_after_they_are_applied() {
    let mut broken = Settings::default();
    broken.mpd.port = 0;
    assert!(broken.with_args(&Args::default()).is_err());

    // Falling back to the defaults does not let a bad flag through.
    let empty_host = Args {
        host: Some(String::new()),
        ..Args::default()
    };
    assert!(Settings::default().with_args(&empty_host).is_err());

    let zero_port = Args {
        port: Some(0),
        ..Args::default()
    };
    assert!(Settings::default().with_args(&zero_port).is_err());

    let s = Settings::default()
        .with_args(&Args {
            port: Some(6601),
            ..Args::default()
        })
        .unwrap();
    assert_eq!(s.mpd.port, 6601);
}
