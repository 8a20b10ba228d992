use crate::player::{PlayState, Status};

/// Percent of the current song already played, in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IconIndex(u8);

impl IconIndex {
    pub const MAX: u8 = 100;

    /// Round `100 * fraction` half up and clamp to `0..=100`.
    /// Non-finite fractions map to 0.
    pub fn from_fraction(fraction: f64) -> Self {
        if !fraction.is_finite() {
            return Self(0);
        }
        let percent = (100.0 * fraction + 0.5).floor();
        Self(percent.clamp(0.0, f64::from(Self::MAX)) as u8)
    }

    /// Progress of `elapsed` out of `total` seconds. An unknown length
    /// (`total` of zero, as for streams) shows an empty wheel.
    pub fn from_times(elapsed: f64, total: f64) -> Self {
        if total.is_nan() || total <= 0.0 {
            return Self(0);
        }
        Self::from_fraction(elapsed / total)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Which icon the tray should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIcon {
    /// A progress wheel from the asset table.
    Progress(IconIndex),
    Paused,
    /// Also hides the tooltip: the server may still report a current song.
    Stopped,
}

/// The server reported a playback state this client does not understand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized mpd state: {0:?}")]
pub struct UnknownState(pub String);

pub fn select_icon(status: &Status) -> Result<TrayIcon, UnknownState> {
    match &status.state {
        PlayState::Play => Ok(TrayIcon::Progress(IconIndex::from_times(
            status.elapsed,
            status.total,
        ))),
        PlayState::Pause => Ok(TrayIcon::Paused),
        PlayState::Stop => Ok(TrayIcon::Stopped),
        PlayState::Unknown(raw) => Err(UnknownState(raw.clone())),
    }
}
