use std::thread;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::icons::{self, PAUSED_ICON_NAME, STOPPED_ICON_NAME};
use crate::indicator::{TrayIcon, select_icon, tooltip_markup};
use crate::player::PlayerSession;
use crate::tray::TraySurface;

/// Interval between two polls of the player.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Whether the poll loop should schedule another poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Continue,
    Stop,
}

/// Query the player once and redraw the tray.
///
/// Returns `Stop` when the player reports a state that cannot be drawn or
/// when the status query fails.
pub fn poll<P, T>(session: &mut P, tray: &mut T) -> PollOutcome
where
    P: PlayerSession + ?Sized,
    T: TraySurface + ?Sized,
{
    let song = session.current_song().unwrap_or_else(|e| {
        warn!(error = %e, "failed to query current song");
        None
    });

    let status = match session.status() {
        Ok(status) => status,
        Err(e) => {
            error!(error = %e, "failed to query mpd status, polling stopped");
            return PollOutcome::Stop;
        }
    };
    let icon = select_icon(&status);

    // The server keeps reporting the last song after a stop.
    let tooltip = match icon {
        Ok(TrayIcon::Stopped) => None,
        _ => tooltip_markup(song.as_ref()),
    };
    match tooltip {
        Some(markup) => tray.set_tooltip_markup(&markup),
        None => tray.clear_tooltip(),
    }

    match icon {
        Ok(TrayIcon::Progress(index)) => {
            debug!(percent = index.get(), "playing");
            tray.set_icon_pixmap(icons::progress_icon(index.get()));
        }
        Ok(TrayIcon::Paused) => tray.set_icon_name(PAUSED_ICON_NAME),
        Ok(TrayIcon::Stopped) => tray.set_icon_name(STOPPED_ICON_NAME),
        Err(e) => {
            error!("{e}, polling stopped");
            return PollOutcome::Stop;
        }
    }

    PollOutcome::Continue
}

/// Poll immediately, then every `interval`, until a poll returns `Stop`.
/// Returns the number of polls made.
pub fn run_poll_loop<P, T>(session: &mut P, tray: &mut T, interval: Duration) -> u64
where
    P: PlayerSession + ?Sized,
    T: TraySurface + ?Sized,
{
    let mut polls = 0;
    loop {
        polls += 1;
        if poll(session, tray) == PollOutcome::Stop {
            return polls;
        }
        thread::sleep(interval);
    }
}
