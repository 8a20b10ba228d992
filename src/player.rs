//! The two queries the poll loop makes against the music player, served by
//! the `mpd` client crate.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use mpd::error::{Error, ParseError};
use tracing::debug;

mod types;

pub use types::*;

/// Socket timeout used when the caller asks for the default (zero).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A live session with the music player.
pub trait PlayerSession {
    /// The song at the current position, if any.
    fn current_song(&mut self) -> mpd::error::Result<Option<Song>>;
    fn status(&mut self) -> mpd::error::Result<Status>;
}

impl PlayerSession for mpd::Client {
    fn current_song(&mut self) -> mpd::error::Result<Option<Song>> {
        Ok(self.currentsong()?.map(Song::from))
    }

    fn status(&mut self) -> mpd::error::Result<Status> {
        match mpd::Client::status(self) {
            Ok(status) => Ok(Status::from(status)),
            // The library refuses states it does not know; hand them to the
            // status mapper so it can report them.
            Err(Error::Parse(ParseError::BadState(raw))) => Ok(Status {
                state: PlayState::Unknown(raw),
                elapsed: 0.0,
                total: 0.0,
            }),
            Err(e) => Err(e),
        }
    }
}

/// Connect to `host:port`.
///
/// `timeout` bounds the connect and every later read or write; zero
/// selects `DEFAULT_TIMEOUT`. The session is never re-established: once the
/// socket breaks every query fails.
pub fn connect(host: &str, port: u16, timeout: Duration) -> mpd::error::Result<mpd::Client> {
    let timeout = if timeout.is_zero() {
        DEFAULT_TIMEOUT
    } else {
        timeout
    };

    let mut last_err = None;
    for addr in (host, port).to_socket_addrs().map_err(Error::Io)? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => {
                stream.set_read_timeout(Some(timeout)).map_err(Error::Io)?;
                stream.set_write_timeout(Some(timeout)).map_err(Error::Io)?;
                return mpd::Client::new(stream);
            }
            Err(e) => {
                debug!(%addr, error = %e, "connect attempt failed");
                last_err = Some(e);
            }
        }
    }

    Err(Error::Io(last_err.unwrap_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{host}:{port} did not resolve to any address"),
        )
    })))
}

impl From<mpd::Song> for Song {
    fn from(song: mpd::Song) -> Self {
        // The library lifts these three out of the tag list.
        let lifted = [
            (Tag::Title, song.title),
            (Tag::Artist, song.artist),
            (Tag::Name, song.name),
        ];
        let mut tags: Vec<(String, String)> = lifted
            .into_iter()
            .filter_map(|(tag, value)| Some((tag.key().to_string(), value?)))
            .collect();
        tags.extend(song.tags);

        Song {
            uri: song.file,
            tags,
        }
    }
}

impl From<mpd::Status> for Status {
    fn from(status: mpd::Status) -> Self {
        Status {
            state: match status.state {
                mpd::State::Play => PlayState::Play,
                mpd::State::Pause => PlayState::Pause,
                mpd::State::Stop => PlayState::Stop,
            },
            elapsed: seconds(status.elapsed),
            total: seconds(status.duration),
        }
    }
}

fn seconds(time: Option<Duration>) -> f64 {
    time.map_or(0.0, |t| t.as_secs_f64())
}
