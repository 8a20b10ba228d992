//! What the indicator needs to know about the player, independent of the
//! client library that fetched it.

/// Playback state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayState {
    Play,
    Pause,
    Stop,
    /// A state the client library could not parse, kept verbatim.
    Unknown(String),
}

/// Snapshot of the player status. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub state: PlayState,
    pub elapsed: f64,
    pub total: f64,
}

/// Metadata tags the indicator looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Title,
    Track,
    Name,
    Artist,
    AlbumArtist,
    Composer,
    Performer,
    Album,
    Disc,
}

impl Tag {
    /// Key used for this tag by the server.
    pub fn key(self) -> &'static str {
        match self {
            Tag::Title => "Title",
            Tag::Track => "Track",
            Tag::Name => "Name",
            Tag::Artist => "Artist",
            Tag::AlbumArtist => "AlbumArtist",
            Tag::Composer => "Composer",
            Tag::Performer => "Performer",
            Tag::Album => "Album",
            Tag::Disc => "Disc",
        }
    }
}

/// The current song.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    /// A path relative to the music directory, or a URL.
    pub uri: String,
    /// Metadata in server order. Tags may repeat.
    pub tags: Vec<(String, String)>,
}

impl Song {
    /// First value of `tag`, if the song carries it.
    pub fn tag(&self, tag: Tag) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(tag.key()))
            .map(|(_, value)| value.as_str())
    }
}
