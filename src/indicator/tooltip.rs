use std::path::Path;

use crate::player::{Song, Tag};

const TITLE_TAGS: &[Tag] = &[Tag::Title, Tag::Track, Tag::Name];
const ARTIST_TAGS: &[Tag] = &[Tag::Artist, Tag::AlbumArtist, Tag::Composer, Tag::Performer];
const ALBUM_TAGS: &[Tag] = &[Tag::Album, Tag::Disc];

/// Try `lookup` on each candidate in order and keep the first hit.
pub fn first_match<C, T>(
    candidates: impl IntoIterator<Item = C>,
    lookup: impl FnMut(C) -> Option<T>,
) -> Option<T> {
    candidates.into_iter().find_map(lookup)
}

/// First non-empty value among `tags`, in order.
pub fn first_tag<'a>(song: &'a Song, tags: &[Tag]) -> Option<&'a str> {
    first_match(tags.iter().copied(), |tag| {
        song.tag(tag).filter(|value| !value.is_empty())
    })
}

/// Hover text for `song`, or `None` when the tooltip should be hidden.
///
/// Songs with a title, artist or album render as
/// `<b>title</b> from <b>album</b> by <b>artist</b>` with each value
/// escaped. Songs with none of them show the last component of their URI.
pub fn tooltip_markup(song: Option<&Song>) -> Option<String> {
    let song = song?;

    let title = first_tag(song, TITLE_TAGS);
    let artist = first_tag(song, ARTIST_TAGS);
    let album = first_tag(song, ALBUM_TAGS);

    if title.is_none() && artist.is_none() && album.is_none() {
        return Some(file_name(&song.uri).to_string());
    }

    Some(format!(
        "<b>{}</b> from <b>{}</b> by <b>{}</b>",
        escape_markup(title.unwrap_or_default()),
        escape_markup(album.unwrap_or_default()),
        escape_markup(artist.unwrap_or_default()),
    ))
}

/// Escape text for embedding in tooltip markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// Last path component; URIs without one (e.g. "" or "..") show as-is.
// An empty URI therefore shows as "", not the "." that basename(3) gives.
fn file_name(uri: &str) -> &str {
    Path::new(uri)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(uri)
}
