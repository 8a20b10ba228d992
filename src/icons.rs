//! Pre-rendered progress wheel bitmaps.
//!
//! The table is rendered once by `build.rs` and embedded at compile time;
//! nothing is drawn at runtime.

include!(concat!(env!("OUT_DIR"), "/progress_icons.rs"));

/// Theme icon shown while playback is paused.
pub const PAUSED_ICON_NAME: &str = "media-playback-pause";
/// Theme icon shown while playback is stopped.
pub const STOPPED_ICON_NAME: &str = "media-playback-stop";

const ICON_BYTES: usize = (ICON_SIZE * ICON_SIZE * 4) as usize;

/// A square ARGB32 bitmap in network byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixmap {
    pub width: i32,
    pub height: i32,
    pub argb: &'static [u8],
}

/// Bitmap for `percent` in `0..=100`; larger values use the full wheel.
pub fn progress_icon(percent: u8) -> Pixmap {
    let index = usize::from(percent).min(ICON_COUNT - 1);
    let start = index * ICON_BYTES;
    Pixmap {
        width: ICON_SIZE,
        height: ICON_SIZE,
        argb: &PROGRESS_ICONS[start..start + ICON_BYTES],
    }
}
