//! What the tray shows for a given player state.
//!
//! `icon` maps a status to a progress wheel or a state glyph; `tooltip`
//! turns the current song into the hover text.

mod icon;
mod tooltip;

pub use icon::*;
pub use tooltip::*;
