//! Configuration loader and schema types.
//!
//! Settings are read once at startup; only the MPD connection is
//! configurable.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
