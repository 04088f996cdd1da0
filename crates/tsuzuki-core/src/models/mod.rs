pub mod display;
pub mod media;

pub use display::{DisplayItem, ProgressFraction};
pub use media::{MediaListEntry, MediaRecord, MediaStatus, MediaTitle, NextAiring};
