pub mod anilist;

pub use anilist::{AniListClient, AniListError};
