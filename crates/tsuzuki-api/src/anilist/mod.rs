pub mod client;
pub mod error;
pub mod types;

pub use client::{parse_response, AniListClient};
pub use error::AniListError;
