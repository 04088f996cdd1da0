use serde::{Deserialize, Serialize};

use crate::color::ProfileColor;

/// Publication state of a media record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
    #[serde(other)]
    Unknown,
}

/// A title with language variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

impl MediaTitle {
    /// English, then romaji, then empty.
    pub fn display(&self) -> &str {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .unwrap_or("")
    }
}

/// The next scheduled episode of a releasing show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextAiring {
    pub seconds_until: i64,
    pub episode: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaRecord {
    pub id: u64,
    pub title: MediaTitle,
    pub poster_url: String,
    pub status: Option<MediaStatus>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    pub next_airing: Option<NextAiring>,
}

impl MediaRecord {
    /// Episode count, falling back to chapter count.
    pub fn total(&self) -> Option<u32> {
        self.episodes.or(self.chapters)
    }

    pub fn is_releasing(&self) -> bool {
        self.status == Some(MediaStatus::Releasing)
    }
}

/// One in-progress entry on the user's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaListEntry {
    pub progress: u32,
    pub media: MediaRecord,
    /// Color preference of the list owner, repeated on every entry.
    pub profile_color: Option<ProfileColor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MediaRecord {
        MediaRecord {
            id: 1,
            title: MediaTitle::default(),
            poster_url: String::new(),
            status: None,
            episodes: None,
            chapters: None,
            next_airing: None,
        }
    }

    #[test]
    fn test_title_fallback() {
        let both = MediaTitle {
            english: Some("Frieren: Beyond Journey's End".into()),
            romaji: Some("Sousou no Frieren".into()),
        };
        assert_eq!(both.display(), "Frieren: Beyond Journey's End");

        let romaji = MediaTitle {
            english: None,
            romaji: Some("Sousou no Frieren".into()),
        };
        assert_eq!(romaji.display(), "Sousou no Frieren");
        assert_eq!(MediaTitle::default().display(), "");
    }

    #[test]
    fn test_total_prefers_episodes() {
        let mut media = record();
        assert_eq!(media.total(), None);
        media.chapters = Some(120);
        assert_eq!(media.total(), Some(120));
        media.episodes = Some(12);
        assert_eq!(media.total(), Some(12));
    }

    #[test]
    fn test_status_tokens() {
        let status: MediaStatus = serde_json::from_str("\"NOT_YET_RELEASED\"").unwrap();
        assert_eq!(status, MediaStatus::NotYetReleased);
        let status: MediaStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(status, MediaStatus::Unknown);
    }
}
