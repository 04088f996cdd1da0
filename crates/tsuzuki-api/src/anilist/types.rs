use serde::Deserialize;

use tsuzuki_core::color::ProfileColor;
use tsuzuki_core::models::{MediaListEntry, MediaRecord, MediaStatus, MediaTitle, NextAiring};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    pub status: Option<u16>,
}

// ── Current list query ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: PageData,
}

#[derive(Debug, Deserialize)]
pub struct PageData {
    #[serde(rename = "mediaList")]
    pub media_list: Vec<AniListListEntry>,
}

#[derive(Debug, Deserialize)]
pub struct AniListListEntry {
    pub progress: Option<u32>,
    pub media: AniListMedia,
    pub user: Option<AniListUser>,
}

#[derive(Debug, Deserialize)]
pub struct AniListMedia {
    pub id: u64,
    pub title: Option<AniListTitle>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<CoverImage>,
    pub status: Option<MediaStatus>,
    pub episodes: Option<u32>,
    pub chapters: Option<u32>,
    #[serde(rename = "nextAiringEpisode")]
    pub next_airing_episode: Option<AiringSchedule>,
}

#[derive(Debug, Deserialize)]
pub struct AniListTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoverImage {
    pub medium: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AiringSchedule {
    #[serde(rename = "timeUntilAiring")]
    pub time_until_airing: i64,
    pub episode: u32,
}

#[derive(Debug, Deserialize)]
pub struct AniListUser {
    pub options: Option<UserOptions>,
}

#[derive(Debug, Deserialize)]
pub struct UserOptions {
    #[serde(rename = "profileColor")]
    pub profile_color: Option<String>,
}

// ── Conversions ──────────────────────────────────────────────────

fn map_profile_color(token: Option<&str>) -> Option<ProfileColor> {
    let token = token?;
    let color = ProfileColor::from_token(token);
    if color.is_none() {
        tracing::warn!(token, "unrecognized profile color, using default accent");
    }
    color
}

impl AniListMedia {
    pub fn into_record(self) -> MediaRecord {
        if self.status == Some(MediaStatus::Unknown) {
            tracing::warn!(id = self.id, "unrecognized media status");
        }

        MediaRecord {
            id: self.id,
            title: self
                .title
                .map(|t| MediaTitle {
                    english: t.english,
                    romaji: t.romaji,
                })
                .unwrap_or_default(),
            poster_url: self.cover_image.and_then(|c| c.medium).unwrap_or_default(),
            status: self.status,
            episodes: self.episodes,
            chapters: self.chapters,
            next_airing: self.next_airing_episode.map(|n| NextAiring {
                seconds_until: n.time_until_airing,
                episode: n.episode,
            }),
        }
    }
}

impl AniListListEntry {
    pub fn into_entry(self) -> MediaListEntry {
        let color_token = self
            .user
            .as_ref()
            .and_then(|u| u.options.as_ref())
            .and_then(|o| o.profile_color.as_deref());

        MediaListEntry {
            progress: self.progress.unwrap_or(0),
            profile_color: map_profile_color(color_token),
            media: self.media.into_record(),
        }
    }
}
