//! Turns fetched list entries into per-slot display values.

use crate::color;
use crate::config::WidgetConfig;
use crate::format;
use crate::models::{DisplayItem, MediaListEntry, ProgressFraction};

/// Multiplier used to size the bar when the total is unknown.
const UNKNOWN_TOTAL_FACTOR: u32 = 5;

/// Accent for the whole widget, taken from the first entry's owner.
pub fn highlight_color(entries: &[MediaListEntry]) -> &'static str {
    color::resolve(entries.first().and_then(|e| e.profile_color))
}

/// One slot per configured item. Slots past the end of `entries` are `None`.
pub fn assemble(
    config: &WidgetConfig,
    entries: &[MediaListEntry],
    highlight: &str,
) -> Vec<Option<DisplayItem>> {
    (0..config.item_count)
        .map(|i| entries.get(i))
        .map(|entry| entry.map(|e| display_item(config, e, highlight)))
        .collect()
}

pub fn display_item(
    config: &WidgetConfig,
    entry: &MediaListEntry,
    highlight: &str,
) -> DisplayItem {
    let media = &entry.media;
    let total = media.total();

    let secondary_progress = if media.is_releasing() {
        media.next_airing.map(|next| next.episode)
    } else {
        None
    };

    let next_episode_label = media.next_airing.map(|next| {
        let secs = u64::try_from(next.seconds_until).unwrap_or(0);
        format::next_episode(next.episode, secs)
    });

    DisplayItem {
        title: media.title.display().to_string(),
        poster_url: media.poster_url.clone(),
        progress: ProgressFraction {
            current: entry.progress,
            total,
        },
        secondary_progress,
        bar_max: bar_max(entry.progress, total),
        progress_label: format::progress_text(entry.progress, total, config.media_type.unit()),
        next_episode_label,
        link_url: link_url(config, media.id),
        highlight_color: highlight.to_string(),
    }
}

/// The known total, or an estimate a few times past the current progress.
pub fn bar_max(progress: u32, total: Option<u32>) -> u32 {
    match total {
        Some(total) => total,
        None => progress.max(1).saturating_mul(UNKNOWN_TOTAL_FACTOR),
    }
}

pub fn link_url(config: &WidgetConfig, id: u64) -> String {
    format!("https://anilist.co/{}/{id}", config.media_type.slug())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ProfileColor;
    use crate::config::Settings;
    use crate::models::{MediaRecord, MediaStatus, MediaTitle, NextAiring};

    fn entry(id: u64, progress: u32) -> MediaListEntry {
        MediaListEntry {
            progress,
            media: MediaRecord {
                id,
                title: MediaTitle {
                    english: None,
                    romaji: Some(format!("Show {id}")),
                },
                poster_url: format!("https://img.anili.st/{id}.jpg"),
                status: Some(MediaStatus::Finished),
                episodes: Some(12),
                chapters: None,
                next_airing: None,
            },
            profile_color: Some(ProfileColor::Green),
        }
    }

    fn config(param: Option<&str>, size: &str) -> WidgetConfig {
        WidgetConfig::resolve(param, Some(size), &Settings::default())
    }

    #[test]
    fn test_highlight_from_first_entry() {
        let mut entries = vec![entry(1, 1), entry(2, 2)];
        entries[1].profile_color = Some(ProfileColor::Red);
        assert_eq!(highlight_color(&entries), "#70C661");

        entries[0].profile_color = None;
        assert_eq!(highlight_color(&entries), "#EEA2D3");
        assert_eq!(highlight_color(&[]), "#EEA2D3");
    }

    #[test]
    fn test_slots_keep_list_order() {
        let config = config(None, "medium");
        let entries = vec![entry(10, 1), entry(20, 2), entry(30, 3)];
        let items = assemble(&config, &entries, "#70C661");

        assert_eq!(items.len(), 3);
        let ids: Vec<_> = items
            .iter()
            .map(|i| i.as_ref().unwrap().link_url.clone())
            .collect();
        assert_eq!(
            ids,
            [
                "https://anilist.co/anime/10",
                "https://anilist.co/anime/20",
                "https://anilist.co/anime/30",
            ]
        );
    }

    #[test]
    fn test_short_list_leaves_empty_slots() {
        let config = config(None, "large");
        let items = assemble(&config, &[entry(1, 1), entry(2, 2)], "#70C661");
        assert_eq!(items.len(), 6);
        assert_eq!(items.iter().filter(|i| i.is_some()).count(), 2);
        assert!(items[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_missing_fields() {
        let config = config(None, "small");
        let mut e = entry(7, 0);
        e.media.episodes = None;
        e.media.status = Some(MediaStatus::Releasing);

        let item = display_item(&config, &e, "#EEA2D3");
        assert_eq!(item.progress.total, None);
        assert_eq!(item.progress_label, "0 / ?? episodes");
        assert_eq!(item.secondary_progress, None);
        assert_eq!(item.next_episode_label, None);
        assert_eq!(item.bar_max, 5);

        e.progress = 8;
        assert_eq!(display_item(&config, &e, "#EEA2D3").bar_max, 40);
    }

    #[test]
    fn test_releasing_sets_secondary_progress() {
        let config = config(None, "small");
        let mut e = entry(3, 4);
        e.media.next_airing = Some(NextAiring {
            seconds_until: 90_000,
            episode: 6,
        });

        let finished = display_item(&config, &e, "#EEA2D3");
        assert_eq!(finished.secondary_progress, None);
        assert_eq!(
            finished.next_episode_label.as_deref(),
            Some("Episode 6 in 1 days")
        );

        e.media.status = Some(MediaStatus::Releasing);
        let releasing = display_item(&config, &e, "#EEA2D3");
        assert_eq!(releasing.secondary_progress, Some(6));
    }

    #[test]
    fn test_negative_countdown_clamps() {
        let config = config(None, "small");
        let mut e = entry(3, 4);
        e.media.next_airing = Some(NextAiring {
            seconds_until: -30,
            episode: 5,
        });
        let item = display_item(&config, &e, "#EEA2D3");
        assert_eq!(
            item.next_episode_label.as_deref(),
            Some("Episode 5 in 0 seconds")
        );
    }

    #[test]
    fn test_manga_links_and_units() {
        let config = config(Some("manga"), "small");
        let mut e = entry(30002, 120);
        e.media.episodes = None;
        e.media.chapters = Some(380);

        let item = display_item(&config, &e, "#EEA2D3");
        assert_eq!(item.link_url, "https://anilist.co/manga/30002");
        assert_eq!(item.progress_label, "120 / 380 chapters");
        assert_eq!(item.bar_max, 380);
    }

    #[test]
    fn test_title_prefers_english() {
        let config = config(None, "small");
        let mut e = entry(1, 1);
        e.media.title.english = Some("The Apothecary Diaries".into());
        let item = display_item(&config, &e, "#EEA2D3");
        assert_eq!(item.title, "The Apothecary Diaries");

        e.media.title = MediaTitle::default();
        assert_eq!(display_item(&config, &e, "#EEA2D3").title, "");
    }
}
