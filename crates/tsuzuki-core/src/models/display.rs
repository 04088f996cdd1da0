use serde::Serialize;

/// Watched/read count against the known total, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressFraction {
    pub current: u32,
    pub total: Option<u32>,
}

/// Per-slot values the view tree is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub title: String,
    pub poster_url: String,
    pub progress: ProgressFraction,
    /// Latest aired episode; only set for releasing media.
    pub secondary_progress: Option<u32>,
    /// Length the bars are measured against. Never shown as text.
    pub bar_max: u32,
    pub progress_label: String,
    pub next_episode_label: Option<String>,
    pub link_url: String,
    pub highlight_color: String,
}
