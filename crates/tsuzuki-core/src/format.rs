//! Display formatting helpers for airing countdowns and progress text.

const MINUTE: u64 = 60;
const HOUR: u64 = 3_600;
const DAY: u64 = 86_400;
const SIX_DAYS: u64 = 518_400;
const WEEK: u64 = 604_800;
/// 365.0004 days.
const YEAR: f64 = 31_536_034.56;
/// A twelfth of [`YEAR`].
const MONTH: f64 = 2_628_002.88;

/// Coarse countdown until `secs` from now, e.g. `"3 days"` or `"a week"`.
///
/// Returns an empty string for anything a year or more away.
pub fn time_until(secs: u64) -> String {
    if secs < MINUTE {
        format!("{secs} seconds")
    } else if secs < HOUR {
        format!("{} minutes", rounded(secs, MINUTE as f64))
    } else if secs < DAY {
        format!("{} hours", rounded(secs, HOUR as f64))
    } else if secs < SIX_DAYS {
        format!("{} days", rounded(secs, DAY as f64))
    } else if secs < WEEK {
        // Six days and up reads as a week.
        "a week".into()
    } else if (secs as f64) < YEAR {
        format!("{} months", rounded(secs, MONTH))
    } else {
        String::new()
    }
}

fn rounded(secs: u64, unit: f64) -> u64 {
    (secs as f64 / unit).round() as u64
}

/// `"12 / 24 episodes"`, or `"12 / ?? chapters"` when the total is unknown.
pub fn progress_text(current: u32, total: Option<u32>, unit: &str) -> String {
    match total {
        Some(total) => format!("{current} / {total} {unit}s"),
        None => format!("{current} / ?? {unit}s"),
    }
}

/// `"Episode 5 in 2 days"`.
pub fn next_episode(episode: u32, secs_until: u64) -> String {
    format!("Episode {episode} in {}", time_until(secs_until))
}
