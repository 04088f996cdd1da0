use tsuzuki_core::models::DisplayItem;
use tsuzuki_core::view::Node;

use crate::cli::OutputFormat;

/// Text written to stdout for one render.
pub fn render(
    format: OutputFormat,
    pretty: bool,
    items: &[Option<DisplayItem>],
    tree: &Node,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(tree),
        OutputFormat::Json => serde_json::to_string(tree),
        OutputFormat::Plain => Ok(plain(items)),
    }
}

fn plain(items: &[Option<DisplayItem>]) -> String {
    items
        .iter()
        .flatten()
        .map(|item| match &item.next_episode_label {
            Some(next) => format!("{}\n  {} · {}", item.title, item.progress_label, next),
            None => format!("{}\n  {}", item.title, item.progress_label),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use tsuzuki_core::config::{Settings, WidgetConfig};
    use tsuzuki_core::models::ProgressFraction;
    use tsuzuki_core::view;

    use super::*;

    fn config() -> WidgetConfig {
        WidgetConfig::resolve(None, None, &Settings::default())
    }

    fn item(title: &str, next: Option<&str>) -> DisplayItem {
        DisplayItem {
            title: title.into(),
            poster_url: String::new(),
            progress: ProgressFraction {
                current: 3,
                total: Some(12),
            },
            secondary_progress: None,
            bar_max: 12,
            progress_label: "3 / 12 episodes".into(),
            next_episode_label: next.map(str::to_string),
            link_url: "https://anilist.co/anime/1".into(),
            highlight_color: "#EEA2D3".into(),
        }
    }

    #[test]
    fn test_plain_skips_empty_slots() {
        let items = vec![
            Some(item("Dandadan", Some("Episode 4 in 2 days"))),
            Some(item("Blue Box", None)),
            None,
        ];
        let tree = view::build(&config(), &items);
        let text = render(OutputFormat::Plain, false, &items, &tree).unwrap();
        assert_eq!(
            text,
            "Dandadan\n  3 / 12 episodes · Episode 4 in 2 days\nBlue Box\n  3 / 12 episodes"
        );
    }

    #[test]
    fn test_json_is_single_line_unless_pretty() {
        let items = vec![Some(item("Dandadan", None))];
        let tree = view::build(&config(), &items);

        let compact = render(OutputFormat::Json, false, &items, &tree).unwrap();
        assert!(!compact.contains('\n'));
        let pretty = render(OutputFormat::Json, true, &items, &tree).unwrap();
        assert!(pretty.contains('\n'));

        let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
        let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        assert_eq!(a, b);
    }
}
