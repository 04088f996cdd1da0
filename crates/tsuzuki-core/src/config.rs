use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

const DEFAULT_SETTINGS: &str = include_str!("../../../config/default.toml");

/// User-editable settings, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub username: String,
    pub sort: String,
    pub endpoint: String,
}

impl Settings {
    /// Load settings: the user file if it exists, otherwise the built-in defaults.
    pub fn load() -> Result<Self, CoreError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::parse(DEFAULT_SETTINGS)
        }
    }

    /// Load settings from an explicit path. Missing keys take the built-in values.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading settings");
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, CoreError> {
        let mut merged: toml::Table =
            toml::from_str(DEFAULT_SETTINGS).map_err(|e| CoreError::Config(e.to_string()))?;
        let user: toml::Table =
            toml::from_str(content).map_err(|e| CoreError::Config(e.to_string()))?;
        for (key, value) in user {
            merged.insert(key, value);
        }

        let settings: Settings = toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| CoreError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no render can use: an empty username or an endpoint
    /// that is not a URL.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.username.trim().is_empty() {
            return Err(CoreError::Config("username is empty".into()));
        }
        url::Url::parse(&self.endpoint)
            .map_err(|e| CoreError::Config(format!("invalid endpoint {:?}: {e}", self.endpoint)))?;
        Ok(())
    }

    /// Path to the user settings file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "tsuzuki")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        toml::from_str(DEFAULT_SETTINGS).expect("built-in default settings are valid TOML")
    }
}

/// Which AniList list the widget shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Anime,
    Manga,
}

impl MediaType {
    /// Case-insensitive but otherwise exact; anything other than `manga` is anime.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::to_uppercase).as_deref() {
            Some("MANGA") => Self::Manga,
            _ => Self::Anime,
        }
    }

    pub fn as_anilist_str(self) -> &'static str {
        match self {
            Self::Anime => "ANIME",
            Self::Manga => "MANGA",
        }
    }

    /// Path segment used in anilist.co links.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Manga => "manga",
        }
    }

    /// Unit named in the progress text.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Anime => "episode",
            Self::Manga => "chapter",
        }
    }
}

/// Host widget size bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetSize {
    Small,
    Medium,
    Large,
    Other,
}

impl WidgetSize {
    /// Exact match only; `"Small"` or `" small"` land in `Other`.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("small") => Self::Small,
            Some("medium") => Self::Medium,
            Some("large") => Self::Large,
            _ => Self::Other,
        }
    }

    pub fn item_count(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 3,
            Self::Large => 6,
            Self::Other => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    pub size: u32,
    pub weight: FontWeight,
}

impl Font {
    pub const fn regular(size: u32) -> Self {
        Self {
            size,
            weight: FontWeight::Regular,
        }
    }

    pub const fn bold(size: u32) -> Self {
        Self {
            size,
            weight: FontWeight::Bold,
        }
    }
}

/// Width and height of the progress bar backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarDimensions {
    pub width: u32,
    pub height: u32,
}

/// Everything one render pass needs to know, resolved once up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub username: String,
    pub media_type: MediaType,
    pub sort_key: String,
    pub widget_size: WidgetSize,
    pub item_count: usize,
    pub title_font: Font,
    pub details_font: Font,
    pub bar: BarDimensions,
}

impl WidgetConfig {
    /// Resolve the widget inputs against the settings. Never fails: unknown
    /// or missing inputs fall back to anime and the base size.
    pub fn resolve(
        widget_param: Option<&str>,
        widget_size: Option<&str>,
        settings: &Settings,
    ) -> Self {
        let media_type = MediaType::from_param(widget_param);
        let widget_size = WidgetSize::from_param(widget_size);
        let small = widget_size == WidgetSize::Small;

        Self {
            username: settings.username.clone(),
            media_type,
            sort_key: settings.sort.clone(),
            widget_size,
            item_count: widget_size.item_count(),
            title_font: Font::bold(if small { 11 } else { 15 }),
            details_font: Font::regular(10),
            bar: BarDimensions {
                width: if small { 90 } else { 265 },
                height: 6,
            },
        }
    }

    pub fn query_variables(&self) -> QueryVariables {
        QueryVariables {
            username: self.username.clone(),
            media_type: self.media_type,
            sort: self.sort_key.clone(),
            per_page: self.item_count,
        }
    }
}

/// Variables sent alongside the list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryVariables {
    pub username: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub sort: String,
    #[serde(rename = "perPage")]
    pub per_page: usize,
}
