use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use tsuzuki_core::config::Settings;
use tsuzuki_core::CoreError;

#[derive(Debug, Parser)]
#[command(name = "tsuzuki")]
#[command(about = "Render an AniList in-progress list as a widget view tree")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// Media type shown by the widget (anime or manga).
    #[arg(long, env = "WIDGET_PARAM")]
    pub widget_param: Option<String>,

    /// Host widget size (small, medium or large).
    #[arg(long, env = "WIDGET_SIZE")]
    pub widget_size: Option<String>,

    /// Settings file to use instead of the per-user one.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub username: Option<String>,

    /// AniList MediaListSort value, e.g. UPDATED_TIME_DESC.
    #[arg(long)]
    pub sort: Option<String>,

    /// Render from a saved AniList response body instead of the network.
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Plain,
}

impl Cli {
    /// Settings file (explicit or per-user) with command-line overrides applied.
    /// The overridden settings are validated again.
    pub fn settings(&self) -> Result<Settings, CoreError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };
        if let Some(username) = &self.username {
            settings.username = username.clone();
        }
        if let Some(sort) = &self.sort {
            settings.sort = sort.clone();
        }
        settings.validate()?;
        Ok(settings)
    }
}
