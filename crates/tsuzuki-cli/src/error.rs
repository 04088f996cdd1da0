use thiserror::Error;

use tsuzuki_api::AniListError;
use tsuzuki_core::CoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    AniList(#[from] AniListError),

    #[error("failed to read {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to serialize view tree: {0}")]
    Serialize(#[from] serde_json::Error),
}
