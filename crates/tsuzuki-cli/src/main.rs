mod cli;
mod error;
mod output;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tsuzuki_api::anilist::parse_response;
use tsuzuki_api::AniListClient;
use tsuzuki_core::config::WidgetConfig;
use tsuzuki_core::view;

use cli::Cli;
use error::CliError;

const DEFAULT_FILTER: &str = "tsuzuki=info,tsuzuki_core=info,tsuzuki_api=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli, &mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "widget render failed");
            ExitCode::FAILURE
        }
    }
}

/// One render pass. `out` receives the rendered text only when every step
/// before it succeeded.
async fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let settings = cli.settings()?;
    let config = WidgetConfig::resolve(
        cli.widget_param.as_deref(),
        cli.widget_size.as_deref(),
        &settings,
    );
    tracing::info!(
        username = %config.username,
        media_type = config.media_type.as_anilist_str(),
        size = ?config.widget_size,
        items = config.item_count,
        "resolved widget config"
    );

    let entries = match &cli.input {
        Some(path) => {
            let body = std::fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.display().to_string(),
                source,
            })?;
            parse_response(&body)?
        }
        None => {
            AniListClient::with_endpoint(settings.endpoint.as_str())
                .current_list(&config.query_variables())
                .await?
        }
    };

    let (items, tree) = view::render(&config, &entries);
    let text = output::render(cli.format, cli.pretty, &items, &tree)?;

    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}
