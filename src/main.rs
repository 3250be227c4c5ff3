// Main entry point - Dependency injection and one-shot chart configuration
use std::sync::Arc;

use anyhow::Context;
use frametime_graph::application::frame_time_service::{FrameTimeGraphService, SelectOutcome};
use frametime_graph::application::series_composer::SeriesComposer;
use frametime_graph::domain::display_mode::DisplayMode;
use frametime_graph::infrastructure::config::load_app_config;
use frametime_graph::infrastructure::json_capture_repository::JsonCaptureRepository;
use frametime_graph::infrastructure::logging::init_logging;
use frametime_graph::presentation::render_adapter::render_config;

const USAGE: &str = "usage: frametime-graph <capture-id> [raw|average|both|none]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration, then logging
    let config = load_app_config()?;
    init_logging(&config.logging);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mode = args
        .get(1)
        .map(|name| name.parse::<DisplayMode>().map_err(anyhow::Error::msg))
        .transpose()
        .context(USAGE)?
        .unwrap_or(DisplayMode::RawPlusAverage);

    // Create repository (infrastructure layer)
    let repository = Arc::new(JsonCaptureRepository::new(config.capture_dir.clone()));

    // Create service (application layer)
    let service = FrameTimeGraphService::new(
        repository,
        SeriesComposer::new(config.smoothing.window),
        mode,
    );

    let Some(selection_id) = args.first() else {
        let captures = service.list_captures().await?;
        tracing::info!(
            "{} captures available in {}",
            captures.len(),
            config.capture_dir.display()
        );
        for capture in captures {
            println!("{}", capture);
        }
        eprintln!("{}", USAGE);
        return Ok(());
    };

    tracing::info!("Rendering {} as {:?}", selection_id, mode);
    let payload = match service.select(selection_id).await {
        SelectOutcome::Ready(payload) => payload,
        SelectOutcome::Failed(e) => return Err(e).context("Failed to load capture"),
        SelectOutcome::Stale => anyhow::bail!("Selection {} was superseded", selection_id),
    };

    // Hand the configuration to the chart widget
    let render = render_config(&payload, &config.theme);
    println!("{}", serde_json::to_string_pretty(&render)?);

    Ok(())
}
