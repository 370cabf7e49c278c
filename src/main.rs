mod app;
mod config;
mod error;
mod format;
mod render;
mod ticker;
mod ticks;
mod view;

use config::ViewConfig;
use error::PlotError;

fn main() -> Result<(), PlotError> {
    tracing_subscriber::fmt::init();

    let config = ViewConfig::default();
    config.validate()?;

    tracing::info!(
        min_zoom = config.min_zoom,
        max_zoom = config.max_zoom,
        drag_interval_ms = config.drag_interval.as_millis() as u64,
        "starting plot viewer"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Plot Viewer")
            .with_inner_size([config.initial_surface.x, config.initial_surface.y])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Plot Viewer",
        options,
        Box::new(|creation_context| Ok(Box::new(app::PlotApp::new(creation_context, config)))),
    )?;

    Ok(())
}
