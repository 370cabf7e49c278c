use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid zoom range: min {min} must be positive and below max {max}")]
    InvalidZoomRange { min: f32, max: f32 },

    #[error("invalid tick band: [{min}, {max}) must be positive and at least one octave wide")]
    InvalidTickBand { min: f32, max: f32 },

    #[error("invalid scroll factors: zoom in {zoom_in} must exceed 1, zoom out {zoom_out} must lie in (0, 1)")]
    InvalidScrollFactors { zoom_in: f32, zoom_out: f32 },

    #[error("ui error: {0}")]
    Ui(#[from] eframe::Error),
}
