use packslip_core::SlipError;
use packslip_render_core::RenderError;
use packslip_source::SourceError;
use thiserror::Error;

/// A comprehensive error type for packing-slip generation.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Packing slip failed: {0}")]
    Slip(#[from] SlipError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Shipment input is invalid: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
