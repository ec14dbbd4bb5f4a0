//! Error types for capture and playback setup.

use thiserror::Error;

/// Failure to acquire a capture device.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture device unavailable: {0}")]
    DeviceUnavailable(String),
}

/// Failure to set up a visualization controller.
#[derive(Debug, Error)]
pub enum VisualizationError {
    #[error("invalid image size {width}x{height}")]
    InvalidImageSize { width: u32, height: u32 },
    /// The declared frame rate of an offline source cannot be used as a
    /// frame step.
    #[error("invalid frame rate {0}")]
    InvalidFrameRate(f64),
}
