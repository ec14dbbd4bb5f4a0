//! Playback configuration and sequence metadata.

use serde::Deserialize;

use crate::error::VisualizationError;
use crate::visualization::DEFAULT_HUE_STEP;

/// Configuration for the interactive [`Visualization`](crate::Visualization).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisualizationConfig {
    /// Display refresh interval in milliseconds.
    pub update_ms: u64,
    /// Width of the derived display resolution; the height follows the
    /// sequence aspect ratio.
    pub display_width: u32,
    /// Stroke thickness for every drawn box.
    pub thickness: i32,
    /// Hue step used to color track identities.
    pub hue_step: f64,
    /// Resolution requested from a live camera before each capture.
    pub camera_resolution: (u32, u32),
    pub window_title: String,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            update_ms: 5,
            display_width: 2048,
            thickness: 2,
            hue_step: DEFAULT_HUE_STEP,
            camera_resolution: (1280, 800),
            window_title: "Figure".to_string(),
        }
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Display resolution `(width, height)` with the given width that keeps
    /// this size's aspect ratio. The height is truncated.
    pub fn display_size(&self, display_width: u32) -> Result<(u32, u32), VisualizationError> {
        if self.width == 0 || self.height == 0 {
            return Err(VisualizationError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        let aspect_ratio = self.height as f64 / self.width as f64;
        Ok((display_width, (aspect_ratio * display_width as f64) as u32))
    }
}

/// Metadata of the sequence being played back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceInfo {
    pub name: String,
    pub image_size: ImageSize,
}

impl SequenceInfo {
    pub fn new(name: impl Into<String>, image_size: ImageSize) -> Self {
        Self {
            name: name.into(),
            image_size,
        }
    }
}
