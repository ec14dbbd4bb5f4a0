//! Frame playback controllers and the track overlay they draw.

mod builder;
mod color;
mod headless;
mod interactive;
mod overlay;
mod rect;
#[cfg(test)]
mod testing;
mod track;
mod viewer;

pub use builder::DetectionBuilder;
pub use color::{DEFAULT_HUE_STEP, hsv_to_rgb, quantize, unique_color_float, unique_color_u8};
pub use headless::NoVisualization;
pub use interactive::{CaptureMode, Visualization};
pub use overlay::{DETECTION_COLOR, Overlay, Visualizer};
pub use rect::{PixelRect, Rect};
pub use track::{Detection, DetectionView, Track, TrackState, TrackView};
pub use viewer::{ImageViewer, ViewerSpec};
