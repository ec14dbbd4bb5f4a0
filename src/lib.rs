//! Playback harness and track overlay for multi-object tracking pipelines.
//!
//! A frame callback runs the detector/tracker and then draws detections,
//! confirmed tracks and ground truth through a [`Visualizer`]. The same
//! callback can be driven headlessly by [`NoVisualization`] or rendered
//! through an [`ImageViewer`] backend by [`Visualization`].

pub mod capture;
pub mod config;
pub mod error;
pub mod visualization;

pub use capture::{CameraDevice, DeviceFactory, DeviceGuard, FrameSource, VecSource, VideoSource};
pub use config::{ImageSize, SequenceInfo, VisualizationConfig};
pub use error::{CaptureError, VisualizationError};
pub use visualization::{
    CaptureMode, DEFAULT_HUE_STEP, DETECTION_COLOR, Detection, DetectionBuilder,
    DetectionView, ImageViewer, NoVisualization, Overlay, PixelRect, Rect, Track, TrackState,
    TrackView, ViewerSpec, Visualization, Visualizer, unique_color_float, unique_color_u8,
};
