//! Playback without rendering.

use tracing::debug;

use super::overlay::Visualizer;
use super::rect::Rect;
use super::track::{DetectionView, TrackView};
use crate::capture::FrameSource;

/// A dummy visualization that loops through every frame of a source to
/// update the tracker without drawing anything.
///
/// Useful for batch evaluation and throughput measurements: the frame
/// callback is the same one the rendering controller drives.
#[derive(Debug)]
pub struct NoVisualization<S> {
    source: S,
}

impl<S: FrameSource> NoVisualization<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Deliver every frame to `frame_callback` in source order until a read
    /// fails.
    ///
    /// Always returns `false`: the source is finished.
    pub fn run<F>(&mut self, mut frame_callback: F) -> bool
    where
        F: FnMut(&mut Self, S::Frame),
    {
        let mut delivered = 0u64;
        while let Some(frame) = self.source.read() {
            frame_callback(self, frame);
            delivered += 1;
        }
        debug!(delivered, "frame source finished");
        false
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: FrameSource> Visualizer for NoVisualization<S> {
    type Image = S::Frame;

    fn set_image(&mut self, _image: Self::Image) {}

    fn draw_groundtruth(&mut self, _track_ids: &[u64], _boxes: &[Rect]) {}

    fn draw_detections<D: DetectionView>(&mut self, _detections: &[D]) {}

    fn draw_tracks<T: TrackView>(&mut self, _tracks: &[T]) {}
}
