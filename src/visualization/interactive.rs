//! Rendering playback over offline video files and live cameras.

use tracing::{debug, warn};

use super::overlay::{Overlay, Visualizer};
use super::rect::Rect;
use super::track::{DetectionView, TrackView};
use super::viewer::{ImageViewer, ViewerSpec};
use crate::capture::{DeviceFactory, DeviceGuard, VideoSource};
use crate::config::{SequenceInfo, VisualizationConfig};
use crate::error::VisualizationError;

/// Where frames come from and how they are paced.
pub enum CaptureMode<I> {
    /// Step through a video file, delivering only frames whose index is an
    /// exact multiple of the declared `frame_rate`.
    Offline {
        video: Box<dyn VideoSource<Frame = I>>,
        frame_rate: f64,
    },
    /// Grab one frame per tick from a freshly opened camera.
    Online {
        devices: Box<dyn DeviceFactory<I>>,
        resolution: (u32, u32),
    },
}

impl<I> CaptureMode<I> {
    /// Offline mode paced by the video's declared frame rate, delivering
    /// about one frame per second of video.
    ///
    /// Zero, negative and non-finite rates are rejected.
    pub fn offline<S>(video: S) -> Result<Self, VisualizationError>
    where
        S: VideoSource<Frame = I> + 'static,
    {
        let frame_rate = video.frame_rate();
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(VisualizationError::InvalidFrameRate(frame_rate));
        }
        Ok(Self::Offline {
            video: Box::new(video),
            frame_rate,
        })
    }

    pub fn online<D>(devices: D, resolution: (u32, u32)) -> Self
    where
        D: DeviceFactory<I> + 'static,
    {
        Self::Online {
            devices: Box::new(devices),
            resolution,
        }
    }

    /// Fetch the next frame to deliver, or `None` when playback must stop.
    fn next_frame(&mut self) -> Option<I> {
        match self {
            Self::Offline { video, frame_rate } => loop {
                let frame_idx = video.position();
                let Some(frame) = video.read() else {
                    debug!(frame_idx, "video source finished");
                    return None;
                };
                if frame_idx as f64 % *frame_rate == 0.0 {
                    return Some(frame);
                }
            },
            Self::Online {
                devices,
                resolution,
            } => {
                let mut device = match DeviceGuard::open(&mut **devices) {
                    Ok(device) => device,
                    Err(err) => {
                        warn!(%err, "failed to open capture device");
                        return None;
                    }
                };
                device.set_resolution(resolution.0, resolution.1);
                let frame = device.read();
                drop(device);
                if frame.is_none() {
                    warn!("capture device returned no frame");
                }
                frame
            }
        }
    }
}

/// Shows tracking output in an [`ImageViewer`].
///
/// The display resolution is derived from the sequence's aspect ratio and
/// the configured display width, independent of the source resolution.
pub struct Visualization<V: ImageViewer> {
    viewer: V,
    mode: CaptureMode<V::Image>,
    thickness: i32,
    hue_step: f64,
}

impl<V: ImageViewer> Visualization<V> {
    /// Create a controller; `build_viewer` receives the derived window
    /// parameters.
    pub fn new<B>(
        mode: CaptureMode<V::Image>,
        seq_info: &SequenceInfo,
        config: &VisualizationConfig,
        build_viewer: B,
    ) -> Result<Self, VisualizationError>
    where
        B: FnOnce(ViewerSpec) -> V,
    {
        let window_shape = seq_info.image_size.display_size(config.display_width)?;
        let mut viewer = build_viewer(ViewerSpec {
            window_shape,
            update_ms: config.update_ms,
            caption: config.window_title.clone(),
        });
        viewer.set_thickness(config.thickness);
        debug!(
            sequence = %seq_info.name,
            width = window_shape.0,
            height = window_shape.1,
            "created visualization"
        );

        Ok(Self {
            viewer,
            mode,
            thickness: config.thickness,
            hue_step: config.hue_step,
        })
    }

    /// Play back a video file.
    pub fn offline<S, B>(
        video: S,
        seq_info: &SequenceInfo,
        config: &VisualizationConfig,
        build_viewer: B,
    ) -> Result<Self, VisualizationError>
    where
        S: VideoSource<Frame = V::Image> + 'static,
        B: FnOnce(ViewerSpec) -> V,
    {
        Self::new(CaptureMode::offline(video)?, seq_info, config, build_viewer)
    }

    /// Capture from a live camera, reopening it for every frame.
    pub fn online<D, B>(
        devices: D,
        seq_info: &SequenceInfo,
        config: &VisualizationConfig,
        build_viewer: B,
    ) -> Result<Self, VisualizationError>
    where
        D: DeviceFactory<V::Image> + 'static,
        B: FnOnce(ViewerSpec) -> V,
    {
        let mode = CaptureMode::online(devices, config.camera_resolution);
        Self::new(mode, seq_info, config, build_viewer)
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn mode(&self) -> &CaptureMode<V::Image> {
        &self.mode
    }

    /// Drawing handle onto this controller's viewer.
    pub fn overlay(&mut self) -> Overlay<'_, V> {
        Overlay::new(&mut self.viewer, self.thickness, self.hue_step)
    }

    /// Run the viewer's event loop, handing every delivered frame to
    /// `frame_callback` together with a drawing handle.
    ///
    /// Returns `false` once the source is exhausted, a capture fails, or the
    /// viewer stops the loop.
    pub fn run<F>(&mut self, mut frame_callback: F, display: bool) -> bool
    where
        F: FnMut(&mut Overlay<'_, V>, V::Image),
    {
        let Self {
            viewer,
            mode,
            thickness,
            hue_step,
        } = self;
        let (thickness, hue_step) = (*thickness, *hue_step);

        let mut delivered = 0u64;
        viewer.run(
            |viewer| match mode.next_frame() {
                Some(frame) => {
                    frame_callback(&mut Overlay::new(viewer, thickness, hue_step), frame);
                    delivered += 1;
                    true
                }
                None => false,
            },
            display,
        );
        debug!(delivered, "visualization finished");
        false
    }
}

impl<V: ImageViewer> Visualizer for Visualization<V> {
    type Image = V::Image;

    fn set_image(&mut self, image: Self::Image) {
        self.overlay().set_image(image);
    }

    fn draw_groundtruth(&mut self, track_ids: &[u64], boxes: &[Rect]) {
        self.overlay().draw_groundtruth(track_ids, boxes);
    }

    fn draw_detections<D: DetectionView>(&mut self, detections: &[D]) {
        self.overlay().draw_detections(detections);
    }

    fn draw_tracks<T: TrackView>(&mut self, tracks: &[T]) {
        self.overlay().draw_tracks(tracks);
    }
}
