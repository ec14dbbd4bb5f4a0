//! Drawing operations shared by every playback controller.

use super::color::unique_color_u8;
use super::rect::Rect;
use super::track::{DetectionView, TrackView};
use super::viewer::ImageViewer;

/// Stroke color for detections (RGB red).
pub const DETECTION_COLOR: [u8; 3] = [255, 0, 0];

/// Drawing operations a frame callback may call.
///
/// Implemented by the rendering [`Overlay`] and by the no-op
/// [`NoVisualization`](super::NoVisualization), so one callback can drive
/// both.
pub trait Visualizer {
    /// Frame type delivered to the callback.
    type Image;

    /// Set the image drawn on by the following operations.
    fn set_image(&mut self, image: Self::Image);

    /// Draw ground-truth boxes, each labeled and colored by its id.
    fn draw_groundtruth(&mut self, track_ids: &[u64], boxes: &[Rect]);

    /// Draw detections, unlabeled, in [`DETECTION_COLOR`].
    fn draw_detections<D: DetectionView>(&mut self, detections: &[D]);

    /// Draw confirmed tracks updated in the current frame. Tentative and
    /// stale tracks are skipped.
    fn draw_tracks<T: TrackView>(&mut self, tracks: &[T]);
}

/// Draws onto a borrowed [`ImageViewer`].
pub struct Overlay<'a, V> {
    viewer: &'a mut V,
    thickness: i32,
    hue_step: f64,
}

impl<'a, V: ImageViewer> Overlay<'a, V> {
    pub fn new(viewer: &'a mut V, thickness: i32, hue_step: f64) -> Self {
        Self {
            viewer,
            thickness,
            hue_step,
        }
    }

    fn labeled_box(&mut self, track_id: u64, tlwh: Rect) {
        self.viewer.set_color(unique_color_u8(track_id, self.hue_step));
        let label = track_id.to_string();
        self.viewer.rectangle(tlwh.to_pixels(), Some(label.as_str()));
    }
}

impl<V: ImageViewer> Visualizer for Overlay<'_, V> {
    type Image = V::Image;

    fn set_image(&mut self, image: Self::Image) {
        self.viewer.set_image(image);
    }

    fn draw_groundtruth(&mut self, track_ids: &[u64], boxes: &[Rect]) {
        self.viewer.set_thickness(self.thickness);
        for (&track_id, &tlwh) in track_ids.iter().zip(boxes) {
            self.labeled_box(track_id, tlwh);
        }
    }

    fn draw_detections<D: DetectionView>(&mut self, detections: &[D]) {
        self.viewer.set_thickness(self.thickness);
        self.viewer.set_color(DETECTION_COLOR);
        for detection in detections {
            self.viewer.rectangle(detection.tlwh().to_pixels(), None);
        }
    }

    fn draw_tracks<T: TrackView>(&mut self, tracks: &[T]) {
        self.viewer.set_thickness(self.thickness);
        for track in tracks {
            if !track.is_confirmed() || track.time_since_update() > 0 {
                continue;
            }
            self.labeled_box(track.track_id(), track.to_tlwh());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::DEFAULT_HUE_STEP;
    use crate::visualization::rect::PixelRect;
    use crate::visualization::testing::{RecordingViewer, spec};
    use crate::visualization::track::{Detection, Track, TrackState};

    fn draw<F>(f: F) -> RecordingViewer
    where
        F: FnOnce(&mut Overlay<'_, RecordingViewer>),
    {
        let mut viewer = RecordingViewer::new(spec());
        f(&mut Overlay::new(&mut viewer, 2, DEFAULT_HUE_STEP));
        viewer
    }

    #[test]
    fn test_draw_groundtruth_labels_and_colors() {
        let viewer = draw(|overlay| {
            overlay.draw_groundtruth(
                &[1, 2],
                &[Rect::new(10.7, 20.2, 30.9, 40.5), Rect::new(0.0, 0.0, 5.0, 5.0)],
            );
        });

        assert_eq!(viewer.strokes.len(), 2);
        assert_eq!(viewer.strokes[0].rect, PixelRect::new(10, 20, 30, 40));
        assert_eq!(viewer.strokes[0].label.as_deref(), Some("1"));
        assert_eq!(viewer.strokes[0].color, [0, 255, 117]);
        assert_eq!(viewer.strokes[0].thickness, 2);
        assert_eq!(viewer.strokes[1].label.as_deref(), Some("2"));
        assert_eq!(viewer.strokes[1].color, [234, 0, 255]);
    }

    #[test]
    fn test_draw_groundtruth_stops_at_shorter_input() {
        let viewer = draw(|overlay| {
            overlay.draw_groundtruth(&[1, 2, 3], &[Rect::new(0.0, 0.0, 5.0, 5.0)]);
        });
        assert_eq!(viewer.strokes.len(), 1);
    }

    #[test]
    fn test_draw_detections_in_red_without_label() {
        let viewer = draw(|overlay| {
            overlay.draw_detections(&[
                Detection::new(10.0, 20.0, 50.0, 80.0, 0.9),
                Detection::new(0.5, 0.5, 10.5, 10.5, 0.3),
            ]);
        });

        assert_eq!(viewer.strokes.len(), 2);
        for stroke in &viewer.strokes {
            assert_eq!(stroke.color, DETECTION_COLOR);
            assert_eq!(stroke.thickness, 2);
            assert_eq!(stroke.label, None);
        }
        assert_eq!(viewer.strokes[0].rect, PixelRect::new(10, 20, 40, 60));
        assert_eq!(viewer.strokes[1].rect, PixelRect::new(0, 0, 10, 10));
    }

    #[test]
    fn test_draw_tracks_skips_tentative_and_stale() {
        let tlwh = Rect::new(1.0, 2.0, 3.0, 4.0);
        let tracks = vec![
            Track::new(1, tlwh),
            Track::new(2, tlwh).confirmed(),
            Track::new(3, tlwh).confirmed().with_time_since_update(1),
            Track::new(4, tlwh).with_time_since_update(5),
            Track {
                state: TrackState::Deleted,
                ..Track::new(6, tlwh)
            },
            Track::new(5, tlwh).confirmed(),
        ];
        let viewer = draw(|overlay| overlay.draw_tracks(&tracks));

        let labels: Vec<_> = viewer
            .strokes
            .iter()
            .map(|s| s.label.clone().unwrap())
            .collect();
        assert_eq!(labels, ["2", "5"]);
        assert_eq!(
            viewer.strokes[0].color,
            unique_color_u8(2, DEFAULT_HUE_STEP)
        );
    }

    #[test]
    fn test_draw_tracks_by_reference() {
        let track = Track::new(7, Rect::new(0.0, 0.0, 1.0, 1.0)).confirmed();
        let viewer = draw(|overlay| overlay.draw_tracks(&[&track]));
        assert_eq!(viewer.strokes.len(), 1);
    }
}
