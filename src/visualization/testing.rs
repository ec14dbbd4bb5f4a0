//! Recording viewer shared by the controller tests.

use super::rect::PixelRect;
use super::viewer::{ImageViewer, ViewerSpec};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Stroke {
    pub color: [u8; 3],
    pub thickness: i32,
    pub rect: PixelRect,
    pub label: Option<String>,
}

/// Viewer that records every primitive instead of rasterizing it.
#[derive(Debug)]
pub(crate) struct RecordingViewer {
    pub spec: ViewerSpec,
    pub image: Option<u32>,
    pub strokes: Vec<Stroke>,
    pub max_ticks: usize,
    pub ticks: usize,
    pub display: Option<bool>,
    color: [u8; 3],
    thickness: i32,
}

impl RecordingViewer {
    pub fn new(spec: ViewerSpec) -> Self {
        Self {
            spec,
            image: None,
            strokes: Vec::new(),
            max_ticks: usize::MAX,
            ticks: 0,
            display: None,
            color: [0, 0, 0],
            thickness: 1,
        }
    }

    /// Stop the loop after `max_ticks` ticks, like a user closing the window.
    pub fn stopping_after(spec: ViewerSpec, max_ticks: usize) -> Self {
        Self {
            max_ticks,
            ..Self::new(spec)
        }
    }
}

impl ImageViewer for RecordingViewer {
    type Image = u32;

    fn set_image(&mut self, image: u32) {
        self.image = Some(image);
    }

    fn set_color(&mut self, color: [u8; 3]) {
        self.color = color;
    }

    fn set_thickness(&mut self, thickness: i32) {
        self.thickness = thickness;
    }

    fn rectangle(&mut self, rect: PixelRect, label: Option<&str>) {
        self.strokes.push(Stroke {
            color: self.color,
            thickness: self.thickness,
            rect,
            label: label.map(str::to_string),
        });
    }

    fn run<F>(&mut self, mut update: F, display: bool)
    where
        F: FnMut(&mut Self) -> bool,
    {
        self.display = Some(display);
        while self.ticks < self.max_ticks {
            self.ticks += 1;
            if !update(self) {
                break;
            }
        }
    }
}

pub(crate) fn spec() -> ViewerSpec {
    ViewerSpec {
        window_shape: (2048, 1152),
        update_ms: 0,
        caption: "test".to_string(),
    }
}
