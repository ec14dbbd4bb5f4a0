//! Image viewer abstraction the interactive controller draws through.

use super::rect::PixelRect;

/// Window parameters handed to a viewer when the controller creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSpec {
    /// Display resolution `(width, height)`.
    pub window_shape: (u32, u32),
    /// Refresh interval in milliseconds.
    pub update_ms: u64,
    pub caption: String,
}

/// Trait for image viewer backends.
///
/// A viewer holds the image to present, the current stroke color and
/// thickness, and owns the event loop. Implement this trait to render the
/// overlay into any window system.
pub trait ImageViewer {
    /// Image buffer type the viewer presents.
    type Image;

    /// Set the buffer rendered on the next present.
    fn set_image(&mut self, image: Self::Image);

    /// Set the stroke color (RGB) used by subsequent primitives.
    fn set_color(&mut self, color: [u8; 3]);

    fn set_thickness(&mut self, thickness: i32);

    /// Stroke `rect` with the current color and thickness, optionally with
    /// a text label at its top-left corner.
    fn rectangle(&mut self, rect: PixelRect, label: Option<&str>);

    /// Run the event loop.
    ///
    /// `update` is called once per tick and returns whether iteration should
    /// continue. The loop also ends when the viewer itself requests a stop.
    fn run<F>(&mut self, update: F, display: bool)
    where
        F: FnMut(&mut Self) -> bool;
}
