//! Sequential frame sources.

/// Anything that yields frames one at a time.
pub trait FrameSource {
    type Frame;

    /// Read the next frame. `None` signals exhaustion or a failed read; the
    /// two are not distinguished.
    fn read(&mut self) -> Option<Self::Frame>;
}

/// A finite, frame-indexable offline source such as a decoded video file.
pub trait VideoSource: FrameSource {
    /// Index of the frame the next [`FrameSource::read`] returns.
    fn position(&self) -> u64;

    /// Declared frames per second.
    fn frame_rate(&self) -> f64;
}

/// In-memory video source over a list of frames.
///
/// A `None` entry is a failed read: playback stops there even when frames
/// follow it.
#[derive(Debug, Clone)]
pub struct VecSource<I> {
    frames: std::vec::IntoIter<Option<I>>,
    position: u64,
    frame_rate: f64,
}

impl<I> VecSource<I> {
    /// Create a source that delivers every frame in order.
    pub fn new(frames: Vec<I>, frame_rate: f64) -> Self {
        Self::with_failures(frames.into_iter().map(Some).collect(), frame_rate)
    }

    /// Create a source whose `None` entries report a failed read.
    pub fn with_failures(frames: Vec<Option<I>>, frame_rate: f64) -> Self {
        Self {
            frames: frames.into_iter(),
            position: 0,
            frame_rate,
        }
    }

    /// Frames not yet read.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl<I> FrameSource for VecSource<I> {
    type Frame = I;

    fn read(&mut self) -> Option<I> {
        let frame = self.frames.next()??;
        self.position += 1;
        Some(frame)
    }
}

impl<I> VideoSource for VecSource<I> {
    fn position(&self) -> u64 {
        self.position
    }

    fn frame_rate(&self) -> f64 {
        self.frame_rate
    }
}
