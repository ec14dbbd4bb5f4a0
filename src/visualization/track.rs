//! Read-only views of tracker output.

use super::rect::Rect;

/// Track state enumeration for the track lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Newly created track, not yet confirmed
    #[default]
    Tentative,
    /// Track with enough evidence to be considered reliable
    Confirmed,
    /// Removed from tracking
    Deleted,
}

/// What the overlay needs to know about a track.
pub trait TrackView {
    fn track_id(&self) -> u64;

    fn is_confirmed(&self) -> bool;

    /// Consecutive frames without an associated detection. Zero means the
    /// track was updated in the current frame.
    fn time_since_update(&self) -> u32;

    fn to_tlwh(&self) -> Rect;
}

/// What the overlay needs to know about a detection.
pub trait DetectionView {
    fn tlwh(&self) -> Rect;
}

impl<T: TrackView + ?Sized> TrackView for &T {
    fn track_id(&self) -> u64 {
        (**self).track_id()
    }

    fn is_confirmed(&self) -> bool {
        (**self).is_confirmed()
    }

    fn time_since_update(&self) -> u32 {
        (**self).time_since_update()
    }

    fn to_tlwh(&self) -> Rect {
        (**self).to_tlwh()
    }
}

impl<D: DetectionView + ?Sized> DetectionView for &D {
    fn tlwh(&self) -> Rect {
        (**self).tlwh()
    }
}

/// Snapshot of a single track as reported by a tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Track identifier
    pub track_id: u64,
    /// Current track state
    pub state: TrackState,
    /// Frames since the last associated detection
    pub time_since_update: u32,
    /// Current bounding box (TLWH)
    pub tlwh: Rect,
}

impl Track {
    /// Create a tentative track that was updated this frame.
    pub fn new(track_id: u64, tlwh: Rect) -> Self {
        Self {
            track_id,
            state: TrackState::Tentative,
            time_since_update: 0,
            tlwh,
        }
    }

    pub fn confirmed(mut self) -> Self {
        self.state = TrackState::Confirmed;
        self
    }

    pub fn with_time_since_update(mut self, time_since_update: u32) -> Self {
        self.time_since_update = time_since_update;
        self
    }
}

impl TrackView for Track {
    fn track_id(&self) -> u64 {
        self.track_id
    }

    fn is_confirmed(&self) -> bool {
        self.state == TrackState::Confirmed
    }

    fn time_since_update(&self) -> u32 {
        self.time_since_update
    }

    fn to_tlwh(&self) -> Rect {
        self.tlwh
    }
}

/// Detector output for a single object.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Bounding box (TLWH)
    pub tlwh: Rect,
    /// Detector confidence score
    pub confidence: f32,
}

impl Detection {
    /// Create a detection from a TLBR box.
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32) -> Self {
        Self {
            tlwh: Rect::from_tlbr(x1, y1, x2, y2),
            confidence,
        }
    }

    pub fn from_rect(tlwh: Rect, confidence: f32) -> Self {
        Self { tlwh, confidence }
    }
}

impl DetectionView for Detection {
    fn tlwh(&self) -> Rect {
        self.tlwh
    }
}
