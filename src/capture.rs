//! Frame sources: finite offline sequences and single-shot live devices.

mod device;
mod source;

pub use device::{CameraDevice, DeviceFactory, DeviceGuard};
pub use source::{FrameSource, VecSource, VideoSource};
