//! Live capture devices with scoped acquisition.

use std::ops::{Deref, DerefMut};

use tracing::trace;

use super::FrameSource;
use crate::error::CaptureError;

/// A live capture device such as a webcam.
pub trait CameraDevice: FrameSource {
    /// Request a capture resolution before reading.
    fn set_resolution(&mut self, width: u32, height: u32);

    /// Release the underlying device handle.
    fn release(&mut self);
}

/// Opens a fresh device handle on every call.
pub trait DeviceFactory<I> {
    fn open(&mut self) -> Result<Box<dyn CameraDevice<Frame = I>>, CaptureError>;
}

impl<I, F> DeviceFactory<I> for F
where
    F: FnMut() -> Result<Box<dyn CameraDevice<Frame = I>>, CaptureError>,
{
    fn open(&mut self) -> Result<Box<dyn CameraDevice<Frame = I>>, CaptureError> {
        self()
    }
}

/// Owns an open device and releases it when dropped.
pub struct DeviceGuard<I> {
    device: Box<dyn CameraDevice<Frame = I>>,
}

impl<I> DeviceGuard<I> {
    /// Open a device from `factory` for the lifetime of the guard.
    pub fn open<F>(factory: &mut F) -> Result<Self, CaptureError>
    where
        F: DeviceFactory<I> + ?Sized,
    {
        Ok(Self {
            device: factory.open()?,
        })
    }
}

impl<I> Deref for DeviceGuard<I> {
    type Target = dyn CameraDevice<Frame = I>;

    fn deref(&self) -> &Self::Target {
        self.device.as_ref()
    }
}

impl<I> DerefMut for DeviceGuard<I> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.device.as_mut()
    }
}

impl<I> Drop for DeviceGuard<I> {
    fn drop(&mut self) {
        trace!("releasing capture device");
        self.device.release();
    }
}
