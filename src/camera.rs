use crate::error::CameraError;
use opencv::prelude::*;
use opencv::{highgui, videoio};
use std::fmt;

enum CaptureTarget {
    Device(i32),
    #[cfg(test)]
    File(String),
}

impl CaptureTarget {
    fn open(&self) -> Result<videoio::VideoCapture, CameraError> {
        let cam = match self {
            CaptureTarget::Device(index) => videoio::VideoCapture::new(*index, videoio::CAP_ANY)?,
            #[cfg(test)]
            CaptureTarget::File(path) => videoio::VideoCapture::from_file(path, videoio::CAP_ANY)?,
        };
        if !cam.is_opened()? {
            return Err(CameraError::DeviceUnavailable {
                device: self.to_string(),
            });
        }
        Ok(cam)
    }
}

impl fmt::Display for CaptureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureTarget::Device(index) => write!(f, "camera {}", index),
            #[cfg(test)]
            CaptureTarget::File(path) => write!(f, "file {}", path),
        }
    }
}

enum CameraState {
    Closed,
    Open(videoio::VideoCapture),
}

/// Sole owner of a capture device.
///
/// The device is released by [`CameraSource::stop`] or, failing that, on drop.
pub struct CameraSource {
    target: CaptureTarget,
    state: CameraState,
}

impl CameraSource {
    pub fn new(index: i32) -> Self {
        Self {
            target: CaptureTarget::Device(index),
            state: CameraState::Closed,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_file(path: &str) -> Self {
        Self {
            target: CaptureTarget::File(path.to_owned()),
            state: CameraState::Closed,
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.state, CameraState::Open(_))
    }

    /// Open the device. A handle left open by a previous start is released first.
    pub fn start(&mut self) -> Result<(), CameraError> {
        if let CameraState::Open(mut cam) = std::mem::replace(&mut self.state, CameraState::Closed)
        {
            log::warn!("{} already open, reopening", self.target);
            cam.release()?;
        }

        let cam = self.target.open()?;
        log::info!("Opened {}", self.target);
        self.state = CameraState::Open(cam);
        Ok(())
    }

    /// Next frame, or `None` once the stream ended or the read failed.
    pub fn read_frame(&mut self) -> Result<Option<Mat>, CameraError> {
        let CameraState::Open(cam) = &mut self.state else {
            return Err(CameraError::NotStarted);
        };
        let mut frame = Mat::default();
        if !cam.read(&mut frame)? || frame.size()?.width == 0 {
            return Ok(None);
        }
        Ok(Some(frame))
    }

    /// Release the device and close any display windows. Does nothing if not started.
    pub fn stop(&mut self) {
        let CameraState::Open(mut cam) = std::mem::replace(&mut self.state, CameraState::Closed)
        else {
            return;
        };
        if let Err(err) = cam.release() {
            log::warn!("Failed to release {}: {}", self.target, err);
        }
        if let Err(err) = highgui::destroy_all_windows() {
            log::warn!("Failed to close windows: {}", err);
        }
        log::info!("Released {}", self.target);
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        self.stop();
    }
}
