use thiserror::Error;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Unable to open {device}")]
    DeviceUnavailable { device: String },
    #[error("Camera read before it was started")]
    NotStarted,
    #[error("OpenCV error {0:?}")]
    OpenCv(#[from] opencv::Error),
}
