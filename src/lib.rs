pub mod app;
pub mod camera;
pub mod classify;
pub mod detector;
pub mod error;
pub mod render;

pub use app::{App, AppConfig, LoopState};
pub use camera::CameraSource;
pub use classify::{FaceSize, Position};
pub use detector::{Detection, FaceDetector};
pub use error::CameraError;
pub use render::draw_results;
