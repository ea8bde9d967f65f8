use crate::camera::CameraSource;
use crate::detector::{Detection, FaceDetector};
use crate::render::draw_results;
use opencv::highgui;
use opencv::prelude::*;

pub const DEFAULT_CAMERA_INDEX: i32 = 2;
pub const WINDOW_NAME: &str = "Face Detection";
pub const QUIT_KEY: char = 'q';

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub camera_index: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            camera_index: DEFAULT_CAMERA_INDEX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// `wait_key` returns -1 when nothing was pressed.
pub fn is_quit_key(key: i32, quit_key: char) -> bool {
    key >= 0 && (key & 0xFF) == quit_key as i32
}

pub fn format_report(detection: &Detection) -> String {
    format!(
        "position: {}, size: {}",
        detection.position, detection.size
    )
}

pub struct App {
    camera: CameraSource,
    face_detector: FaceDetector,
    state: LoopState,
}

impl App {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let face_detector = FaceDetector::new()?;
        let camera = CameraSource::new(config.camera_index);
        Ok(Self {
            camera,
            face_detector,
            state: LoopState::Stopped,
        })
    }

    /// Run until the stream ends or the quit key is pressed.
    ///
    /// The camera is released on every way out of here, errors included.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.camera.start()?;
        self.state = LoopState::Running;

        let result = self.run_loop();

        self.state = LoopState::Stopped;
        self.camera.stop();
        result
    }

    fn run_loop(&mut self) -> anyhow::Result<()> {
        highgui::named_window_def(WINDOW_NAME)?;

        while self.state == LoopState::Running {
            let Some(mut frame) = self.camera.read_frame()? else {
                log::info!("Camera stream ended");
                self.state = LoopState::Stopped;
                break;
            };

            self.process_frame(&mut frame)?;
            highgui::imshow(WINDOW_NAME, &frame)?;

            let key = highgui::wait_key(1)?;
            if is_quit_key(key, QUIT_KEY) {
                log::info!("Quit key pressed");
                self.state = LoopState::Stopped;
            }
        }
        Ok(())
    }

    fn process_frame(&mut self, frame: &mut Mat) -> anyhow::Result<()> {
        let detections = self.face_detector.detect(frame)?;
        log::debug!("Detected {} faces", detections.len());
        for detection in &detections {
            println!("{}", format_report(detection));
        }
        draw_results(frame, &detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Rect;

    #[test]
    fn quit_key_matches_low_byte() {
        assert!(is_quit_key('q' as i32, 'q'));
        // some backends set modifier bits above the low byte
        assert!(is_quit_key(0x10_0000 | 'q' as i32, 'q'));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(!is_quit_key(-1, 'q'));
        assert!(!is_quit_key('Q' as i32, 'q'));
        assert!(!is_quit_key(' ' as i32, 'q'));
    }

    #[test]
    fn report_line() {
        let detection = Detection::from_rect(Rect::new(140, 10, 60, 60), 300);
        assert_eq!(format_report(&detection), "position: center, size: small");
    }

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.camera_index, 2);
        assert_eq!(WINDOW_NAME, "Face Detection");
        assert!(is_quit_key(QUIT_KEY as i32, 'q'));
    }
}
