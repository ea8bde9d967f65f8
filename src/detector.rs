use crate::classify::{classify_position, classify_size, FaceSize, Position};
use opencv::core::{Rect, Vector};
use opencv::prelude::*;
use opencv::{core, imgproc, objdetect};

const CASCADE_MODEL: &str = "haarcascades/haarcascade_frontalface_default.xml";

const SCALE_FACTOR: f64 = 1.1;
const MIN_NEIGHBORS: i32 = 5;
const MIN_FACE_SIZE: i32 = 30;

/// A face found in a single frame, labeled by where it sits and how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub coords: Rect,
    pub position: Position,
    pub size: FaceSize,
}

impl Detection {
    pub fn from_rect(coords: Rect, frame_width: i32) -> Self {
        let center_x = coords.x.saturating_add(coords.width / 2);
        let area = i64::from(coords.width) * i64::from(coords.height);
        Self {
            coords,
            position: classify_position(center_x, frame_width),
            size: classify_size(area),
        }
    }
}

pub struct FaceDetector {
    classifier: objdetect::CascadeClassifier,
}

impl FaceDetector {
    pub fn new() -> anyhow::Result<Self> {
        let xml = core::find_file_def(CASCADE_MODEL)?;
        let classifier = objdetect::CascadeClassifier::new(&xml)?;
        log::debug!("Loaded cascade model from {}", xml);
        Ok(Self { classifier })
    }

    /// Detect faces in a BGR frame.
    ///
    /// Results keep the classifier's output order, which is not stable between frames.
    pub fn detect(&mut self, frame: &Mat) -> anyhow::Result<Vec<Detection>> {
        let frame_grayscale = convert_to_grayscale(frame)?;
        let mut faces = Vector::<Rect>::new();

        self.classifier.detect_multi_scale(
            &frame_grayscale,
            &mut faces,
            SCALE_FACTOR,
            MIN_NEIGHBORS,
            objdetect::CASCADE_SCALE_IMAGE,
            core::Size {
                width: MIN_FACE_SIZE,
                height: MIN_FACE_SIZE,
            },
            core::Size {
                width: 0,
                height: 0,
            },
        )?;

        let frame_width = frame.cols();
        Ok(faces
            .iter()
            .map(|face| Detection::from_rect(face, frame_width))
            .collect())
    }
}

pub fn convert_to_grayscale(image: &Mat) -> anyhow::Result<Mat> {
    let mut gray: Mat = Mat::default();
    imgproc::cvt_color_def(&image, &mut gray, imgproc::COLOR_BGR2GRAY)?;
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{Scalar, CV_8UC1, CV_8UC3};

    #[test]
    fn small_face_on_the_left() {
        let detection = Detection::from_rect(Rect::new(10, 10, 50, 50), 300);
        assert_eq!(detection.position, Position::Left);
        assert_eq!(detection.size, FaceSize::Small);
        assert_eq!(detection.coords, Rect::new(10, 10, 50, 50));
    }

    #[test]
    fn small_face_in_the_center() {
        let detection = Detection::from_rect(Rect::new(140, 10, 60, 60), 300);
        assert_eq!(detection.position, Position::Center);
        assert_eq!(detection.size, FaceSize::Small);
    }

    #[test]
    fn large_face_on_the_right() {
        let detection = Detection::from_rect(Rect::new(250, 10, 320, 320), 300);
        assert_eq!(detection.position, Position::Right);
        assert_eq!(detection.size, FaceSize::Large);
    }

    #[test]
    fn center_uses_integer_division() {
        // 99 + 3 / 2 = 100, exactly on the left boundary
        let detection = Detection::from_rect(Rect::new(99, 0, 3, 3), 300);
        assert_eq!(detection.position, Position::Center);
    }

    #[test]
    fn area_boundaries() {
        let medium = Detection::from_rect(Rect::new(0, 0, 200, 100), 640);
        assert_eq!(medium.size, FaceSize::Medium);
        let large = Detection::from_rect(Rect::new(0, 0, 250, 400), 640);
        assert_eq!(large.size, FaceSize::Large);
    }

    #[test]
    fn grayscale_has_single_channel() {
        let frame =
            Mat::new_rows_cols_with_default(48, 64, CV_8UC3, Scalar::all(128.0)).unwrap();
        let gray = convert_to_grayscale(&frame).unwrap();
        assert_eq!(gray.typ(), CV_8UC1);
        assert_eq!(gray.rows(), 48);
        assert_eq!(gray.cols(), 64);
    }

    #[test]
    #[ignore = "needs the OpenCV haarcascade data files installed"]
    fn blank_frame_has_no_faces() {
        let mut detector = FaceDetector::new().unwrap();
        let frame =
            Mat::new_rows_cols_with_default(240, 320, CV_8UC3, Scalar::all(0.0)).unwrap();
        let detections = detector.detect(&frame).unwrap();
        assert!(detections.is_empty());
    }
}
