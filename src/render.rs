use crate::detector::Detection;
use opencv::core::{Point, Scalar};
use opencv::prelude::*;
use opencv::imgproc;

const LABEL_OFFSET: i32 = 10;
const LINE_THICKNESS: i32 = 2;
const FONT_SCALE: f64 = 0.5;

fn annotation_color() -> Scalar {
    // BGR blue
    (255, 0, 0).into()
}

/// Draw a box and a `"{position}, {size}"` label for every detection, in place.
pub fn draw_results(frame: &mut Mat, detections: &[Detection]) -> anyhow::Result<()> {
    for detection in detections {
        imgproc::rectangle(
            frame,
            detection.coords,
            annotation_color(),
            LINE_THICKNESS,
            imgproc::LINE_8,
            0,
        )?;

        let label = format!("{}, {}", detection.position, detection.size);
        let origin = Point::new(detection.coords.x, detection.coords.y - LABEL_OFFSET);
        imgproc::put_text(
            frame,
            &label,
            origin,
            imgproc::FONT_HERSHEY_SIMPLEX,
            FONT_SCALE,
            annotation_color(),
            LINE_THICKNESS,
            imgproc::LINE_8,
            false,
        )?;
    }
    Ok(())
}
