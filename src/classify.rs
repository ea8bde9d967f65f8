use std::fmt;

/// Faces with a smaller area (in pixels) are reported as small.
pub const SMALL_AREA_LIMIT: i64 = 20_000;
/// Faces with at least this area are reported as large.
pub const LARGE_AREA_LIMIT: i64 = 100_000;

/// Horizontal third of the frame the face center falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Left,
    Center,
    Right,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Position::Left => "left",
            Position::Center => "center",
            Position::Right => "right",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceSize {
    Small,
    Medium,
    Large,
}

impl fmt::Display for FaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FaceSize::Small => "small",
            FaceSize::Medium => "medium",
            FaceSize::Large => "large",
        };
        f.write_str(label)
    }
}

/// Both third boundaries belong to the center.
pub fn classify_position(center_x: i32, frame_width: i32) -> Position {
    let (center_x, frame_width) = (i64::from(center_x), i64::from(frame_width));
    if center_x < frame_width / 3 {
        Position::Left
    } else if center_x > 2 * frame_width / 3 {
        Position::Right
    } else {
        Position::Center
    }
}

pub fn classify_size(area: i64) -> FaceSize {
    if area < SMALL_AREA_LIMIT {
        FaceSize::Small
    } else if area < LARGE_AREA_LIMIT {
        FaceSize::Medium
    } else {
        FaceSize::Large
    }
}
