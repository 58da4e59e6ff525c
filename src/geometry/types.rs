//! Core types for the transform engine

/// A 2D point in the logical (origin-centered, y-up) coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Round both coordinates to 2 decimal places.
    ///
    /// Display precision only. Internal computation keeps full precision;
    /// this is applied once at the presentation boundary so chained
    /// transforms never accumulate rounding error.
    pub fn round2(&self) -> Point {
        Point {
            x: (self.x * 100.0).round() / 100.0,
            y: (self.y * 100.0).round() / 100.0,
        }
    }
}

/// One of the four corners of the rectangle, before rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    LeftTop,
    RightTop,
    RightBottom,
    LeftBottom,
}

impl Corner {
    /// All corners in report order (matches the original numbered listing)
    pub const ALL: [Corner; 4] = [
        Corner::LeftTop,
        Corner::RightTop,
        Corner::RightBottom,
        Corner::LeftBottom,
    ];

    /// Human-readable label used in the corner report
    pub fn label(&self) -> &'static str {
        match self {
            Corner::LeftTop => "Left-Top",
            Corner::RightTop => "Right-Top",
            Corner::RightBottom => "Right-Bottom",
            Corner::LeftBottom => "Left-Bottom",
        }
    }
}

/// Position of the rectangle's anchor (lower-left corner before rotation).
///
/// The rectangle always measures [`RectangleState::SIZE`] square units and
/// extends in the +x, +y direction from the anchor. Only the anchor, the
/// pivot offset, and the rotation angle ever vary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectangleState {
    pub x: f64,
    pub y: f64,
}

impl RectangleState {
    /// Fixed logical side length of the rectangle
    pub const SIZE: f64 = 100.0;

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unrotated position of the given corner
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::LeftTop => Point::new(self.x, self.y + Self::SIZE),
            Corner::RightTop => Point::new(self.x + Self::SIZE, self.y + Self::SIZE),
            Corner::RightBottom => Point::new(self.x + Self::SIZE, self.y),
            Corner::LeftBottom => Point::new(self.x, self.y),
        }
    }
}

/// Displacement of the pivot relative to the rectangle anchor.
///
/// The absolute pivot is anchor + offset; the offset is never interpreted as
/// an absolute position, and it need not lie inside the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PivotOffset {
    pub x: f64,
    pub y: f64,
}

impl PivotOffset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The complete parameter set for one visualization.
///
/// The engine holds no state of its own; callers own the current values and
/// pass a `Figure` in full on every call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Figure {
    pub rect: RectangleState,
    pub pivot: PivotOffset,
    /// Rotation in degrees, clockwise as seen in device space
    pub angle_degrees: f64,
}

impl Figure {
    pub fn new(rect: RectangleState, pivot: PivotOffset, angle_degrees: f64) -> Self {
        Self {
            rect,
            pivot,
            angle_degrees,
        }
    }

    /// Absolute pivot point: rectangle anchor plus pivot offset
    pub fn pivot_point(&self) -> Point {
        Point::new(self.rect.x + self.pivot.x, self.rect.y + self.pivot.y)
    }
}
