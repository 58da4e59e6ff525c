//! Logical-to-device coordinate mapping.
//!
//! Logical space is origin-centered with y pointing up; device space is the
//! top-left-origin, y-down pixel space of the rendered output. The mapping is
//! a y-axis flip plus a translation, applied only at the rendering boundary
//! so that stored coordinates never depend on canvas size or origin
//! placement.

use crate::geometry::types::Point;

/// Placement of the logical origin within the device canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixel offset of the logical origin from the canvas top-left corner
    pub origin_offset: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        // Origin at the center of a 1000x1000 viewport
        Self {
            origin_offset: 500.0,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin offset
    pub fn with_origin_offset(mut self, offset: f64) -> Self {
        self.origin_offset = offset;
        self
    }

    /// Map a logical point to device coordinates
    pub fn to_device(&self, point: Point) -> Point {
        Point {
            x: point.x + self.origin_offset,
            y: -point.y + self.origin_offset,
        }
    }

    /// Side length of the square device viewport
    pub fn extent(&self) -> f64 {
        self.origin_offset * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_canvas_center() {
        let viewport = Viewport::default();
        assert_eq!(
            viewport.to_device(Point::new(0.0, 0.0)),
            Point::new(500.0, 500.0)
        );
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let viewport = Viewport::default();
        assert_eq!(
            viewport.to_device(Point::new(100.0, 100.0)),
            Point::new(600.0, 400.0)
        );
    }

    #[test]
    fn test_negative_logical_coordinates() {
        let viewport = Viewport::default();
        assert_eq!(
            viewport.to_device(Point::new(-200.0, -50.0)),
            Point::new(300.0, 550.0)
        );
    }

    #[test]
    fn test_custom_origin_offset() {
        let viewport = Viewport::new().with_origin_offset(250.0);
        assert_eq!(
            viewport.to_device(Point::new(0.0, 0.0)),
            Point::new(250.0, 250.0)
        );
        assert_eq!(viewport.extent(), 500.0);
    }
}
