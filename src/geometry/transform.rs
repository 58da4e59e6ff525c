//! Rotation of the rectangle's corners about an arbitrary pivot.
//!
//! ## Angle sign convention
//!
//! Angles are given in degrees and mean *clockwise as seen on screen*. The
//! screen (device space) has its y-axis pointing down, while the logical
//! plane is y-up, so the engine negates the angle before applying the
//! standard counter-clockwise rotation formula in logical space:
//!
//! ```text
//! θ  = −angle_degrees · π / 180
//! x' = (x − px)·cos θ − (y − py)·sin θ + px
//! y' = (x − px)·sin θ + (y − py)·cos θ + py
//! ```
//!
//! The combination yields a net clockwise visual rotation once the result is
//! mapped to y-down device coordinates. Dropping the negation is the classic
//! sign bug here; the periodicity and round-trip tests below pin it down.

use crate::geometry::types::{Corner, Figure, Point};

/// A rigid 2D rotation about an absolute pivot point.
///
/// Stateless and total over the reals: every finite input produces a
/// well-defined output, including pivots outside the rectangle and angles
/// outside [0, 360).
#[derive(Debug, Clone, Copy)]
pub struct PivotRotation {
    /// Rotation angle in degrees, clockwise in device space
    pub angle_degrees: f64,
    /// Absolute pivot point in logical coordinates
    pub pivot: Point,
}

impl PivotRotation {
    pub fn new(angle_degrees: f64, pivot: Point) -> Self {
        Self {
            angle_degrees,
            pivot,
        }
    }

    /// Build the rotation for a figure, resolving the pivot offset against
    /// the rectangle anchor.
    pub fn for_figure(figure: &Figure) -> Self {
        Self::new(figure.angle_degrees, figure.pivot_point())
    }

    /// Check if this is effectively a no-op (0° rotation)
    pub fn is_identity(&self) -> bool {
        self.angle_degrees.abs() < f64::EPSILON
    }

    /// Rotate a point about the pivot.
    ///
    /// Rigid: the distance from the pivot to the point is preserved up to
    /// floating-point rounding. No rounding is applied here; callers that
    /// display coordinates round once at the presentation boundary.
    pub fn transform_point(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }

        // Sign flip: clockwise-on-screen intent, counter-clockwise formula
        // in the y-up logical plane.
        let theta = -self.angle_degrees.to_radians();
        let cos_t = theta.cos();
        let sin_t = theta.sin();

        let dx = point.x - self.pivot.x;
        let dy = point.y - self.pivot.y;

        Point {
            x: dx * cos_t - dy * sin_t + self.pivot.x,
            y: dx * sin_t + dy * cos_t + self.pivot.y,
        }
    }
}

/// Compute all four rotated corners of a figure in one call.
///
/// Returned in [`Corner::ALL`] order, unrounded. Computing the full set
/// together guarantees the corners can never be individually stale relative
/// to one another when any of the figure's parameters change.
pub fn rotated_corners(figure: &Figure) -> [(Corner, Point); 4] {
    let rotation = PivotRotation::for_figure(figure);
    Corner::ALL.map(|corner| (corner, rotation.transform_point(figure.rect.corner(corner))))
}
