//! The labeled corner-coordinate report shown alongside the drawing.
//!
//! Coordinates are rounded to 2 decimal places here, exactly once; the
//! geometry layer never rounds so that chained transforms keep full
//! precision.

use std::fmt;

use crate::geometry::{rotated_corners, Corner, Figure, Point};

/// The four rotated corner points, labeled and rounded for display
#[derive(Debug, Clone, PartialEq)]
pub struct CornerReport {
    corners: [(Corner, Point); 4],
}

impl CornerReport {
    /// Compute the report for a figure.
    ///
    /// All four corners come from a single computation over the figure's
    /// current parameters, so no entry can be stale relative to the others.
    pub fn for_figure(figure: &Figure) -> Self {
        Self {
            corners: rotated_corners(figure).map(|(corner, point)| (corner, point.round2())),
        }
    }

    /// The rounded position of a corner
    pub fn get(&self, corner: Corner) -> Point {
        // Entries are stored in Corner::ALL order.
        let index = match corner {
            Corner::LeftTop => 0,
            Corner::RightTop => 1,
            Corner::RightBottom => 2,
            Corner::LeftBottom => 3,
        };
        self.corners[index].1
    }

    /// Iterate corners in report order
    pub fn iter(&self) -> impl Iterator<Item = &(Corner, Point)> {
        self.corners.iter()
    }
}

impl fmt::Display for CornerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (corner, point)) in self.corners.iter().enumerate() {
            writeln!(
                f,
                "{}. {:<12} {:.2}, {:.2}",
                index + 1,
                corner.label(),
                point.x,
                point.y
            )?;
        }
        Ok(())
    }
}
