//! Scene composition: turning a figure into device-space primitives.
//!
//! The scene is the boundary contract with the renderer: two axis lines, an
//! origin marker, the filled rotated quadrilateral, and a pivot marker, all
//! in device coordinates and in paint order. The quadrilateral is built from
//! the same four corner points the report shows, so the drawn shape and the
//! reported coordinates are always mutually consistent.

use crate::geometry::{rotated_corners, Corner, Figure, Point, Viewport};
use crate::theme::Theme;

/// Radius of the origin and pivot markers, in device pixels
const MARKER_RADIUS: f64 = 5.0;

/// A rendering primitive in device coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
        stroke: String,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: String,
    },
    Polygon {
        points: Vec<Point>,
        fill: String,
    },
}

/// A fully composed scene, ready for the renderer
#[derive(Debug, Clone)]
pub struct Scene {
    /// Primitives in paint order
    pub primitives: Vec<Primitive>,
    /// The rotated corners in logical coordinates, unrounded
    pub corners: [(Corner, Point); 4],
}

/// Build the scene for a figure.
///
/// All four corners are computed together from the figure's current
/// parameters; the device mapping is applied here and nowhere earlier.
pub fn build_scene(figure: &Figure, viewport: &Viewport, theme: &Theme) -> Scene {
    let corners = rotated_corners(figure);
    let extent = viewport.extent();
    let center = viewport.to_device(Point::new(0.0, 0.0));

    let mut primitives = Vec::with_capacity(5);

    // Horizontal and vertical axes spanning the viewport
    primitives.push(Primitive::Line {
        from: Point::new(0.0, center.y),
        to: Point::new(extent, center.y),
        stroke: theme.resolve_or_default("axis"),
    });
    primitives.push(Primitive::Line {
        from: Point::new(center.x, 0.0),
        to: Point::new(center.x, extent),
        stroke: theme.resolve_or_default("axis"),
    });

    primitives.push(Primitive::Circle {
        center,
        radius: MARKER_RADIUS,
        fill: theme.resolve_or_default("origin"),
    });

    primitives.push(Primitive::Polygon {
        points: corners
            .iter()
            .map(|(_, point)| viewport.to_device(*point))
            .collect(),
        fill: theme.resolve_or_default("shape"),
    });

    primitives.push(Primitive::Circle {
        center: viewport.to_device(figure.pivot_point()),
        radius: MARKER_RADIUS,
        fill: theme.resolve_or_default("pivot"),
    });

    Scene {
        primitives,
        corners,
    }
}
