//! Pure coordinate transformation engine.
//!
//! Everything here is a deterministic function of its explicit inputs: the
//! caller owns the current rectangle position, pivot offset, and angle, and
//! passes them in full on every call. There is no retained state and no
//! error taxonomy; the engine is total over the reals.

pub mod transform;
pub mod types;
pub mod viewport;

pub use transform::{rotated_corners, PivotRotation};
pub use types::{Corner, Figure, PivotOffset, Point, RectangleState};
pub use viewport::Viewport;
