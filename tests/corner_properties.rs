//! End-to-end tests of the corner computation through the public API.
//!
//! These exercise the mathematical properties of the rotation: identity,
//! rigidity, periodicity, composition, and round-trip, plus the concrete
//! scenarios from the original application.

use pretty_assertions::assert_eq;

use pivotbox::{rotated_corners, CornerReport, Figure, PivotOffset, Point, RectangleState};

const EPSILON: f64 = 1e-6;

fn figure(rect_x: f64, rect_y: f64, pivot_x: f64, pivot_y: f64, angle: f64) -> Figure {
    Figure::new(
        RectangleState::new(rect_x, rect_y),
        PivotOffset::new(pivot_x, pivot_y),
        angle,
    )
}

fn assert_points_eq(a: Point, b: Point, context: &str) {
    assert!(
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON,
        "{}: ({}, {}) vs ({}, {})",
        context,
        a.x,
        a.y,
        b.x,
        b.y
    );
}

#[test]
fn identity_at_zero_angle_for_arbitrary_parameters() {
    for &(rx, ry, px, py) in &[
        (0.0, 0.0, 0.0, 0.0),
        (13.7, -42.0, 50.0, 50.0),
        (-300.0, 250.0, -80.0, 120.0),
    ] {
        let f = figure(rx, ry, px, py, 0.0);
        for (corner, rotated) in rotated_corners(&f) {
            assert_points_eq(rotated, f.rect.corner(corner), corner.label());
        }
    }
}

#[test]
fn rotation_is_rigid_for_arbitrary_angles() {
    for &angle in &[17.0, 90.0, 133.7, 270.0, -45.0, 725.0] {
        let f = figure(-25.0, 60.0, 110.0, -40.0, angle);
        let pivot = f.pivot_point();
        for (corner, rotated) in rotated_corners(&f) {
            let before = pivot.distance_to(f.rect.corner(corner));
            let after = pivot.distance_to(rotated);
            assert!(
                (before - after).abs() < EPSILON,
                "angle {} {}: {} vs {}",
                angle,
                corner.label(),
                before,
                after
            );
        }
    }
}

#[test]
fn full_turn_is_a_no_op() {
    let base = figure(5.0, 5.0, 20.0, 30.0, 62.0);
    let wrapped = figure(5.0, 5.0, 20.0, 30.0, 62.0 + 360.0);
    for ((_, a), (_, b)) in rotated_corners(&base).iter().zip(rotated_corners(&wrapped)) {
        assert_points_eq(*a, b, "periodicity");
    }
}

#[test]
fn opposite_angles_cancel() {
    // Rotating the already-rotated corners back by the negated angle about
    // the same absolute pivot restores the original corners.
    let f = figure(10.0, -10.0, 35.0, 65.0, 77.7);
    let pivot = f.pivot_point();
    let back = pivotbox::PivotRotation::new(-77.7, pivot);
    for (corner, rotated) in rotated_corners(&f) {
        let restored = back.transform_point(rotated);
        assert_points_eq(restored, f.rect.corner(corner), corner.label());
    }
}

#[test]
fn chained_rotations_compose_additively() {
    let pivot_offset = (40.0, 10.0);
    let first = figure(0.0, 0.0, pivot_offset.0, pivot_offset.1, 30.0);
    let combined = figure(0.0, 0.0, pivot_offset.0, pivot_offset.1, 30.0 + 45.0);

    let second = pivotbox::PivotRotation::new(45.0, first.pivot_point());
    for ((_, once), (_, total)) in rotated_corners(&first).iter().zip(rotated_corners(&combined)) {
        let chained = second.transform_point(*once);
        assert_points_eq(chained, total, "composition");
    }
}

#[test]
fn quarter_turn_about_anchor() {
    let report = CornerReport::for_figure(&figure(0.0, 0.0, 0.0, 0.0, 90.0));
    assert_eq!(report.get(pivotbox::Corner::LeftTop), Point::new(100.0, 0.0));
    assert_eq!(
        report.get(pivotbox::Corner::RightBottom),
        Point::new(0.0, -100.0)
    );
}

#[test]
fn half_turn_about_center_reflects_through_pivot() {
    let report = CornerReport::for_figure(&figure(0.0, 0.0, 50.0, 50.0, 180.0));
    assert_eq!(report.get(pivotbox::Corner::LeftTop), Point::new(100.0, 0.0));
    assert_eq!(report.get(pivotbox::Corner::RightTop), Point::new(0.0, 0.0));
    assert_eq!(
        report.get(pivotbox::Corner::LeftBottom),
        Point::new(100.0, 100.0)
    );
}

#[test]
fn translated_rectangle_carries_its_pivot_along() {
    // The pivot offset is relative to the anchor: moving the rectangle moves
    // the pivot with it, so the rotated shape translates rigidly too.
    let at_origin = CornerReport::for_figure(&figure(0.0, 0.0, 50.0, 50.0, 90.0));
    let translated = CornerReport::for_figure(&figure(200.0, -100.0, 50.0, 50.0, 90.0));

    for corner in pivotbox::Corner::ALL {
        let a = at_origin.get(corner);
        let b = translated.get(corner);
        assert_eq!((b.x - a.x, b.y - a.y), (200.0, -100.0), "{}", corner.label());
    }
}

#[test]
fn report_display_matches_original_panel() {
    let text = CornerReport::for_figure(&figure(0.0, 0.0, 0.0, 0.0, 90.0)).to_string();
    assert_eq!(
        text,
        "1. Left-Top     100.00, 0.00\n\
         2. Right-Top    100.00, -100.00\n\
         3. Right-Bottom 0.00, -100.00\n\
         4. Left-Bottom  0.00, 0.00\n"
    );
}
