//! Degree-based polar helpers for the gear plane.
//!
//! Angle convention: degrees, counter-clockwise from the positive
//! x-axis, origin at the gear axis.

use crate::math::Point2;

/// Projects a polar coordinate to a Cartesian point.
///
/// `x = radius * cos(angle)`, `y = radius * sin(angle)`.
#[must_use]
pub fn polar_point(radius: f64, angle_deg: f64) -> Point2 {
    let rad = angle_deg.to_radians();
    Point2::new(radius * rad.cos(), radius * rad.sin())
}

/// Samples a circular arc at `radius` as evenly spaced points from
/// `start_deg` to `end_deg`, both endpoints included.
///
/// The sweep is signed: `end_deg < start_deg` samples clockwise.
/// Degenerate sample counts yield an empty (0) or single-point (1)
/// sequence.
#[must_use]
pub fn sample_arc(radius: f64, start_deg: f64, end_deg: f64, samples: u32) -> Vec<Point2> {
    if samples == 0 {
        return Vec::new();
    }
    if samples == 1 {
        return vec![polar_point(radius, start_deg)];
    }

    let sweep = end_deg - start_deg;
    let last = f64::from(samples - 1);
    (0..samples)
        .map(|i| polar_point(radius, start_deg + sweep * f64::from(i) / last))
        .collect()
}

/// Recovers the polar angle of a point in degrees, in `[-180, 180]`.
///
/// Unambiguous in every quadrant. The origin maps to 0.
#[must_use]
pub fn polar_angle_deg(point: &Point2) -> f64 {
    point.y.atan2(point.x).to_degrees()
}

/// Normalizes an angular sweep to the shortest equivalent arc, in
/// `(-180, 180]` degrees.
#[must_use]
pub fn normalize_sweep_deg(sweep_deg: f64) -> f64 {
    let wrapped = sweep_deg % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
