use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{ConfigurationError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve2, CurveDomain};

/// Unwind direction of an involute flank.
///
/// `Forward` unwinds counter-clockwise, sweeping the flank toward
/// increasing polar angle; `Reverse` unwinds clockwise. A tooth pairs
/// one of each, rooted at the two boundaries of its half-slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Forward,
    Reverse,
}

impl Winding {
    /// Sign of the angular advance: `+1` for `Forward`, `-1` for `Reverse`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

/// The involute of a circle, the curve traced by the end of a taut
/// string unwound from the base circle.
///
/// The parameter is the unwind angle `phi` in radians. With
/// `theta = start_angle + sign * phi`, the contact point on the base
/// circle is `B = base_radius * (cos theta, sin theta)`, the unwound
/// string has length `base_radius * phi` and points along the circle
/// tangent at `theta - sign * 90` degrees, and the curve point is their
/// sum. Its distance from the center is
/// `base_radius * sqrt(1 + phi^2)`, strictly increasing in `phi`.
#[derive(Debug, Clone)]
pub struct Involute {
    base_radius: f64,
    start_angle_deg: f64,
    winding: Winding,
}

impl Involute {
    /// Creates a new involute rooted on the base circle at
    /// `start_angle_deg`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_radius` is not positive.
    pub fn new(base_radius: f64, start_angle_deg: f64, winding: Winding) -> Result<Self> {
        if base_radius < TOLERANCE {
            return Err(ConfigurationError::NonPositiveBaseRadius(base_radius).into());
        }
        Ok(Self {
            base_radius,
            start_angle_deg,
            winding,
        })
    }

    /// Returns the base circle radius.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Returns the root angle on the base circle in degrees.
    #[must_use]
    pub fn start_angle_deg(&self) -> f64 {
        self.start_angle_deg
    }

    /// Returns the unwind direction.
    #[must_use]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Returns the unwind angle in radians at which the curve crosses
    /// the circle of `outer_radius`.
    ///
    /// Solves `base_radius * sqrt(1 + phi^2) = outer_radius`.
    ///
    /// # Errors
    ///
    /// Returns an error if `outer_radius` does not exceed the base
    /// radius.
    pub fn unwind_limit(&self, outer_radius: f64) -> Result<f64> {
        if outer_radius - self.base_radius < TOLERANCE {
            return Err(ConfigurationError::OuterNotBeyondBase {
                base_radius: self.base_radius,
                outer_radius,
            }
            .into());
        }
        let ratio = outer_radius / self.base_radius;
        Ok((ratio * ratio - 1.0).sqrt())
    }
}

impl Curve2 for Involute {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let sign = self.winding.sign();
        let theta = self.start_angle_deg.to_radians() + sign * t;
        let unwound = self.base_radius * t;
        let base = Point2::new(
            self.base_radius * theta.cos(),
            self.base_radius * theta.sin(),
        );
        let tangent_angle = theta - sign * FRAC_PI_2;
        Ok(base + Vector2::new(unwound * tangent_angle.cos(), unwound * tangent_angle.sin()))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        // dP/dphi = base_radius * phi * (cos theta, sin theta); the unit
        // tangent is radial to the contact point and extends continuously
        // into the cusp at phi = 0.
        let theta = self.start_angle_deg.to_radians() + self.winding.sign() * t;
        Ok(Vector2::new(theta.cos(), theta.sin()))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::angle::{polar_angle_deg, polar_point};
    use approx::assert_relative_eq;

    fn reflect_across_ray(p: &Point2, angle_deg: f64) -> Point2 {
        let a = 2.0 * angle_deg.to_radians();
        Point2::new(a.cos() * p.x + a.sin() * p.y, a.sin() * p.x - a.cos() * p.y)
    }

    #[test]
    fn starts_on_base_circle() {
        let curve = Involute::new(10.0, 30.0, Winding::Forward).unwrap();
        let p = curve.evaluate(0.0).unwrap();
        assert_relative_eq!(p, polar_point(10.0, 30.0), epsilon = 1e-9);
    }

    #[test]
    fn radius_grows_with_unwind_angle() {
        let curve = Involute::new(10.0, 45.0, Winding::Forward).unwrap();
        let mut previous = 0.0;
        for phi in [0.0, 0.1, 0.3, 0.5, 0.75, 1.0] {
            let radius = curve.evaluate(phi).unwrap().coords.norm();
            let expected = 10.0 * phi.mul_add(phi, 1.0).sqrt();
            assert!(
                (radius - expected).abs() < 1e-9,
                "phi={phi} radius={radius}"
            );
            assert!(radius >= previous, "phi={phi}");
            previous = radius;
        }
    }

    #[test]
    fn forward_sweeps_counter_clockwise_and_reverse_clockwise() {
        let forward = Involute::new(10.0, 60.0, Winding::Forward).unwrap();
        let reverse = Involute::new(10.0, 60.0, Winding::Reverse).unwrap();
        let pf = forward.evaluate(0.5).unwrap();
        let pr = reverse.evaluate(0.5).unwrap();
        assert!(polar_angle_deg(&pf) > 60.0, "forward at {}", polar_angle_deg(&pf));
        assert!(polar_angle_deg(&pr) < 60.0, "reverse at {}", polar_angle_deg(&pr));
    }

    #[test]
    fn windings_mirror_through_the_start_ray() {
        let start = 25.0;
        let forward = Involute::new(10.0, start, Winding::Forward).unwrap();
        let reverse = Involute::new(10.0, start, Winding::Reverse).unwrap();
        for phi in [0.0, 0.2, 0.5, 0.74] {
            let pf = forward.evaluate(phi).unwrap();
            let pr = reverse.evaluate(phi).unwrap();
            assert_relative_eq!(pf, reflect_across_ray(&pr, start), epsilon = 1e-9);
        }
    }

    #[test]
    fn tangent_is_radial_to_the_contact_point() {
        let curve = Involute::new(10.0, 0.0, Winding::Forward).unwrap();
        let phi = 0.5;
        let t = curve.tangent(phi).unwrap();
        assert!((t.norm() - 1.0).abs() < 1e-12);
        assert_relative_eq!(
            t,
            Vector2::new(phi.cos(), phi.sin()),
            epsilon = 1e-9
        );
    }

    #[test]
    fn tangent_at_the_cusp_points_along_the_start_ray() {
        let curve = Involute::new(10.0, 90.0, Winding::Forward).unwrap();
        let t = curve.tangent(0.0).unwrap();
        assert_relative_eq!(t, Vector2::new(0.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn unwind_limit_for_default_radii() {
        // (12.5/10)^2 - 1 = 0.5625, whose square root is exact.
        let curve = Involute::new(10.0, 0.0, Winding::Forward).unwrap();
        let limit = curve.unwind_limit(12.5).unwrap();
        assert!((limit - 0.75).abs() < 1e-12, "limit={limit}");
    }

    #[test]
    fn unwind_limit_rejects_unreachable_outer_circle() {
        let curve = Involute::new(10.0, 0.0, Winding::Forward).unwrap();
        assert!(curve.unwind_limit(10.0).is_err());
        assert!(curve.unwind_limit(9.0).is_err());
    }

    #[test]
    fn domain_is_one_unwind_turn() {
        let curve = Involute::new(1.0, 0.0, Winding::Reverse).unwrap();
        let d = curve.domain();
        assert!(d.t_min.abs() < TOLERANCE);
        assert!((d.t_max - TAU).abs() < TOLERANCE);
        assert!(!curve.is_closed());
    }

    #[test]
    fn invalid_base_radius() {
        assert!(Involute::new(0.0, 0.0, Winding::Forward).is_err());
        assert!(Involute::new(-2.0, 0.0, Winding::Forward).is_err());
    }
}
