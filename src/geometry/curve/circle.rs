use crate::error::{ConfigurationError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{Curve2, CurveDomain};

/// A full circle in the gear plane.
///
/// The parameter is the polar angle in radians measured from the
/// positive x-axis; the domain is `[0, 2*pi]` and the curve is always
/// closed.
///
/// `P(t) = center + radius * (cos(t), sin(t))`
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(ConfigurationError::NonPositiveBaseRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve2 for Circle {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        Ok(self.center + Vector2::new(self.radius * t.cos(), self.radius * t.sin()))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        // Derivative has constant length `radius`, positive by construction.
        Ok(Vector2::new(-t.sin(), t.cos()))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
