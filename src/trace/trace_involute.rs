use crate::error::Result;
use crate::geometry::curve::{Curve2, Involute};

use super::{InvoluteTrace, TraceParams};

/// Traces an involute flank from the base circle out to the outside
/// circle.
pub struct TraceInvolute {
    involute: Involute,
    outer_radius: f64,
    params: TraceParams,
}

impl TraceInvolute {
    /// Creates a new `TraceInvolute` operation.
    #[must_use]
    pub fn new(involute: Involute, outer_radius: f64, params: TraceParams) -> Self {
        Self {
            involute,
            outer_radius,
            params,
        }
    }

    /// Executes the trace, returning the accepted points.
    ///
    /// The curve is sampled at multiples of the angular increment. A
    /// sample whose distance from the center exceeds `outer_radius` is
    /// past the flank tip and is discarded together with everything
    /// beyond it; since that distance grows monotonically with the
    /// unwind angle, the walk stops at the closed-form crossing rather
    /// than polling each radius, and never runs past the end of the
    /// curve domain.
    ///
    /// # Errors
    ///
    /// Returns an error if `outer_radius` does not exceed the base
    /// circle radius.
    pub fn execute(&self) -> Result<InvoluteTrace> {
        let limit = self
            .involute
            .unwind_limit(self.outer_radius)?
            .min(self.involute.domain().t_max);
        let increment = self.params.increment_deg().to_radians();

        let mut points = Vec::new();
        let mut index = 0.0_f64;
        while increment * index <= limit {
            points.push(self.involute.evaluate(increment * index)?);
            index += 1.0;
        }

        Ok(InvoluteTrace { points })
    }
}
