mod trace_involute;

pub use trace_involute::TraceInvolute;

use crate::error::{ConfigurationError, Result};
use crate::math::{Point2, TOLERANCE};

/// Parameters controlling flank tracing and arc sampling.
#[derive(Debug, Clone, Copy)]
pub struct TraceParams {
    increment_deg: f64,
    chord_samples: u32,
    circle_samples: u32,
}

impl TraceParams {
    /// Creates validated trace parameters.
    ///
    /// `increment_deg` is the fixed angular step of the involute walk,
    /// `chord_samples` the point count of each top-land arc, and
    /// `circle_samples` the point count of the root-circle reference
    /// curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `increment_deg` is not positive, if
    /// `chord_samples` is below 2, or if `circle_samples` is below 3.
    pub fn new(increment_deg: f64, chord_samples: u32, circle_samples: u32) -> Result<Self> {
        if increment_deg < TOLERANCE {
            return Err(ConfigurationError::NonPositiveIncrement(increment_deg).into());
        }
        if chord_samples < 2 {
            return Err(ConfigurationError::TooFewChordSamples(chord_samples).into());
        }
        if circle_samples < 3 {
            return Err(ConfigurationError::TooFewCircleSamples(circle_samples).into());
        }
        Ok(Self {
            increment_deg,
            chord_samples,
            circle_samples,
        })
    }

    /// Returns the angular step of the involute walk in degrees.
    #[must_use]
    pub fn increment_deg(&self) -> f64 {
        self.increment_deg
    }

    /// Returns the point count of a top-land arc.
    #[must_use]
    pub fn chord_samples(&self) -> u32 {
        self.chord_samples
    }

    /// Returns the point count of the root-circle reference curve.
    #[must_use]
    pub fn circle_samples(&self) -> u32 {
        self.circle_samples
    }
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            increment_deg: 5.0,
            chord_samples: 20,
            circle_samples: 360,
        }
    }
}

/// Role of an emitted stroke within the gear outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeRole {
    /// Sampled root-circle reference curve.
    RootCircle,
    /// Radial segment from the gear axis to a slot boundary.
    Spoke,
    /// Counter-clockwise involute flank.
    FlankForward,
    /// Clockwise involute flank.
    FlankReverse,
    /// Arc joining the two flank tips of one tooth.
    TopLand,
}

/// A role-tagged point sequence in the gear plane.
///
/// Strokes are independent polylines; the consumer renders each on its
/// own, no closed-polygon stitching is implied.
#[derive(Debug, Clone)]
pub struct Stroke {
    /// What the points depict.
    pub role: StrokeRole,
    /// The ordered vertices of the stroke.
    pub points: Vec<Point2>,
}

/// The result of one involute trace, ordered from the base circle
/// outward.
#[derive(Debug, Clone, Default)]
pub struct InvoluteTrace {
    /// The accepted trace points.
    pub points: Vec<Point2>,
}

impl InvoluteTrace {
    /// Returns the last accepted point, the flank's terminal endpoint.
    #[must_use]
    pub fn terminal(&self) -> Option<&Point2> {
        self.points.last()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = TraceParams::default();
        assert!((params.increment_deg() - 5.0).abs() < f64::EPSILON);
        assert_eq!(params.chord_samples(), 20);
        assert_eq!(params.circle_samples(), 360);
    }

    #[test]
    fn new_with_valid_params() {
        let params = TraceParams::new(2.5, 10, 90).unwrap();
        assert!((params.increment_deg() - 2.5).abs() < f64::EPSILON);
        assert_eq!(params.chord_samples(), 10);
        assert_eq!(params.circle_samples(), 90);
    }

    #[test]
    fn non_positive_increment_rejected() {
        assert!(TraceParams::new(0.0, 20, 360).is_err());
        assert!(TraceParams::new(-5.0, 20, 360).is_err());
    }

    #[test]
    fn too_few_samples_rejected() {
        assert!(TraceParams::new(5.0, 1, 360).is_err());
        assert!(TraceParams::new(5.0, 20, 2).is_err());
    }

    #[test]
    fn terminal_of_empty_trace_is_undefined() {
        let trace = InvoluteTrace::default();
        assert!(trace.terminal().is_none());
    }

    #[test]
    fn terminal_is_last_point() {
        let trace = InvoluteTrace {
            points: vec![Point2::new(1.0, 0.0), Point2::new(2.0, 0.0)],
        };
        let terminal = trace.terminal().unwrap();
        assert!((terminal.x - 2.0).abs() < f64::EPSILON);
    }
}
