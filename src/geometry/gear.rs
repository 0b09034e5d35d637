use crate::error::{ConfigurationError, Result};
use crate::math::TOLERANCE;

/// Validated spur gear configuration.
///
/// `base_radius` is the root circle the involute flanks unwind from,
/// `outer_radius` the tip circle bounding the tooth height, and
/// `tooth_step_deg` the angular pitch between successive teeth. The
/// pitch must divide 360 evenly so the gear closes on itself; the
/// tooth count is derived from it at construction.
///
/// The default spec is a 12-tooth gear with base radius 10.0, outer
/// radius 12.5 and a 30 degree pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GearSpec {
    base_radius: f64,
    outer_radius: f64,
    tooth_step_deg: f64,
    tooth_count: u32,
}

impl GearSpec {
    /// Creates a validated gear spec.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_radius` is not positive, if
    /// `outer_radius` does not exceed `base_radius`, or if
    /// `tooth_step_deg` is not positive or does not divide 360 evenly.
    pub fn new(base_radius: f64, outer_radius: f64, tooth_step_deg: f64) -> Result<Self> {
        if base_radius < TOLERANCE {
            return Err(ConfigurationError::NonPositiveBaseRadius(base_radius).into());
        }
        if outer_radius - base_radius < TOLERANCE {
            return Err(ConfigurationError::OuterNotBeyondBase {
                base_radius,
                outer_radius,
            }
            .into());
        }
        if tooth_step_deg < TOLERANCE {
            return Err(ConfigurationError::NonPositiveToothStep(tooth_step_deg).into());
        }

        let teeth = 360.0 / tooth_step_deg;
        let rounded = teeth.round();
        if (teeth - rounded).abs() > TOLERANCE {
            return Err(ConfigurationError::UnevenToothStep(tooth_step_deg).into());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tooth_count = rounded as u32;

        Ok(Self {
            base_radius,
            outer_radius,
            tooth_step_deg,
            tooth_count,
        })
    }

    /// Returns the root circle radius.
    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Returns the outside (tip) circle radius.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Returns the angular pitch between teeth in degrees.
    #[must_use]
    pub fn tooth_step_deg(&self) -> f64 {
        self.tooth_step_deg
    }

    /// Returns half the angular pitch in degrees.
    ///
    /// The two flanks of a tooth root at a slot boundary and at the
    /// half-pitch line next to it.
    #[must_use]
    pub fn half_step_deg(&self) -> f64 {
        self.tooth_step_deg * 0.5
    }

    /// Returns the number of teeth around the full gear.
    #[must_use]
    pub fn tooth_count(&self) -> u32 {
        self.tooth_count
    }
}

impl Default for GearSpec {
    fn default() -> Self {
        Self {
            base_radius: 10.0,
            outer_radius: 12.5,
            tooth_step_deg: 30.0,
            tooth_count: 12,
        }
    }
}
