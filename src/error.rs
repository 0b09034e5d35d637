use thiserror::Error;

/// Top-level error type for the gearform crate.
#[derive(Debug, Error)]
pub enum GearformError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors raised while validating gear or sampling parameters.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("outer radius {outer_radius} must exceed base radius {base_radius}")]
    OuterNotBeyondBase {
        base_radius: f64,
        outer_radius: f64,
    },

    #[error("base radius {0} must be positive")]
    NonPositiveBaseRadius(f64),

    #[error("tooth step {0} deg must be positive")]
    NonPositiveToothStep(f64),

    #[error("tooth step {0} deg must divide 360 evenly")]
    UnevenToothStep(f64),

    #[error("trace increment {0} deg must be positive")]
    NonPositiveIncrement(f64),

    #[error("chord sample count {0} must be at least 2")]
    TooFewChordSamples(u32),

    #[error("circle sample count {0} must be at least 3")]
    TooFewCircleSamples(u32),
}

/// Errors raised while tracing involute flanks.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error(
        "involute flank at {start_angle_deg} deg collapsed to {points} point(s); \
         outside circle too close to the base circle for a {increment_deg} deg increment"
    )]
    DegenerateFlank {
        start_angle_deg: f64,
        increment_deg: f64,
        points: usize,
    },
}

/// Convenience type alias for results using [`GearformError`].
pub type Result<T> = std::result::Result<T, GearformError>;
