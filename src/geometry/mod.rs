pub mod curve;
pub mod gear;

pub use curve::{Circle, Curve2, CurveDomain, Involute, Winding};
pub use gear::GearSpec;
