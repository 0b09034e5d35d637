use crate::error::{Result, TraceError};
use crate::geometry::curve::{Involute, Winding};
use crate::geometry::GearSpec;
use crate::math::angle::{normalize_sweep_deg, polar_angle_deg, sample_arc};
use crate::math::Point2;
use crate::trace::{InvoluteTrace, Stroke, StrokeRole, TraceInvolute, TraceParams};

use super::ToothOutline;

/// Builds the outline of a single tooth: two involute flanks and the
/// top-land arc joining their tips.
pub struct AssembleTooth {
    spec: GearSpec,
    params: TraceParams,
    tooth_angle_deg: f64,
}

impl AssembleTooth {
    /// Creates a new `AssembleTooth` operation for the tooth whose
    /// slot boundary sits at `tooth_angle_deg`.
    #[must_use]
    pub fn new(spec: GearSpec, params: TraceParams, tooth_angle_deg: f64) -> Self {
        Self {
            spec,
            params,
            tooth_angle_deg,
        }
    }

    /// Executes the assembly.
    ///
    /// The forward flank unwinds from the slot boundary, the reverse
    /// flank from the half-pitch line, so the two converge over the
    /// tooth body. Both stop at the same unwind angle, which puts the
    /// two tips at a shared radius; the top land is sampled along that
    /// radius between the tip polar angles, across the shorter arc.
    ///
    /// # Errors
    ///
    /// Returns an error if either flank collapses to fewer than two
    /// points, which happens when the outside circle sits closer to
    /// the base circle than the first trace step reaches.
    pub fn execute(&self) -> Result<ToothOutline> {
        let (forward, start_tip) = self.flank(self.tooth_angle_deg, Winding::Forward)?;
        let (reverse, end_tip) =
            self.flank(self.tooth_angle_deg + self.spec.half_step_deg(), Winding::Reverse)?;

        let top_land = self.top_land(&start_tip, &end_tip);

        Ok(ToothOutline {
            forward_flank: Stroke {
                role: StrokeRole::FlankForward,
                points: forward.points,
            },
            reverse_flank: Stroke {
                role: StrokeRole::FlankReverse,
                points: reverse.points,
            },
            top_land,
        })
    }

    fn flank(&self, start_angle_deg: f64, winding: Winding) -> Result<(InvoluteTrace, Point2)> {
        let involute = Involute::new(self.spec.base_radius(), start_angle_deg, winding)?;
        let trace = TraceInvolute::new(involute, self.spec.outer_radius(), self.params).execute()?;
        // A one-point flank is no curve; its chord would collapse onto
        // the base circle.
        match trace.terminal().copied() {
            Some(tip) if trace.points.len() >= 2 => Ok((trace, tip)),
            _ => Err(TraceError::DegenerateFlank {
                start_angle_deg,
                increment_deg: self.params.increment_deg(),
                points: trace.points.len(),
            }
            .into()),
        }
    }

    fn top_land(&self, start_tip: &Point2, end_tip: &Point2) -> Stroke {
        // Both tips sit at the same radius; take it off the forward flank.
        let radius = start_tip.coords.norm();
        let start_deg = polar_angle_deg(start_tip);
        let sweep = normalize_sweep_deg(polar_angle_deg(end_tip) - start_deg);
        let points = sample_arc(
            radius,
            start_deg,
            start_deg + sweep,
            self.params.chord_samples(),
        );
        Stroke {
            role: StrokeRole::TopLand,
            points,
        }
    }
}
