use crate::error::Result;
use crate::geometry::curve::{Circle, Curve2};
use crate::geometry::GearSpec;
use crate::math::angle::polar_point;
use crate::math::Point2;
use crate::trace::{Stroke, StrokeRole, TraceParams};

use super::{AssembleTooth, GearOutline};

/// Generates the full outline of a gear: the root-circle reference
/// curve, two boundary spokes per tooth, and every tooth assembly.
pub struct GenerateGear {
    spec: GearSpec,
    params: TraceParams,
}

impl GenerateGear {
    /// Creates a new `GenerateGear` operation.
    #[must_use]
    pub fn new(spec: GearSpec, params: TraceParams) -> Self {
        Self { spec, params }
    }

    /// Executes the generation.
    ///
    /// Strokes are emitted root circle first, then per tooth in
    /// ascending angular order: the two boundary spokes followed by
    /// the tooth assembly. The order is a presentation convention;
    /// every stroke stands on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if a flank trace degenerates (see
    /// [`AssembleTooth`]).
    pub fn execute(&self) -> Result<GearOutline> {
        let mut strokes = Vec::new();
        strokes.push(self.root_circle()?);

        for tooth in 0..self.spec.tooth_count() {
            let angle = f64::from(tooth) * self.spec.tooth_step_deg();
            strokes.push(self.spoke(angle));
            strokes.push(self.spoke(angle + self.spec.half_step_deg()));

            let outline = AssembleTooth::new(self.spec, self.params, angle).execute()?;
            strokes.extend(outline.into_strokes());
        }

        Ok(GearOutline { strokes })
    }

    fn root_circle(&self) -> Result<Stroke> {
        let circle = Circle::new(Point2::origin(), self.spec.base_radius())?;
        let domain = circle.domain();
        let sweep = domain.t_max - domain.t_min;
        let last = f64::from(self.params.circle_samples() - 1);
        let points = (0..self.params.circle_samples())
            .map(|i| circle.evaluate(domain.t_min + sweep * f64::from(i) / last))
            .collect::<Result<Vec<_>>>()?;
        Ok(Stroke {
            role: StrokeRole::RootCircle,
            points,
        })
    }

    fn spoke(&self, angle_deg: f64) -> Stroke {
        Stroke {
            role: StrokeRole::Spoke,
            points: vec![
                Point2::origin(),
                polar_point(self.spec.base_radius(), angle_deg),
            ],
        }
    }
}
