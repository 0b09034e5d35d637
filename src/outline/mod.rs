mod assemble_tooth;
mod generate_gear;

pub use assemble_tooth::AssembleTooth;
pub use generate_gear::GenerateGear;

use crate::trace::{Stroke, StrokeRole};

/// The drawable geometry of a single tooth.
#[derive(Debug, Clone)]
pub struct ToothOutline {
    /// Counter-clockwise flank, rooted at the slot boundary.
    pub forward_flank: Stroke,
    /// Clockwise flank, rooted at the half-pitch line.
    pub reverse_flank: Stroke,
    /// Arc joining the two flank tips.
    pub top_land: Stroke,
}

impl ToothOutline {
    /// Consumes the outline, yielding its strokes in emission order.
    #[must_use]
    pub fn into_strokes(self) -> [Stroke; 3] {
        [self.forward_flank, self.reverse_flank, self.top_land]
    }
}

/// The full role-tagged outline of a gear.
#[derive(Debug, Clone, Default)]
pub struct GearOutline {
    /// All strokes, root circle first, then per-tooth groups in
    /// ascending tooth order.
    pub strokes: Vec<Stroke>,
}

impl GearOutline {
    /// Returns the strokes carrying `role`.
    pub fn with_role(&self, role: StrokeRole) -> impl Iterator<Item = &Stroke> + '_ {
        self.strokes.iter().filter(move |stroke| stroke.role == role)
    }
}
