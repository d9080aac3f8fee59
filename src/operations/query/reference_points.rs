use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::geometry::{Element, ReferencePoint};
use crate::math::Rectangle;

/// Collects the snap targets of a curve inside an area.
pub struct ReferencePoints {
    curve: CurveId,
    area: Option<Rectangle>,
}

impl ReferencePoints {
    /// Creates a new `ReferencePoints` query. An absent area yields no
    /// targets.
    #[must_use]
    pub fn new(curve: CurveId, area: Option<Rectangle>) -> Self {
        Self { curve, area }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the curve is not in the drawing.
    pub fn execute(&self, drawing: &Drawing) -> Result<Vec<ReferencePoint>> {
        Ok(drawing
            .curve(self.curve)?
            .reference_points(self.area.as_ref()))
    }
}
