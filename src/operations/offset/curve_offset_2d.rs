use crate::document::{CurveData, CurveId, Drawing};
use crate::error::Result;
use crate::geometry::Element;

/// Adds the parallel copy of a curve at a signed distance.
///
/// Positive distances move outward for arcs, circles and ellipses and to
/// the left of travel for lines and polylines. The copy inherits the
/// original's layer.
#[derive(Debug)]
pub struct Offset {
    curve: CurveId,
    distance: f64,
}

impl Offset {
    /// Creates a new `Offset` operation.
    #[must_use]
    pub fn new(curve: CurveId, distance: f64) -> Self {
        Self { curve, distance }
    }

    /// Executes the offset, returning the ID of the new curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the curve is not in the drawing and
    /// `IllegalAction` if the offset would collapse or invert it. The
    /// drawing is unchanged on error.
    pub fn execute(&self, drawing: &mut Drawing) -> Result<CurveId> {
        let data = drawing.get(self.curve)?;
        let curve = data.curve.clone_with_distance(self.distance)?;
        let copy = CurveData::new(curve).on_layer(data.layer.clone());
        Ok(drawing.add(copy))
    }
}
