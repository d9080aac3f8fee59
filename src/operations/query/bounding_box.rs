use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::geometry::Element;
use crate::math::Rectangle;

/// Computes the axis-aligned bounding rectangle of a curve.
pub struct BoundingRectangle {
    curve: CurveId,
}

impl BoundingRectangle {
    /// Creates a new `BoundingRectangle` query.
    #[must_use]
    pub fn new(curve: CurveId) -> Self {
        Self { curve }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the curve is not in the drawing.
    pub fn execute(&self, drawing: &Drawing) -> Result<Rectangle> {
        Ok(drawing.curve(self.curve)?.bounding_rectangle())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::CurveData;
    use crate::geometry::Arc;
    use crate::test_support::p;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quarter_arc_box() {
        let mut drawing = Drawing::new();
        // From 45 degrees to 135 degrees, passing the top of the circle.
        let h = 0.5_f64.sqrt();
        let arc = Arc::from_three_points(p(h, h), p(0.0, 1.0), p(-h, h)).unwrap();
        let id = drawing.add(CurveData::new(arc));
        let r = BoundingRectangle::new(id).execute(&drawing).unwrap();
        assert_abs_diff_eq!(r.left, -h, epsilon = 1e-12);
        assert_abs_diff_eq!(r.right, h, epsilon = 1e-12);
        assert_abs_diff_eq!(r.top, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.bottom, h, epsilon = 1e-12);
    }
}
