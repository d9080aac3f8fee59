use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::geometry::Element;
use crate::math::Point2;

/// Reflects a curve across the line through two points.
#[derive(Debug)]
pub struct Mirror {
    curve: CurveId,
    first: Point2,
    second: Point2,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(curve: CurveId, first: Point2, second: Point2) -> Self {
        Self {
            curve,
            first,
            second,
        }
    }

    /// Executes the reflection, modifying the curve in-place.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if the curve is not in the drawing and
    /// `InvalidArgument` if the mirror points coincide. The curve is left
    /// untouched on error.
    pub fn execute(&self, drawing: &mut Drawing) -> Result<()> {
        drawing
            .get_mut(self.curve)?
            .curve
            .mirror(&self.first, &self.second)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::CurveData;
    use crate::geometry::{Arc, Curve, Polyline};
    use crate::test_support::p;

    #[test]
    fn mirror_polyline_across_y_axis() {
        let mut drawing = Drawing::new();
        let pl = Polyline::new(vec![p(1.0, 0.0), p(2.0, 1.0), p(3.0, 0.0)]).unwrap();
        let id = drawing.add(CurveData::new(pl));
        Mirror::new(id, p(0.0, 0.0), p(0.0, 1.0))
            .execute(&mut drawing)
            .unwrap();
        let expected: Curve = Polyline::new(vec![p(-1.0, 0.0), p(-2.0, 1.0), p(-3.0, 0.0)])
            .unwrap()
            .into();
        assert_eq!(drawing.curve(id).unwrap(), &expected);
    }

    #[test]
    fn coincident_points_are_rejected() {
        let mut drawing = Drawing::new();
        let arc = Arc::from_three_points(p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0)).unwrap();
        let id = drawing.add(CurveData::new(arc));
        let before = drawing.curve(id).unwrap().clone();
        let err = Mirror::new(id, p(2.0, 2.0), p(2.0, 2.0))
            .execute(&mut drawing)
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(drawing.curve(id).unwrap(), &before);
    }
}
