use crate::document::{CurveId, Drawing};
use crate::error::{GeometryError, Result};
use crate::geometry::Element;
use crate::math::Point2;

/// Tests whether a point lies on a curve.
pub struct Contains {
    curve: CurveId,
    point: Option<Point2>,
}

impl Contains {
    /// Creates a new `Contains` query.
    #[must_use]
    pub fn new(curve: CurveId, point: Option<Point2>) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` if the point is absent and `CurveNotFound` if
    /// the curve is not in the drawing.
    pub fn execute(&self, drawing: &Drawing) -> Result<bool> {
        let point = self.point.ok_or(GeometryError::NullArgument("point"))?;
        Ok(drawing.curve(self.curve)?.contains(&point))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::CurveData;
    use crate::geometry::Circle;
    use crate::test_support::p;

    #[test]
    fn contains_on_curve() {
        let mut drawing = Drawing::new();
        let id = drawing.add(CurveData::new(Circle::new(p(0.0, 0.0), 5.0).unwrap()));
        assert!(Contains::new(id, Some(p(3.0, 4.0))).execute(&drawing).unwrap());
        assert!(!Contains::new(id, Some(p(3.0, 3.0))).execute(&drawing).unwrap());
    }

    #[test]
    fn absent_point_or_curve() {
        let mut drawing = Drawing::new();
        let id = drawing.add(CurveData::new(Circle::new(p(0.0, 0.0), 5.0).unwrap()));
        assert!(Contains::new(id, None).execute(&drawing).unwrap_err().is_null_argument());
        drawing.remove(id).unwrap();
        let err = Contains::new(id, Some(p(5.0, 0.0))).execute(&drawing).unwrap_err();
        assert!(err.is_null_argument());
    }
}
