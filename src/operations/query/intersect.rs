use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::intersection::{proper_intersections, IntersectionRegistry};
use crate::math::Point2;

/// Intersects the unbounded curves underlying two drawing curves.
pub struct CurveCurveIntersect {
    first: CurveId,
    second: CurveId,
}

impl CurveCurveIntersect {
    /// Creates a new `CurveCurveIntersect` query.
    #[must_use]
    pub fn new(first: CurveId, second: CurveId) -> Self {
        Self { first, second }
    }

    /// Executes the query. Pairs without a strategy yield no points.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if either curve is not in the drawing.
    pub fn execute(
        &self,
        drawing: &Drawing,
        registry: &IntersectionRegistry,
    ) -> Result<Vec<Point2>> {
        let first = drawing.curve(self.first)?;
        let second = drawing.curve(self.second)?;
        Ok(registry.intersect(first, second))
    }
}

/// Intersections of a curve with references, restricted to both bounded
/// curves and excluding the curve's endpoints.
pub struct ProperIntersections {
    curve: CurveId,
    references: Vec<CurveId>,
}

impl ProperIntersections {
    /// Creates a new `ProperIntersections` query.
    #[must_use]
    pub fn new(curve: CurveId, references: Vec<CurveId>) -> Self {
        Self { curve, references }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if any curve is not in the drawing.
    pub fn execute(
        &self,
        drawing: &Drawing,
        registry: &IntersectionRegistry,
    ) -> Result<Vec<Point2>> {
        let target = drawing.curve(self.curve)?;
        let references = drawing.curves(&self.references)?;
        Ok(proper_intersections(registry, target, &references))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::CurveData;
    use crate::geometry::{Arc, Line};
    use crate::test_support::p;

    #[test]
    fn unbounded_versus_proper() {
        let mut drawing = Drawing::new();
        let arc = Arc::from_three_points(p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0)).unwrap();
        let arc = drawing.add(CurveData::new(arc));
        let short = drawing.add(CurveData::new(Line::new(p(0.0, -2.0), p(0.0, -0.5)).unwrap()));
        let long = drawing.add(CurveData::new(Line::new(p(0.0, -2.0), p(0.0, 2.0)).unwrap()));
        let registry = IntersectionRegistry::default();

        let all = CurveCurveIntersect::new(arc, short).execute(&drawing, &registry).unwrap();
        assert_eq!(all.len(), 2);
        let proper = ProperIntersections::new(arc, vec![short, long])
            .execute(&drawing, &registry)
            .unwrap();
        assert_eq!(proper.len(), 1);
        assert!((proper[0].y - 1.0).abs() < 1e-12);
    }
}
