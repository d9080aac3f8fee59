use crate::error::{GeometryError, Result};
use crate::geometry::{Arc, Circle, Curve, Ellipse, InfiniteLine, Line, Polyline};
use crate::math::Point2;

/// Which curve to build and how its points are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveTemplate {
    /// `[initial, intermediate, ending]`, either orientation.
    ArcThreePoints,
    /// `[initial, ending, center]`.
    ArcCenter { counterclockwise: bool },
    /// `[initial, ending, center, direction]`.
    ArcCenterDirection,
    /// `[center, point on the circle]`.
    Circle,
    /// `[center, first axis end, second axis end]`.
    Ellipse,
    /// `[first, second]`.
    InfiniteLine,
    /// `[initial, ending]`.
    Line,
    /// Two or more vertices.
    Polyline,
}

impl CurveTemplate {
    /// Exact number of points, or `None` for variable arity.
    fn arity(self) -> Option<usize> {
        match self {
            Self::ArcThreePoints | Self::ArcCenter { .. } | Self::Ellipse => Some(3),
            Self::ArcCenterDirection => Some(4),
            Self::Circle | Self::InfiniteLine | Self::Line => Some(2),
            Self::Polyline => None,
        }
    }
}

/// Builds a curve from user-picked points.
pub struct ConstructCurve {
    template: CurveTemplate,
    points: Vec<Option<Point2>>,
}

impl ConstructCurve {
    /// Creates a new `ConstructCurve` operation.
    #[must_use]
    pub fn new(template: CurveTemplate, points: Vec<Option<Point2>>) -> Self {
        Self { template, points }
    }

    /// Executes the construction.
    ///
    /// # Errors
    ///
    /// Returns `NullArgument` if a point is absent or missing, checked
    /// before any geometry, and `InvalidArgument` for extra points or
    /// degenerate input.
    pub fn execute(&self) -> Result<Curve> {
        let points = self.required_points()?;
        if self.template == CurveTemplate::Polyline {
            return Ok(Polyline::new(points)?.into());
        }
        let curve = match (self.template, points.as_slice()) {
            (CurveTemplate::ArcThreePoints, &[a, b, c]) => Arc::from_three_points(a, b, c)?.into(),
            (CurveTemplate::ArcCenter { counterclockwise }, &[a, b, c]) => {
                Arc::from_center(a, b, c, counterclockwise)?.into()
            }
            (CurveTemplate::ArcCenterDirection, &[a, b, c, d]) => {
                Arc::from_center_direction(a, b, c, d)?.into()
            }
            (CurveTemplate::Circle, &[center, on]) => Circle::through(center, &on)?.into(),
            (CurveTemplate::Ellipse, &[c, a, b]) => Ellipse::new(c, a, b)?.into(),
            (CurveTemplate::InfiniteLine, &[a, b]) => InfiniteLine::new(a, b)?.into(),
            (CurveTemplate::Line, &[a, b]) => Line::new(a, b)?.into(),
            _ => {
                return Err(GeometryError::InvalidArgument(format!(
                    "{:?} takes {:?} points",
                    self.template,
                    self.template.arity()
                ))
                .into())
            }
        };
        Ok(curve)
    }

    fn required_points(&self) -> Result<Vec<Point2>> {
        let points = self
            .points
            .iter()
            .map(|p| p.ok_or(GeometryError::NullArgument("point")))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        match self.template.arity() {
            Some(n) if points.len() < n => Err(GeometryError::NullArgument("point").into()),
            Some(n) if points.len() > n => Err(GeometryError::InvalidArgument(format!(
                "{:?} takes {n} points, got {}",
                self.template,
                points.len()
            ))
            .into()),
            _ => Ok(points),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CurveKind, Element};
    use crate::test_support::p;

    #[test]
    fn builds_each_template() {
        let cases = [
            (CurveTemplate::ArcThreePoints, vec![p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0)], CurveKind::Arc),
            (
                CurveTemplate::ArcCenter { counterclockwise: false },
                vec![p(1.0, 0.0), p(0.0, 1.0), p(0.0, 0.0)],
                CurveKind::Arc,
            ),
            (
                CurveTemplate::ArcCenterDirection,
                vec![p(1.0, 0.0), p(-1.0, 0.0), p(0.0, 0.0), p(0.0, -1.0)],
                CurveKind::Arc,
            ),
            (CurveTemplate::Circle, vec![p(0.0, 0.0), p(0.0, 2.0)], CurveKind::Circle),
            (CurveTemplate::Ellipse, vec![p(0.0, 0.0), p(2.0, 0.0), p(0.0, 1.0)], CurveKind::Ellipse),
            (CurveTemplate::InfiniteLine, vec![p(0.0, 0.0), p(1.0, 0.0)], CurveKind::InfiniteLine),
            (CurveTemplate::Line, vec![p(0.0, 0.0), p(1.0, 0.0)], CurveKind::Line),
            (
                CurveTemplate::Polyline,
                vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)],
                CurveKind::Polyline,
            ),
        ];
        for (template, points, kind) in cases {
            let input = points.into_iter().map(Some).collect();
            let curve = ConstructCurve::new(template, input).execute().unwrap();
            assert_eq!(curve.kind(), kind);
        }
    }

    #[test]
    fn clockwise_center_arc_is_stored_counter_clockwise() {
        let points = vec![Some(p(1.0, 0.0)), Some(p(0.0, 1.0)), Some(p(0.0, 0.0))];
        let curve = ConstructCurve::new(CurveTemplate::ArcCenter { counterclockwise: false }, points)
            .execute()
            .unwrap();
        // Clockwise from (1, 0) to (0, 1) covers three quadrants.
        assert!(curve.contains(&p(-1.0, 0.0)));
        assert!(!curve.contains(&p(0.6, 0.8)));
    }

    #[test]
    fn absent_points_are_null_arguments() {
        let err = ConstructCurve::new(CurveTemplate::Line, vec![Some(p(0.0, 0.0)), None])
            .execute()
            .unwrap_err();
        assert!(err.is_null_argument());
        // Absence wins over degeneracy.
        let err = ConstructCurve::new(CurveTemplate::ArcThreePoints, vec![Some(p(0.0, 0.0)), Some(p(1.0, 1.0))])
            .execute()
            .unwrap_err();
        assert!(err.is_null_argument());
    }

    #[test]
    fn degenerate_and_extra_points_are_invalid() {
        let collinear = vec![Some(p(0.0, 0.0)), Some(p(1.0, 1.0)), Some(p(2.0, 2.0))];
        let err = ConstructCurve::new(CurveTemplate::ArcThreePoints, collinear)
            .execute()
            .unwrap_err();
        assert!(err.is_invalid_argument());
        let extra = vec![Some(p(0.0, 0.0)), Some(p(1.0, 1.0)), Some(p(2.0, 0.0))];
        let err = ConstructCurve::new(CurveTemplate::Line, extra).execute().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
