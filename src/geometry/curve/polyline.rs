use super::{nearer_of, Curve, Element, Line};
use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::reference_point::filter_inside;
use crate::geometry::{ReferenceKind, ReferencePoint};
use crate::math::geometrics::{left_normal, mirror_point, points_equal};
use crate::math::intersect_2d::line_line;
use crate::math::{Point2, Rectangle, Vector2};

/// An open chain of straight segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a new polyline through `points`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if fewer than two points are given or two
    /// consecutive points coincide.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(
                GeometryError::InvalidArgument("polyline needs at least two points".into()).into(),
            );
        }
        if points.windows(2).any(|w| points_equal(&w[0], &w[1])) {
            return Err(GeometryError::InvalidArgument(
                "polyline has coincident consecutive points".into(),
            )
            .into());
        }
        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the first vertex.
    #[must_use]
    pub fn first_point(&self) -> &Point2 {
        &self.points[0]
    }

    /// Returns the last vertex.
    #[must_use]
    pub fn last_point(&self) -> &Point2 {
        &self.points[self.points.len() - 1]
    }

    /// The segments between consecutive vertices, in order.
    #[must_use]
    pub fn segments(&self) -> Vec<Line> {
        self.points
            .windows(2)
            .filter_map(|w| Line::new(w[0], w[1]).ok())
            .collect()
    }

    /// The segment closest to `point`.
    fn nearest_segment(&self, point: &Point2) -> Option<Line> {
        self.segments()
            .into_iter()
            .min_by(|a, b| a.distance_to(point).total_cmp(&b.distance_to(point)))
    }

    pub(crate) fn set_first_point(&mut self, to: Point2) {
        self.points[0] = to;
    }

    pub(crate) fn set_last_point(&mut self, to: Point2) {
        let last = self.points.len() - 1;
        self.points[last] = to;
    }
}

impl Element for Polyline {
    fn contains(&self, point: &Point2) -> bool {
        self.segments().iter().any(|s| s.contains(point))
    }

    fn bounding_rectangle(&self) -> Rectangle {
        Rectangle::enclosing(&self.points).unwrap_or_else(|| {
            let p = self.first_point();
            Rectangle::new(p.x, p.y, p.x, p.y)
        })
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        let vertices = self
            .points
            .iter()
            .map(|p| ReferencePoint::new(ReferenceKind::Square, *p));
        let midpoints = self
            .segments()
            .into_iter()
            .map(|s| ReferencePoint::new(ReferenceKind::Triangle, s.midpoint()));
        filter_inside(area, vertices.chain(midpoints))
    }

    /// Shifts every segment along its left normal and joins neighbours at
    /// the intersection of their shifted supporting lines.
    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        let shifted = self
            .points
            .windows(2)
            .map(|w| {
                let n = left_normal(&w[0], &w[1])? * distance;
                Ok((w[0] + n, w[1] + n))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut points = Vec::with_capacity(self.points.len());
        if let Some((start, _)) = shifted.first() {
            points.push(*start);
        }
        for pair in shifted.windows(2) {
            let (a0, a1) = pair[0];
            let (b0, b1) = pair[1];
            // Parallel neighbours keep the shifted vertex.
            points.push(line_line(&a0, &a1, &b0, &b1).unwrap_or(a1));
        }
        if let Some((_, end)) = shifted.last() {
            points.push(*end);
        }

        Self::new(points).map(Curve::Polyline).map_err(|_| {
            OperationError::IllegalAction(format!("offset {distance} collapses a polyline segment"))
                .into()
        })
    }

    fn nearest_extreme_point(&self, point: &Point2) -> Option<Point2> {
        Some(nearer_of(point, self.first_point(), self.last_point()))
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        self.nearest_segment(point)
            .is_some_and(|s| s.is_positive_direction(point))
    }

    fn translate(&mut self, vector: &Vector2) {
        for p in &mut self.points {
            *p += vector;
        }
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        let mirrored = self
            .points
            .iter()
            .map(|p| mirror_point(p, a, b))
            .collect::<Result<Vec<_>>>()?;
        self.points = mirrored;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// An L going right then up.
    fn ell() -> Polyline {
        Polyline::new(vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0)]).unwrap()
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(Polyline::new(vec![p(0.0, 0.0)]).unwrap_err().is_invalid_argument());
        assert!(Polyline::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn contains_any_segment() {
        let pl = ell();
        assert!(pl.contains(&p(2.0, 0.0)));
        assert!(pl.contains(&p(4.0, 1.5)));
        assert!(!pl.contains(&p(2.0, 1.5)));
    }

    #[test]
    fn miter_offset() {
        // Left of travel is inside the L.
        let Curve::Polyline(out) = ell().clone_with_distance(1.0).unwrap() else {
            panic!("expected polyline");
        };
        let pts = out.points();
        assert_eq!(pts.len(), 3);
        assert_abs_diff_eq!(pts[0], p(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(pts[1], p(3.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(pts[2], p(3.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn collinear_vertices_keep_shifted_point() {
        let pl = Polyline::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]).unwrap();
        let Curve::Polyline(out) = pl.clone_with_distance(-1.0).unwrap() else {
            panic!("expected polyline");
        };
        assert_abs_diff_eq!(out.points()[1], p(1.0, -1.0), epsilon = 1e-12);
    }

    #[test]
    fn direction_uses_nearest_segment() {
        let pl = ell();
        assert!(pl.is_positive_direction(&p(3.5, 2.0)));
        assert!(!pl.is_positive_direction(&p(5.0, 2.0)));
        assert!(!pl.is_positive_direction(&p(2.0, -1.0)));
    }

    #[test]
    fn references_and_extremes() {
        let pl = ell();
        let all = pl.reference_points(Some(&Rectangle::new(-1.0, -1.0, 5.0, 4.0)));
        assert_eq!(all.len(), 5);
        assert_eq!(pl.nearest_extreme_point(&p(4.0, 4.0)), Some(p(4.0, 3.0)));
        assert_eq!(pl.bounding_rectangle(), Rectangle::new(0.0, 3.0, 4.0, 0.0));
    }
}
