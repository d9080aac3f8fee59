use tracing::trace;

use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::geometry::{Arc, ArcEnd, Circle, Curve, Element, Line, Polyline};
use crate::intersection::IntersectionRegistry;
use crate::math::geometrics::{distance, relative_angle};
use crate::math::{Point2, TOLERANCE};

/// Finds the first reference intersection met when a curve grows past its
/// endpoint nearest `from`.
pub struct NearestIntersection {
    curve: CurveId,
    references: Vec<CurveId>,
    from: Point2,
}

impl NearestIntersection {
    /// Creates a new `NearestIntersection` query.
    #[must_use]
    pub fn new(curve: CurveId, references: Vec<CurveId>, from: Point2) -> Self {
        Self {
            curve,
            references,
            from,
        }
    }

    /// Executes the query. Closed and unbounded curves never grow, so they
    /// yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if any curve is not in the drawing.
    pub fn execute(
        &self,
        drawing: &Drawing,
        registry: &IntersectionRegistry,
    ) -> Result<Option<Point2>> {
        let curve = drawing.curve(self.curve)?;
        let references = drawing.curves(&self.references)?;
        Ok(nearest_intersection(registry, curve, &references, &self.from))
    }
}

/// Curve-level form of [`NearestIntersection`].
#[must_use]
pub fn nearest_intersection(
    registry: &IntersectionRegistry,
    curve: &Curve,
    references: &[&Curve],
    from: &Point2,
) -> Option<Point2> {
    match curve {
        Curve::Arc(arc) => nearest_on_circle(registry, arc, references, from),
        Curve::Line(line) => {
            let (segment, _) = growing_segment(line, from)?;
            nearest_beyond(registry, &segment, references)
        }
        Curve::Polyline(polyline) => {
            let (segment, _) = polyline_growing_segment(polyline, from)?;
            nearest_beyond(registry, &segment, references)
        }
        Curve::Circle(_) | Curve::Ellipse(_) | Curve::InfiniteLine(_) => {
            trace!(kind = ?curve.kind(), "curve has no endpoints to grow");
            None
        }
    }
}

/// Which arc endpoint grows towards `from`.
pub(crate) fn growing_end(arc: &Arc, from: &Point2) -> ArcEnd {
    if distance(from, arc.ending_point()) <= distance(from, arc.initial_point()) {
        ArcEnd::Ending
    } else {
        ArcEnd::Initial
    }
}

/// Reference intersections with the arc's full circle that lie on the
/// reference but outside the arc.
pub(crate) fn circle_candidates(
    registry: &IntersectionRegistry,
    arc: &Arc,
    references: &[&Curve],
) -> Vec<Point2> {
    let Ok(circle) = Circle::new(*arc.center(), arc.radius()) else {
        return Vec::new();
    };
    let circle = Curve::Circle(circle);
    references
        .iter()
        .flat_map(|reference| {
            registry
                .intersect(&circle, reference)
                .into_iter()
                .filter(move |p| reference.contains(p))
        })
        .filter(|p| !arc.contains(p))
        .collect()
}

/// The candidate reached first when sweeping away from the growing end:
/// counter-clockwise past the ending point, clockwise before the initial
/// point.
fn nearest_on_circle(
    registry: &IntersectionRegistry,
    arc: &Arc,
    references: &[&Curve],
    from: &Point2,
) -> Option<Point2> {
    let center = arc.center();
    let sweep_to = |p: &Point2| match growing_end(arc, from) {
        ArcEnd::Ending => relative_angle(center, arc.ending_point(), p),
        ArcEnd::Initial => relative_angle(center, p, arc.initial_point()),
    };
    circle_candidates(registry, arc, references)
        .into_iter()
        .min_by(|a, b| sweep_to(a).total_cmp(&sweep_to(b)))
}

/// The segment oriented so that its ending is the endpoint nearest `from`,
/// paired with whether that is the original ending.
pub(crate) fn growing_segment(line: &Line, from: &Point2) -> Option<(Line, bool)> {
    if distance(from, line.ending_point()) <= distance(from, line.initial_point()) {
        Some((line.clone(), true))
    } else {
        Line::new(*line.ending_point(), *line.initial_point())
            .ok()
            .map(|reversed| (reversed, false))
    }
}

/// The end segment of `polyline` nearest `from`, oriented so that its
/// ending is the polyline end to grow, paired with whether that is the
/// last vertex.
pub(crate) fn polyline_growing_segment(polyline: &Polyline, from: &Point2) -> Option<(Line, bool)> {
    let segments = polyline.segments();
    if distance(from, polyline.last_point()) <= distance(from, polyline.first_point()) {
        segments.last().map(|last| (last.clone(), true))
    } else {
        let first = segments.first()?;
        Line::new(*first.ending_point(), *first.initial_point())
            .ok()
            .map(|reversed| (reversed, false))
    }
}

/// Closest reference intersection on the supporting line past the
/// segment's ending point.
pub(crate) fn nearest_beyond(
    registry: &IntersectionRegistry,
    segment: &Line,
    references: &[&Curve],
) -> Option<Point2> {
    let line = Curve::Line(segment.clone());
    let threshold = 1.0 + TOLERANCE / segment.length();
    references
        .iter()
        .flat_map(|reference| {
            registry
                .intersect(&line, reference)
                .into_iter()
                .filter(move |p| reference.contains(p))
        })
        .filter(|p| segment.parameter(p) > threshold)
        .min_by(|a, b| {
            distance(a, segment.ending_point()).total_cmp(&distance(b, segment.ending_point()))
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::CurveData;
    use crate::test_support::p;
    use approx::assert_abs_diff_eq;

    /// Upper half of the unit circle, from (1, 0) to (-1, 0).
    fn upper_half() -> Curve {
        Arc::from_three_points(p(1.0, 0.0), p(0.0, 1.0), p(-1.0, 0.0))
            .unwrap()
            .into()
    }

    fn segment(a: Point2, b: Point2) -> Curve {
        Line::new(a, b).unwrap().into()
    }

    #[test]
    fn arc_grows_from_nearest_end() {
        let registry = IntersectionRegistry::default();
        let arc = upper_half();
        // Crosses the lower half at x = -0.6 and x = 0.8.
        let left = segment(p(-0.6, -2.0), p(-0.6, 0.0));
        let right = segment(p(0.8, -2.0), p(0.8, 0.0));
        let refs = [&left, &right];

        let from_ending = nearest_intersection(&registry, &arc, &refs, &p(-1.5, 0.0)).unwrap();
        assert_abs_diff_eq!(from_ending, p(-0.6, -0.8), epsilon = 1e-12);

        let from_initial = nearest_intersection(&registry, &arc, &refs, &p(1.5, 0.0)).unwrap();
        assert_abs_diff_eq!(from_initial, p(0.8, -0.6), epsilon = 1e-12);
    }

    #[test]
    fn arc_without_reachable_reference() {
        let registry = IntersectionRegistry::default();
        let arc = upper_half();
        let above = segment(p(0.0, 0.5), p(0.0, 2.0));
        assert_eq!(nearest_intersection(&registry, &arc, &[&above], &p(-1.0, 0.0)), None);
    }

    #[test]
    fn segment_grows_past_nearest_end() {
        let registry = IntersectionRegistry::default();
        let line = segment(p(0.0, 0.0), p(1.0, 0.0));
        let walls = [
            segment(p(3.0, -1.0), p(3.0, 1.0)),
            segment(p(2.0, -1.0), p(2.0, 1.0)),
            segment(p(-4.0, -1.0), p(-4.0, 1.0)),
        ];
        let refs: Vec<&Curve> = walls.iter().collect();
        let hit = nearest_intersection(&registry, &line, &refs, &p(0.9, 0.0)).unwrap();
        assert_abs_diff_eq!(hit, p(2.0, 0.0), epsilon = 1e-12);
        let hit = nearest_intersection(&registry, &line, &refs, &p(0.1, 0.0)).unwrap();
        assert_abs_diff_eq!(hit, p(-4.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn polyline_grows_from_end_segments() {
        let registry = IntersectionRegistry::default();
        let pl: Curve = Polyline::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0)])
            .unwrap()
            .into();
        let roof = segment(p(-5.0, 5.0), p(5.0, 5.0));
        let wall = segment(p(-3.0, -5.0), p(-3.0, 5.0));
        let refs = [&roof, &wall];
        let up = nearest_intersection(&registry, &pl, &refs, &p(2.0, 1.9)).unwrap();
        assert_abs_diff_eq!(up, p(2.0, 5.0), epsilon = 1e-12);
        let back = nearest_intersection(&registry, &pl, &refs, &p(0.1, 0.0)).unwrap();
        assert_abs_diff_eq!(back, p(-3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn store_level_query() {
        let mut drawing = Drawing::new();
        let registry = IntersectionRegistry::default();
        let arc = drawing.add(CurveData::new(upper_half()));
        let wall = drawing.add(CurveData::new(segment(p(-0.6, -2.0), p(-0.6, 0.0))));
        let circle = drawing.add(CurveData::new(Circle::new(p(5.0, 5.0), 1.0).unwrap()));

        let hit = NearestIntersection::new(arc, vec![wall], p(-1.0, 0.1))
            .execute(&drawing, &registry)
            .unwrap();
        assert!(hit.is_some());
        let none = NearestIntersection::new(circle, vec![wall], p(5.0, 6.0))
            .execute(&drawing, &registry)
            .unwrap();
        assert_eq!(none, None);
    }
}
