use super::{nearer_of, Curve, Element};
use crate::error::{GeometryError, Result};
use crate::geometry::reference_point::filter_inside;
use crate::geometry::{ComparablePoint, ReferenceKind, ReferencePoint};
use crate::math::geometrics::{determinant, distance, left_normal, mirror_point, points_equal};
use crate::math::{Point2, Rectangle, Vector2, TOLERANCE};

/// A line segment between two distinct points.
///
/// The parametric form is `P(t) = initial + t * (ending - initial)` with
/// `t` in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Line {
    initial: Point2,
    ending: Point2,
}

impl Line {
    /// Creates a new segment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the endpoints coincide.
    pub fn new(initial: Point2, ending: Point2) -> Result<Self> {
        if points_equal(&initial, &ending) {
            return Err(GeometryError::InvalidArgument("segment endpoints coincide".into()).into());
        }
        Ok(Self { initial, ending })
    }

    #[must_use]
    pub fn initial_point(&self) -> &Point2 {
        &self.initial
    }

    #[must_use]
    pub fn ending_point(&self) -> &Point2 {
        &self.ending
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        distance(&self.initial, &self.ending)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.initial, &self.ending)
    }

    /// Segment parameter of the projection of `point` onto the supporting
    /// line: `0` at the initial point, `1` at the ending point.
    #[must_use]
    pub fn parameter(&self, point: &Point2) -> f64 {
        let d = self.ending - self.initial;
        (point - self.initial).dot(&d) / d.norm_squared()
    }

    /// Point of the supporting line at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.initial + (self.ending - self.initial) * t
    }

    /// Distance from `point` to the closest point of the segment.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        let t = self.parameter(point).clamp(0.0, 1.0);
        distance(point, &self.point_at(t))
    }

    /// Orders `points` by segment parameter, walking backwards from the
    /// ending point when `reverse` is set. Points sharing a parameter
    /// collapse into the first one.
    #[must_use]
    pub fn sorted_points(&self, points: &[Point2], reverse: bool) -> Vec<ComparablePoint> {
        let tolerance = TOLERANCE / self.length();
        let mut sorted: Vec<ComparablePoint> = points
            .iter()
            .map(|p| ComparablePoint::new(*p, self.parameter(p)))
            .collect();
        sorted.sort();
        sorted.dedup_by(|later, kept| (later.key - kept.key).abs() <= tolerance);
        if reverse {
            sorted.reverse();
        }
        sorted
    }

    pub(crate) fn set_initial_point(&mut self, to: Point2) {
        self.initial = to;
    }

    pub(crate) fn set_ending_point(&mut self, to: Point2) {
        self.ending = to;
    }
}

impl PartialEq for Line {
    /// Segments are equal when they share the unordered endpoint pair.
    fn eq(&self, other: &Self) -> bool {
        (points_equal(&self.initial, &other.initial) && points_equal(&self.ending, &other.ending))
            || (points_equal(&self.initial, &other.ending)
                && points_equal(&self.ending, &other.initial))
    }
}

impl Element for Line {
    fn contains(&self, point: &Point2) -> bool {
        let d = self.ending - self.initial;
        let len = d.norm();
        let offset = point - self.initial;
        let along = offset.dot(&d) / len;
        let across = offset.perp(&d).abs() / len;
        across <= TOLERANCE && along >= -TOLERANCE && along <= len + TOLERANCE
    }

    fn bounding_rectangle(&self) -> Rectangle {
        Rectangle::new(self.initial.x, self.initial.y, self.ending.x, self.ending.y)
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        filter_inside(
            area,
            [
                ReferencePoint::new(ReferenceKind::Square, self.initial),
                ReferencePoint::new(ReferenceKind::Square, self.ending),
                ReferencePoint::new(ReferenceKind::Triangle, self.midpoint()),
            ],
        )
    }

    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        let shift = left_normal(&self.initial, &self.ending)? * distance;
        Ok(Curve::Line(Self {
            initial: self.initial + shift,
            ending: self.ending + shift,
        }))
    }

    fn nearest_extreme_point(&self, point: &Point2) -> Option<Point2> {
        Some(nearer_of(point, &self.initial, &self.ending))
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        determinant(&self.initial, &self.ending, point) > 0.0
    }

    fn translate(&mut self, vector: &Vector2) {
        self.initial += vector;
        self.ending += vector;
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        let initial = mirror_point(&self.initial, a, b)?;
        let ending = mirror_point(&self.ending, a, b)?;
        self.initial = initial;
        self.ending = ending;
        Ok(())
    }
}
