use super::{Curve, Element};
use crate::error::{GeometryError, Result};
use crate::geometry::reference_point::filter_inside;
use crate::geometry::{ReferenceKind, ReferencePoint};
use crate::math::geometrics::{determinant, left_normal, mirror_point, points_equal};
use crate::math::{Point2, Rectangle, Vector2, TOLERANCE};

/// An unbounded line through two distinct defining points.
#[derive(Debug, Clone)]
pub struct InfiniteLine {
    first: Point2,
    second: Point2,
}

impl InfiniteLine {
    /// Creates a new infinite line.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the defining points coincide.
    pub fn new(first: Point2, second: Point2) -> Result<Self> {
        if points_equal(&first, &second) {
            return Err(
                GeometryError::InvalidArgument("infinite line points coincide".into()).into(),
            );
        }
        Ok(Self { first, second })
    }

    #[must_use]
    pub fn first_point(&self) -> &Point2 {
        &self.first
    }

    #[must_use]
    pub fn second_point(&self) -> &Point2 {
        &self.second
    }

    /// Perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        let d = self.second - self.first;
        (point - self.first).perp(&d).abs() / d.norm()
    }
}

impl PartialEq for InfiniteLine {
    /// Lines are equal when each contains the other's defining points.
    fn eq(&self, other: &Self) -> bool {
        self.contains(&other.first) && self.contains(&other.second)
    }
}

impl Element for InfiniteLine {
    fn contains(&self, point: &Point2) -> bool {
        self.distance_to(point) <= TOLERANCE
    }

    fn bounding_rectangle(&self) -> Rectangle {
        Rectangle::new(self.first.x, self.first.y, self.second.x, self.second.y)
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        filter_inside(
            area,
            [
                ReferencePoint::new(ReferenceKind::Square, self.first),
                ReferencePoint::new(ReferenceKind::Square, self.second),
            ],
        )
    }

    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        let shift = left_normal(&self.first, &self.second)? * distance;
        Ok(Curve::InfiniteLine(Self {
            first: self.first + shift,
            second: self.second + shift,
        }))
    }

    fn nearest_extreme_point(&self, _point: &Point2) -> Option<Point2> {
        None
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        determinant(&self.first, &self.second, point) > 0.0
    }

    fn translate(&mut self, vector: &Vector2) {
        self.first += vector;
        self.second += vector;
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        let first = mirror_point(&self.first, a, b)?;
        let second = mirror_point(&self.second, a, b)?;
        self.first = first;
        self.second = second;
        Ok(())
    }
}
