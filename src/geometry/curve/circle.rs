use super::{Curve, Element};
use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::reference_point::filter_inside;
use crate::geometry::{ReferenceKind, ReferencePoint};
use crate::math::geometrics::{distance, mirror_point};
use crate::math::{Point2, Rectangle, Vector2, TOLERANCE};

/// A full circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the radius is not positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::InvalidArgument("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Creates the circle centered at `center` passing through `point`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the two points coincide.
    pub fn through(center: Point2, point: &Point2) -> Result<Self> {
        Self::new(center, distance(&center, point))
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The four axis-aligned extreme points, counter-clockwise from +x.
    fn quadrant_points(&self) -> [Point2; 4] {
        let c = self.center;
        let r = self.radius;
        [
            Point2::new(c.x + r, c.y),
            Point2::new(c.x, c.y + r),
            Point2::new(c.x - r, c.y),
            Point2::new(c.x, c.y - r),
        ]
    }
}

impl Element for Circle {
    fn contains(&self, point: &Point2) -> bool {
        (distance(point, &self.center) - self.radius).abs() <= TOLERANCE
    }

    fn bounding_rectangle(&self) -> Rectangle {
        let c = self.center;
        let r = self.radius;
        Rectangle::new(c.x - r, c.y + r, c.x + r, c.y - r)
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        let center = ReferencePoint::new(ReferenceKind::Circle, self.center);
        let quadrants = self
            .quadrant_points()
            .map(|p| ReferencePoint::new(ReferenceKind::Square, p));
        filter_inside(area, std::iter::once(center).chain(quadrants))
    }

    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        let radius = self.radius + distance;
        if radius <= TOLERANCE {
            return Err(OperationError::IllegalAction(format!(
                "offset {distance} collapses a circle of radius {}",
                self.radius
            ))
            .into());
        }
        Ok(Curve::Circle(Self {
            center: self.center,
            radius,
        }))
    }

    fn nearest_extreme_point(&self, _point: &Point2) -> Option<Point2> {
        None
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        distance(&self.center, point) > self.radius
    }

    fn translate(&mut self, vector: &Vector2) {
        self.center += vector;
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        self.center = mirror_point(&self.center, a, b)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit() -> Circle {
        Circle::new(Point2::origin(), 1.0).unwrap()
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::new(Point2::origin(), 0.0).unwrap_err().is_invalid_argument());
        assert!(Circle::through(Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0)).is_err());
    }

    #[test]
    fn contains_points_on_circle() {
        let c = unit();
        assert!(c.contains(&Point2::new(0.0, -1.0)));
        assert!(c.contains(&Point2::new(0.6, 0.8)));
        assert!(!c.contains(&Point2::new(0.5, 0.5)));
    }

    #[test]
    fn bounding_rectangle() {
        let c = Circle::new(Point2::new(1.0, 2.0), 3.0).unwrap();
        assert_eq!(c.bounding_rectangle(), Rectangle::new(-2.0, 5.0, 4.0, -1.0));
    }

    #[test]
    fn reference_points_in_area() {
        let c = unit();
        let refs = c.reference_points(Some(&Rectangle::new(-0.5, -0.5, 1.5, 0.5)));
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].kind, ReferenceKind::Circle);
        assert_eq!(refs[1].point, Point2::new(1.0, 0.0));
    }

    #[test]
    fn offset_changes_radius() {
        let c = unit();
        let Curve::Circle(out) = c.clone_with_distance(0.5).unwrap() else {
            panic!("expected circle");
        };
        assert!((out.radius() - 1.5).abs() < TOLERANCE);
        assert!(c.clone_with_distance(-1.0).unwrap_err().is_illegal_action());
        assert!(c.clone_with_distance(-2.0).unwrap_err().is_illegal_action());
    }

    #[test]
    fn positive_direction_is_outside() {
        let c = unit();
        assert!(c.is_positive_direction(&Point2::new(2.0, 0.0)));
        assert!(!c.is_positive_direction(&Point2::new(0.1, 0.0)));
        assert_eq!(c.nearest_extreme_point(&Point2::new(2.0, 0.0)), None);
    }
}
