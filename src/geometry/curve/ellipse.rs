use super::{Curve, Element};
use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::reference_point::filter_inside;
use crate::geometry::{ReferenceKind, ReferencePoint};
use crate::math::geometrics::{distance, mirror_point, normalize};
use crate::math::{Point2, Rectangle, Vector2, TOLERANCE};

/// A full ellipse, possibly rotated.
///
/// Defined by its center and the endpoints of two perpendicular semi-axes.
/// `P(t) = center + a * cos(t) * axis + b * sin(t) * perp(axis)` where
/// `axis` points from the center to the first axis point.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point2,
    first_axis_point: Point2,
    second_axis_point: Point2,
}

impl Ellipse {
    /// Creates a new ellipse from its center and one endpoint of each axis.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if an axis point coincides with the center
    /// or the two axes are not perpendicular.
    pub fn new(center: Point2, first_axis_point: Point2, second_axis_point: Point2) -> Result<Self> {
        let u = first_axis_point - center;
        let v = second_axis_point - center;
        if u.norm() < TOLERANCE || v.norm() < TOLERANCE {
            return Err(GeometryError::InvalidArgument("ellipse axis has zero length".into()).into());
        }
        if (u.dot(&v) / (u.norm() * v.norm())).abs() > TOLERANCE {
            return Err(
                GeometryError::InvalidArgument("ellipse axes must be perpendicular".into()).into(),
            );
        }
        Ok(Self {
            center,
            first_axis_point,
            second_axis_point,
        })
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn first_axis_point(&self) -> &Point2 {
        &self.first_axis_point
    }

    #[must_use]
    pub fn second_axis_point(&self) -> &Point2 {
        &self.second_axis_point
    }

    /// Semi-axis length along the first axis.
    #[must_use]
    pub fn first_semi_axis(&self) -> f64 {
        distance(&self.center, &self.first_axis_point)
    }

    /// Semi-axis length along the second axis.
    #[must_use]
    pub fn second_semi_axis(&self) -> f64 {
        distance(&self.center, &self.second_axis_point)
    }

    /// Unit direction of the first axis.
    #[must_use]
    pub fn axis_direction(&self) -> Vector2 {
        (self.first_axis_point - self.center) / self.first_semi_axis()
    }

    /// Rotation of the first axis from +x, in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        let d = self.axis_direction();
        d.y.atan2(d.x)
    }

    /// Coordinates of `point` in the frame where the ellipse is the unit circle.
    fn to_unit_frame(&self, point: &Point2) -> Vector2 {
        let axis = self.axis_direction();
        let perp = Vector2::new(-axis.y, axis.x);
        let v = point - self.center;
        Vector2::new(
            v.dot(&axis) / self.first_semi_axis(),
            v.dot(&perp) / self.second_semi_axis(),
        )
    }

    fn axis_points(&self) -> [Point2; 4] {
        let u = self.first_axis_point - self.center;
        let v = self.second_axis_point - self.center;
        [
            self.first_axis_point,
            self.second_axis_point,
            self.center - u,
            self.center - v,
        ]
    }
}

impl Element for Ellipse {
    fn contains(&self, point: &Point2) -> bool {
        let scaled = self.to_unit_frame(point).norm();
        let smallest = self.first_semi_axis().min(self.second_semi_axis());
        (scaled - 1.0).abs() * smallest <= TOLERANCE
    }

    fn bounding_rectangle(&self) -> Rectangle {
        let a = self.first_semi_axis();
        let b = self.second_semi_axis();
        let (sin, cos) = self.rotation().sin_cos();
        let half_width = (a * a * cos * cos + b * b * sin * sin).sqrt();
        let half_height = (a * a * sin * sin + b * b * cos * cos).sqrt();
        let c = self.center;
        Rectangle::new(
            c.x - half_width,
            c.y + half_height,
            c.x + half_width,
            c.y - half_height,
        )
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        let center = ReferencePoint::new(ReferenceKind::Circle, self.center);
        let extremes = self
            .axis_points()
            .map(|p| ReferencePoint::new(ReferenceKind::Square, p));
        filter_inside(area, std::iter::once(center).chain(extremes))
    }

    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        let a = self.first_semi_axis() + distance;
        let b = self.second_semi_axis() + distance;
        if a <= TOLERANCE || b <= TOLERANCE {
            return Err(OperationError::IllegalAction(format!(
                "offset {distance} collapses the ellipse"
            ))
            .into());
        }
        let grow = |p: &Point2, len: f64| -> Result<Point2> {
            Ok(self.center + normalize(&(p - self.center))? * len)
        };
        let ellipse = Self::new(
            self.center,
            grow(&self.first_axis_point, a)?,
            grow(&self.second_axis_point, b)?,
        )?;
        Ok(Curve::Ellipse(ellipse))
    }

    fn nearest_extreme_point(&self, _point: &Point2) -> Option<Point2> {
        None
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        self.to_unit_frame(point).norm() > 1.0
    }

    fn translate(&mut self, vector: &Vector2) {
        self.center += vector;
        self.first_axis_point += vector;
        self.second_axis_point += vector;
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        let center = mirror_point(&self.center, a, b)?;
        let first = mirror_point(&self.first_axis_point, a, b)?;
        let second = mirror_point(&self.second_axis_point, a, b)?;
        self.center = center;
        self.first_axis_point = first;
        self.second_axis_point = second;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_6;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    /// Semi-axes 3 and 2 centered at (-4, 2), rotated by 30 degrees.
    fn rotated() -> Ellipse {
        Ellipse::new(
            p(-4.0, 2.0),
            p(-1.401_923_788_646_684, 3.5),
            p(-5.0, 3.732_050_807_568_877),
        )
        .unwrap()
    }

    #[test]
    fn axis_lengths_and_rotation() {
        let e = rotated();
        assert_abs_diff_eq!(e.first_semi_axis(), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.second_semi_axis(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.rotation(), FRAC_PI_6, epsilon = 1e-12);
    }

    #[test]
    fn rejects_degenerate_axes() {
        assert!(Ellipse::new(p(0.0, 0.0), p(0.0, 0.0), p(0.0, 1.0))
            .unwrap_err()
            .is_invalid_argument());
        assert!(Ellipse::new(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.0))
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn contains_axis_extremes() {
        let e = rotated();
        for q in e.axis_points() {
            assert!(e.contains(&q), "{q:?}");
        }
        assert!(!e.contains(e.center()));
    }

    #[test]
    fn bounding_rectangle_of_axis_aligned() {
        let e = Ellipse::new(p(0.0, 0.0), p(2.0, 0.0), p(0.0, 1.0)).unwrap();
        let r = e.bounding_rectangle();
        assert_abs_diff_eq!(r.left, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.right, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.top, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.bottom, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_grows_both_axes() {
        let e = rotated();
        let Curve::Ellipse(out) = e.clone_with_distance(1.0).unwrap() else {
            panic!("expected ellipse");
        };
        assert_abs_diff_eq!(out.first_semi_axis(), 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out.second_semi_axis(), 3.0, epsilon = 1e-9);
        assert!(e.clone_with_distance(-2.5).unwrap_err().is_illegal_action());
    }

    #[test]
    fn positive_direction_is_outside() {
        let e = rotated();
        assert!(!e.is_positive_direction(&p(-4.0, 2.5)));
        assert!(e.is_positive_direction(&p(10.0, 2.0)));
    }
}
