//! Built-in intersection strategies.
use super::{IntersectionRegistry, Intersector};
use crate::geometry::{Curve, Element};
use crate::math::geometrics::points_equal;
use crate::math::intersect_2d::{circle_circle, line_circle, line_ellipse, line_line};
use crate::math::Point2;

/// Supporting line of line-like curves.
fn supporting_line(curve: &Curve) -> Option<(Point2, Point2)> {
    match curve {
        Curve::Line(line) => Some((*line.initial_point(), *line.ending_point())),
        Curve::InfiniteLine(line) => Some((*line.first_point(), *line.second_point())),
        _ => None,
    }
}

/// Underlying full circle of circle-like curves.
fn underlying_circle(curve: &Curve) -> Option<(Point2, f64)> {
    match curve {
        Curve::Arc(arc) => Some((*arc.center(), arc.radius())),
        Curve::Circle(circle) => Some((*circle.center(), circle.radius())),
        _ => None,
    }
}

/// Line-like against line-like.
pub(super) struct LineLine;

impl Intersector for LineLine {
    fn intersections(&self, _: &IntersectionRegistry, first: &Curve, second: &Curve) -> Vec<Point2> {
        match (supporting_line(first), supporting_line(second)) {
            (Some((a0, a1)), Some((b0, b1))) => line_line(&a0, &a1, &b0, &b1).into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// Circle-like against line-like.
pub(super) struct CircleLine;

impl Intersector for CircleLine {
    fn intersections(&self, _: &IntersectionRegistry, first: &Curve, second: &Curve) -> Vec<Point2> {
        match (underlying_circle(first), supporting_line(second)) {
            (Some((center, radius)), Some((l0, l1))) => line_circle(&l0, &l1, &center, radius),
            _ => Vec::new(),
        }
    }
}

/// Circle-like against circle-like.
pub(super) struct CircleCircle;

impl Intersector for CircleCircle {
    fn intersections(&self, _: &IntersectionRegistry, first: &Curve, second: &Curve) -> Vec<Point2> {
        match (underlying_circle(first), underlying_circle(second)) {
            (Some((c1, r1)), Some((c2, r2))) => circle_circle(&c1, r1, &c2, r2),
            _ => Vec::new(),
        }
    }
}

/// Ellipse against line-like.
pub(super) struct EllipseLine;

impl Intersector for EllipseLine {
    fn intersections(&self, _: &IntersectionRegistry, first: &Curve, second: &Curve) -> Vec<Point2> {
        let (Curve::Ellipse(ellipse), Some((l0, l1))) = (first, supporting_line(second)) else {
            return Vec::new();
        };
        line_ellipse(
            &l0,
            &l1,
            ellipse.center(),
            ellipse.first_semi_axis(),
            ellipse.second_semi_axis(),
            &ellipse.axis_direction(),
        )
    }
}

/// Polyline against anything: every segment is intersected as a line and
/// only the points on that segment are kept.
pub(super) struct PolylineAny;

impl Intersector for PolylineAny {
    fn intersections(
        &self,
        registry: &IntersectionRegistry,
        first: &Curve,
        second: &Curve,
    ) -> Vec<Point2> {
        let Curve::Polyline(polyline) = first else {
            return Vec::new();
        };
        let mut points: Vec<Point2> = Vec::new();
        for segment in polyline.segments() {
            for p in registry.intersect(&Curve::Line(segment.clone()), second) {
                // Shared vertices are reported once.
                if segment.contains(&p) && !points.iter().any(|q| points_equal(q, &p)) {
                    points.push(p);
                }
            }
        }
        points
    }
}
