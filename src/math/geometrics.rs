//! Scalar helpers shared by every curve: distances, angles, orientation
//! and circumcenters.
use std::f64::consts::TAU;

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Returns whether two points coincide within [`TOLERANCE`].
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    distance(a, b) <= TOLERANCE
}

/// Angle of `p` around `center`, in `[0, 2π)`.
#[must_use]
pub fn angle(center: &Point2, p: &Point2) -> f64 {
    let a = (p.y - center.y).atan2(p.x - center.x);
    if a < 0.0 {
        // -0.0 and tiny negatives must not wrap to exactly 2π.
        let wrapped = a + TAU;
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    } else {
        a
    }
}

/// Counter-clockwise sweep around `center` from `from` to `to`, in `[0, 2π)`.
#[must_use]
pub fn relative_angle(center: &Point2, from: &Point2, to: &Point2) -> f64 {
    let sweep = angle(center, to) - angle(center, from);
    if sweep < 0.0 {
        sweep + TAU
    } else {
        sweep
    }
}

/// Twice the signed area of triangle `a`-`b`-`c`.
///
/// Positive when `c` lies left of the directed line `a -> b`.
#[must_use]
pub fn determinant(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Center of the circle through three points.
///
/// # Errors
///
/// Returns `InvalidArgument` if the points are collinear.
pub fn circumcenter(a: &Point2, b: &Point2, c: &Point2) -> Result<Point2> {
    let det = determinant(a, b, c);
    if det.abs() <= TOLERANCE {
        return Err(GeometryError::InvalidArgument("circumcenter of collinear points".into()).into());
    }
    let d = 2.0 * det;
    let a2 = a.coords.norm_squared();
    let b2 = b.coords.norm_squared();
    let c2 = c.coords.norm_squared();
    let ux = (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d;
    let uy = (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d;
    Ok(Point2::new(ux, uy))
}

/// Rotates `p` counter-clockwise around `center` by `theta` radians.
#[must_use]
pub fn rotate(p: &Point2, center: &Point2, theta: f64) -> Point2 {
    let (sin, cos) = theta.sin_cos();
    let v = p - center;
    Point2::new(
        center.x + v.x * cos - v.y * sin,
        center.y + v.x * sin + v.y * cos,
    )
}

/// Returns the unit vector along `v`.
///
/// # Errors
///
/// Returns `InvalidArgument` for a zero-length vector.
pub fn normalize(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if len <= TOLERANCE {
        return Err(GeometryError::InvalidArgument("zero-length vector".into()).into());
    }
    Ok(v / len)
}

/// Reflects `p` across the line through `a` and `b`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `a` and `b` coincide.
pub fn mirror_point(p: &Point2, a: &Point2, b: &Point2) -> Result<Point2> {
    let dir = normalize(&(b - a))?;
    let v = p - a;
    let along = dir * v.dot(&dir);
    let perp = v - along;
    Ok(a + along - perp)
}

/// Unit normal pointing left of the direction `a -> b`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `a` and `b` coincide.
pub fn left_normal(a: &Point2, b: &Point2) -> Result<Vector2> {
    let dir = normalize(&(b - a))?;
    Ok(Vector2::new(-dir.y, dir.x))
}
