//! Intersections of the unbounded curves underlying the drafting
//! primitives: infinite lines, full circles and full ellipses.
//!
//! Every function here ignores curve extents; callers restrict the result
//! with the bounded curves' containment tests.
use super::{Point2, Vector2, TOLERANCE};

/// Parametric line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_params(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    let scale = d1.norm() * d2.norm();
    if scale < TOLERANCE || cross.abs() <= TOLERANCE * scale {
        return None;
    }
    let w = p2 - p1;
    let t = w.perp(d2) / cross;
    let u = w.perp(d1) / cross;
    Some((t, u))
}

/// Intersection point of two infinite lines, each given by two points.
#[must_use]
pub fn line_line(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> Option<Point2> {
    let da = a1 - a0;
    let db = b1 - b0;
    line_line_params(a0, &da, b0, &db).map(|(t, _)| a0 + da * t)
}

/// Intersections of the infinite line through `l0`, `l1` with a full circle.
///
/// Returns one point when the line is tangent (its distance to the center
/// equals the radius within [`TOLERANCE`]).
#[must_use]
pub fn line_circle(l0: &Point2, l1: &Point2, center: &Point2, radius: f64) -> Vec<Point2> {
    let d = l1 - l0;
    let len = d.norm();
    if len < TOLERANCE || radius < TOLERANCE {
        return Vec::new();
    }
    let dir = d / len;

    // Foot of the perpendicular from the center onto the line.
    let along = (center - l0).dot(&dir);
    let foot = l0 + dir * along;
    let dist = (center - foot).norm();

    if (dist - radius).abs() <= TOLERANCE {
        return vec![foot];
    }
    if dist > radius {
        return Vec::new();
    }
    let half_chord = (radius * radius - dist * dist).sqrt();
    vec![foot - dir * half_chord, foot + dir * half_chord]
}

/// Intersections of two full circles.
///
/// Concentric circles yield no points, even when they coincide.
#[must_use]
pub fn circle_circle(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> Vec<Point2> {
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return Vec::new();
    }
    let delta = c2 - c1;
    let dist = delta.norm();
    if dist < TOLERANCE {
        return Vec::new();
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return Vec::new();
    }

    let unit = delta / dist;
    // Distance from c1 along c1->c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let mid = c1 + unit * a;

    if (dist - sum).abs() <= TOLERANCE || (dist - diff).abs() <= TOLERANCE {
        return vec![mid];
    }

    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let perp = Vector2::new(-unit.y, unit.x);
    vec![mid + perp * h, mid - perp * h]
}

/// Intersections of the infinite line through `l0`, `l1` with a full ellipse.
///
/// The ellipse has center `center`, semi-axis `a` along the unit direction
/// `axis` and semi-axis `b` along its left perpendicular. The line is mapped
/// into the frame where the ellipse is the unit circle and the quadratic in
/// the line parameter is solved there, so the result follows any rigid
/// motion applied to both curves.
#[must_use]
pub fn line_ellipse(
    l0: &Point2,
    l1: &Point2,
    center: &Point2,
    a: f64,
    b: f64,
    axis: &Vector2,
) -> Vec<Point2> {
    if a < TOLERANCE || b < TOLERANCE {
        return Vec::new();
    }
    let perp = Vector2::new(-axis.y, axis.x);
    let to_unit = |v: Vector2| Vector2::new(v.dot(axis) / a, v.dot(&perp) / b);

    let q = to_unit(l0 - center);
    let e = to_unit(l1 - l0);
    let len = e.norm();
    if len < TOLERANCE {
        return Vec::new();
    }
    let e = e / len;

    // |q + t e|^2 = 1 with |e| = 1.
    let half_b = q.dot(&e);
    let discriminant = half_b * half_b - (q.norm_squared() - 1.0);

    let back = |t: f64| {
        let u = q + e * t;
        center + axis * (u.x * a) + perp * (u.y * b)
    };

    if discriminant > TOLERANCE {
        let root = discriminant.sqrt();
        vec![back(-half_b - root), back(-half_b + root)]
    } else if discriminant >= -TOLERANCE {
        vec![back(-half_b)]
    } else {
        Vec::new()
    }
}
