use tracing::debug;

use crate::document::{CurveId, Drawing};
use crate::error::Result;
use crate::geometry::{Arc, Curve, Line, Polyline};
use crate::intersection::IntersectionRegistry;
use crate::math::geometrics::distance;
use crate::math::Point2;
use crate::operations::query::nearest_intersection::{
    circle_candidates, growing_end, growing_segment, nearest_beyond, polyline_growing_segment,
};

/// Grows a curve's endpoint nearest the click up to a reference.
pub struct Extend {
    curve: CurveId,
    references: Vec<CurveId>,
    click: Point2,
}

impl Extend {
    /// Creates a new `Extend` operation.
    #[must_use]
    pub fn new(curve: CurveId, references: Vec<CurveId>, click: Point2) -> Self {
        Self {
            curve,
            references,
            click,
        }
    }

    /// Executes the extension in place, returning whether the curve moved.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if any curve is not in the drawing.
    pub fn execute(&self, drawing: &mut Drawing, registry: &IntersectionRegistry) -> Result<bool> {
        let reference_ids: Vec<CurveId> = self
            .references
            .iter()
            .copied()
            .filter(|id| *id != self.curve)
            .collect();
        let references: Vec<Curve> = drawing
            .curves(&reference_ids)?
            .into_iter()
            .cloned()
            .collect();
        let references: Vec<&Curve> = references.iter().collect();
        let data = drawing.get_mut(self.curve)?;
        Ok(extend_curve(registry, &mut data.curve, &references, &self.click))
    }
}

/// Curve-level form of [`Extend`].
///
/// Closed and unbounded curves are never extended.
pub fn extend_curve(
    registry: &IntersectionRegistry,
    curve: &mut Curve,
    references: &[&Curve],
    click: &Point2,
) -> bool {
    let moved = match curve {
        Curve::Arc(arc) => extend_arc(registry, arc, references, click),
        Curve::Line(line) => extend_line(registry, line, references, click),
        Curve::Polyline(polyline) => extend_polyline(registry, polyline, references, click),
        Curve::Circle(_) | Curve::Ellipse(_) | Curve::InfiniteLine(_) => false,
    };
    if !moved {
        debug!(kind = ?curve.kind(), "no reference to extend to");
    }
    moved
}

/// Moves the arc endpoint nearest the click to the closest reference
/// intersection with its circle that the arc does not already cover.
fn extend_arc(
    registry: &IntersectionRegistry,
    arc: &mut Arc,
    references: &[&Curve],
    click: &Point2,
) -> bool {
    let end = growing_end(arc, click);
    let endpoint = *arc.endpoint(end);
    let target = circle_candidates(registry, arc, references)
        .into_iter()
        .min_by(|a, b| distance(a, &endpoint).total_cmp(&distance(b, &endpoint)));
    match target {
        Some(target) => {
            debug!(?end, x = target.x, y = target.y, "extending arc");
            arc.set_endpoint(end, target);
            true
        }
        None => false,
    }
}

fn extend_line(
    registry: &IntersectionRegistry,
    line: &mut Line,
    references: &[&Curve],
    click: &Point2,
) -> bool {
    let Some((segment, grows_ending)) = growing_segment(line, click) else {
        return false;
    };
    let Some(target) = nearest_beyond(registry, &segment, references) else {
        return false;
    };
    if grows_ending {
        line.set_ending_point(target);
    } else {
        line.set_initial_point(target);
    }
    true
}

fn extend_polyline(
    registry: &IntersectionRegistry,
    polyline: &mut Polyline,
    references: &[&Curve],
    click: &Point2,
) -> bool {
    let Some((segment, grows_last)) = polyline_growing_segment(polyline, click) else {
        return false;
    };
    let Some(target) = nearest_beyond(registry, &segment, references) else {
        return false;
    };
    if grows_last {
        polyline.set_last_point(target);
    } else {
        polyline.set_first_point(target);
    }
    true
}
