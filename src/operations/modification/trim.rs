use tracing::debug;

use crate::document::{CurveData, CurveId, Drawing};
use crate::error::Result;
use crate::geometry::{Arc, ArcEnd, Circle, ComparablePoint, Curve, Line};
use crate::intersection::{proper_intersections, IntersectionRegistry};
use crate::math::geometrics::relative_angle;
use crate::math::{Point2, TOLERANCE};

/// Cuts the part of a curve around a click out at its reference
/// intersections.
///
/// The curve is replaced by the remaining pieces, which inherit its layer.
/// When nothing is cut the drawing is left untouched.
pub struct Trim {
    curve: CurveId,
    references: Vec<CurveId>,
    click: Point2,
}

impl Trim {
    /// Creates a new `Trim` operation.
    #[must_use]
    pub fn new(curve: CurveId, references: Vec<CurveId>, click: Point2) -> Self {
        Self {
            curve,
            references,
            click,
        }
    }

    /// Executes the trim, returning the IDs of the pieces left in place of
    /// the curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveNotFound` if any curve is not in the drawing.
    pub fn execute(
        &self,
        drawing: &mut Drawing,
        registry: &IntersectionRegistry,
    ) -> Result<Vec<CurveId>> {
        let reference_ids: Vec<CurveId> = self
            .references
            .iter()
            .copied()
            .filter(|id| *id != self.curve)
            .collect();
        let data = drawing.get(self.curve)?;
        let references = drawing.curves(&reference_ids)?;
        let pieces = trim_curve(registry, &data.curve, &references, &self.click)?;
        if pieces.is_empty() {
            debug!(curve = ?self.curve, "nothing to trim");
            return Ok(Vec::new());
        }
        let layer = data.layer.clone();

        drawing.remove(self.curve)?;
        let ids = pieces
            .into_iter()
            .map(|curve| drawing.add(CurveData::new(curve).on_layer(layer.clone())))
            .collect::<Vec<_>>();
        debug!(curve = ?self.curve, pieces = ids.len(), "trimmed");
        Ok(ids)
    }
}

/// Curve-level form of [`Trim`]: the 0, 1 or 2 pieces left after cutting
/// out the part containing `click`.
///
/// Curves without a trim rule (ellipses, infinite lines, polylines) yield
/// nothing.
///
/// # Errors
///
/// Propagates construction errors of the pieces.
pub fn trim_curve(
    registry: &IntersectionRegistry,
    curve: &Curve,
    references: &[&Curve],
    click: &Point2,
) -> Result<Vec<Curve>> {
    match curve {
        Curve::Arc(arc) => trim_arc(registry, arc, references, click),
        Curve::Line(line) => trim_line(registry, line, references, click),
        Curve::Circle(circle) => trim_circle(registry, circle, references, click),
        Curve::Ellipse(_) | Curve::InfiniteLine(_) | Curve::Polyline(_) => {
            debug!(kind = ?curve.kind(), "trim not supported");
            Ok(Vec::new())
        }
    }
}

/// Last point keyed before `key` and first point keyed at or after it.
fn split_around(sorted: &[ComparablePoint], key: f64) -> (Option<Point2>, Option<Point2>) {
    let at = sorted.partition_point(|c| c.key < key);
    let before = at.checked_sub(1).and_then(|i| sorted.get(i)).map(|c| c.point);
    let after = sorted.get(at).map(|c| c.point);
    (before, after)
}

/// Keeps `[initial, before]` and `[after, ending]` around the click.
fn surviving_pieces<T>(
    initial: Point2,
    ending: Point2,
    before: Option<Point2>,
    after: Option<Point2>,
    build: impl Fn(Point2, Point2) -> Result<T>,
) -> Result<Vec<T>> {
    let mut pieces = Vec::with_capacity(2);
    if let Some(before) = before {
        pieces.push(build(initial, before)?);
    }
    if let Some(after) = after {
        pieces.push(build(after, ending)?);
    }
    Ok(pieces)
}

fn trim_arc(
    registry: &IntersectionRegistry,
    arc: &Arc,
    references: &[&Curve],
    click: &Point2,
) -> Result<Vec<Curve>> {
    let points = proper_intersections(registry, &Curve::Arc(arc.clone()), references);
    let sorted: Vec<ComparablePoint> = arc
        .sorted_points(ArcEnd::Initial, &points)
        .into_iter()
        .filter(|c| c.key >= 0.0)
        .collect();
    let (before, after) = split_around(&sorted, arc.arc_angle(click));
    let center = *arc.center();
    surviving_pieces(
        *arc.initial_point(),
        *arc.ending_point(),
        before,
        after,
        |from, to| Ok(Curve::Arc(Arc::from_center(from, to, center, true)?)),
    )
}

fn trim_line(
    registry: &IntersectionRegistry,
    line: &Line,
    references: &[&Curve],
    click: &Point2,
) -> Result<Vec<Curve>> {
    let points = proper_intersections(registry, &Curve::Line(line.clone()), references);
    let sorted = line.sorted_points(&points, false);
    let (before, after) = split_around(&sorted, line.parameter(click));
    surviving_pieces(
        *line.initial_point(),
        *line.ending_point(),
        before,
        after,
        |from, to| Ok(Curve::Line(Line::new(from, to)?)),
    )
}

/// Removes the span between the intersections on either side of the click,
/// leaving the arc from the one after the click round to the one before it.
fn trim_circle(
    registry: &IntersectionRegistry,
    circle: &Circle,
    references: &[&Curve],
    click: &Point2,
) -> Result<Vec<Curve>> {
    let center = *circle.center();
    let points = proper_intersections(registry, &Curve::Circle(circle.clone()), references);
    let mut sorted: Vec<ComparablePoint> = points
        .iter()
        .map(|p| ComparablePoint::new(*p, relative_angle(&center, click, p)))
        .collect();
    sorted.sort();
    sorted.dedup_by(|later, kept| (later.key - kept.key).abs() <= TOLERANCE);

    match (sorted.first(), sorted.last()) {
        (Some(after), Some(before)) if sorted.len() >= 2 => Ok(vec![Curve::Arc(
            Arc::from_center(after.point, before.point, center, true)?,
        )]),
        _ => Ok(Vec::new()),
    }
}
