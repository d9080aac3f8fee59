use std::collections::HashMap;

use tracing::debug;

use crate::document::{CurveData, CurveId, Drawing};
use crate::error::Result;
use crate::geometry::{Curve, Element};
use crate::math::Point2;

/// Base distance used until the user picks one.
pub const DEFAULT_OFFSET_DISTANCE: f64 = 100.0;

/// Side of a curve an offset goes to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OffsetDirection {
    Positive,
    Negative,
    /// The side `point` lies on.
    Toward(Point2),
}

impl OffsetDirection {
    fn is_positive(self, curve: &Curve) -> bool {
        match self {
            Self::Positive => true,
            Self::Negative => false,
            Self::Toward(point) => curve.is_positive_direction(&point),
        }
    }
}

/// How many times a curve has been offset to each side in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetCounts {
    pub positive: u32,
    pub negative: u32,
}

impl OffsetCounts {
    fn side_mut(&mut self, positive: bool) -> &mut u32 {
        if positive {
            &mut self.positive
        } else {
            &mut self.negative
        }
    }
}

/// Repeated offsetting of a selection.
///
/// Each curve keeps independent counters per side. The `n`-th offset of a
/// curve to one side lands at `n` times the base distance from the
/// original, so offsetting again repeats the spacing without asking for a
/// distance.
#[derive(Debug)]
pub struct OffsetSession {
    distance: f64,
    counts: HashMap<CurveId, OffsetCounts>,
}

impl Default for OffsetSession {
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetSession {
    /// Creates a session with [`DEFAULT_OFFSET_DISTANCE`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            distance: DEFAULT_OFFSET_DISTANCE,
            counts: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Counters recorded for `curve`; zero if it was never offset.
    #[must_use]
    pub fn counts(&self, curve: CurveId) -> OffsetCounts {
        self.counts.get(&curve).copied().unwrap_or_default()
    }

    /// Forgets every counter, starting a new selection.
    pub fn reset(&mut self) {
        self.counts.clear();
    }

    /// Offsets each selected curve once more to the requested side.
    ///
    /// Returns one result per selected curve, in order. A failing curve
    /// keeps its previous counters; the others are unaffected.
    pub fn apply(
        &mut self,
        drawing: &mut Drawing,
        selection: &[(CurveId, OffsetDirection)],
    ) -> Vec<Result<CurveId>> {
        selection
            .iter()
            .map(|&(curve, direction)| self.apply_one(drawing, curve, direction))
            .collect()
    }

    /// The curves [`OffsetSession::apply`] would add, without touching the
    /// counters or the drawing.
    #[must_use]
    pub fn preview(
        &self,
        drawing: &Drawing,
        selection: &[(CurveId, OffsetDirection)],
    ) -> Vec<Result<Curve>> {
        selection
            .iter()
            .map(|&(id, direction)| {
                let curve = drawing.curve(id)?;
                let positive = direction.is_positive(curve);
                let mut counts = self.counts(id);
                let count = counts.side_mut(positive);
                *count += 1;
                curve.clone_with_distance(signed_distance(self.distance, *count, positive))
            })
            .collect()
    }

    fn apply_one(
        &mut self,
        drawing: &mut Drawing,
        id: CurveId,
        direction: OffsetDirection,
    ) -> Result<CurveId> {
        let data = drawing.get(id)?;
        let positive = direction.is_positive(&data.curve);
        let count = self.counts.entry(id).or_default().side_mut(positive);
        *count += 1;

        match data
            .curve
            .clone_with_distance(signed_distance(self.distance, *count, positive))
        {
            Ok(curve) => {
                let copy = CurveData::new(curve).on_layer(data.layer.clone());
                Ok(drawing.add(copy))
            }
            Err(err) => {
                *count -= 1;
                debug!(curve = ?id, positive, %err, "offset rolled back");
                Err(err)
            }
        }
    }
}

fn signed_distance(base: f64, count: u32, positive: bool) -> f64 {
    let distance = f64::from(count) * base;
    if positive {
        distance
    } else {
        -distance
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Arc, Circle, Line};
    use crate::test_support::{init_tracing, p};
    use approx::assert_abs_diff_eq;

    fn radius_of(drawing: &Drawing, id: CurveId) -> f64 {
        match drawing.curve(id).unwrap() {
            Curve::Arc(arc) => arc.radius(),
            Curve::Circle(circle) => circle.radius(),
            other => panic!("expected a round curve, got {other:?}"),
        }
    }

    fn arc_of_radius(radius: f64) -> Arc {
        Arc::from_three_points(p(radius, 0.0), p(0.0, radius), p(-radius, 0.0)).unwrap()
    }

    #[test]
    fn repeated_offsets_accumulate() {
        let mut drawing = Drawing::new();
        let arc = drawing.add(CurveData::new(arc_of_radius(2.0)));
        let mut session = OffsetSession::new().with_distance(1.0);

        let first = session.apply(&mut drawing, &[(arc, OffsetDirection::Positive)]);
        let second = session.apply(&mut drawing, &[(arc, OffsetDirection::Positive)]);
        assert_abs_diff_eq!(radius_of(&drawing, *first[0].as_ref().unwrap()), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(radius_of(&drawing, *second[0].as_ref().unwrap()), 4.0, epsilon = 1e-9);
        assert_eq!(session.counts(arc), OffsetCounts { positive: 2, negative: 0 });

        // The other side counts on its own.
        let inward = session.apply(&mut drawing, &[(arc, OffsetDirection::Negative)]);
        assert_abs_diff_eq!(radius_of(&drawing, *inward[0].as_ref().unwrap()), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn failure_rolls_back_only_that_curve() {
        init_tracing();
        let mut drawing = Drawing::new();
        let small = drawing.add(CurveData::new(arc_of_radius(2.0)));
        let big = drawing.add(CurveData::new(Circle::new(p(10.0, 0.0), 5.0).unwrap()));
        let original = drawing.curve(small).unwrap().clone();
        let mut session = OffsetSession::new().with_distance(3.0);

        let results = session.apply(
            &mut drawing,
            &[
                (small, OffsetDirection::Negative),
                (big, OffsetDirection::Negative),
            ],
        );
        assert!(results[0].as_ref().unwrap_err().is_illegal_action());
        let shrunk = *results[1].as_ref().unwrap();
        assert_abs_diff_eq!(radius_of(&drawing, shrunk), 2.0, epsilon = 1e-9);

        assert_eq!(session.counts(small), OffsetCounts::default());
        assert_eq!(session.counts(big), OffsetCounts { positive: 0, negative: 1 });
        assert_eq!(drawing.curve(small).unwrap(), &original);
        assert_eq!(drawing.len(), 3);
    }

    #[test]
    fn direction_from_point() {
        let mut drawing = Drawing::new();
        let line = drawing.add(CurveData::new(Line::new(p(0.0, 0.0), p(4.0, 0.0)).unwrap()));
        let mut session = OffsetSession::new().with_distance(2.0);
        let below = session.apply(&mut drawing, &[(line, OffsetDirection::Toward(p(1.0, -5.0)))]);
        let expected: Curve = Line::new(p(0.0, -2.0), p(4.0, -2.0)).unwrap().into();
        assert_eq!(drawing.curve(*below[0].as_ref().unwrap()).unwrap(), &expected);
        assert_eq!(session.counts(line).negative, 1);
    }

    #[test]
    fn preview_and_reset_leave_no_trace() {
        let mut drawing = Drawing::new();
        let arc = drawing.add(CurveData::new(arc_of_radius(2.0)));
        let mut session = OffsetSession::new();
        assert_abs_diff_eq!(session.distance(), DEFAULT_OFFSET_DISTANCE);
        session.set_distance(0.5);

        let preview = session.preview(&drawing, &[(arc, OffsetDirection::Positive)]);
        let Ok(Curve::Arc(next)) = &preview[0] else {
            panic!("expected arc preview");
        };
        assert_abs_diff_eq!(next.radius(), 2.5, epsilon = 1e-9);
        assert_eq!(session.counts(arc), OffsetCounts::default());
        assert_eq!(drawing.len(), 1);

        let _ = session.apply(&mut drawing, &[(arc, OffsetDirection::Positive)]);
        session.reset();
        assert_eq!(session.counts(arc), OffsetCounts::default());
    }

    #[test]
    fn missing_curve_is_reported() {
        let mut drawing = Drawing::new();
        let gone = drawing.add(CurveData::new(arc_of_radius(1.0)));
        drawing.remove(gone).unwrap();
        let mut session = OffsetSession::new();
        let results = session.apply(&mut drawing, &[(gone, OffsetDirection::Positive)]);
        assert!(results[0].as_ref().unwrap_err().is_null_argument());
    }
}
