//! Pluggable pairwise intersection strategies.
//!
//! Strategies compute intersections of the unbounded curves underlying two
//! drafting curves: the full circle of an arc, the supporting line of a
//! segment. [`proper_intersections`] restricts them to bounded extents.
mod strategies;

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::geometry::{Curve, CurveKind, Element};
use crate::math::geometrics::points_equal;
use crate::math::Point2;

/// Computes the intersections of two curves of a fixed kind pair.
pub trait Intersector {
    /// Returns 0, 1 (tangency) or 2 points per underlying curve pair.
    ///
    /// `registry` is available to strategies that decompose a curve and
    /// delegate the pieces.
    fn intersections(
        &self,
        registry: &IntersectionRegistry,
        first: &Curve,
        second: &Curve,
    ) -> Vec<Point2>;
}

/// Strategy table keyed by the ordered pair of curve kinds.
///
/// Lookup is symmetric: a strategy registered for `(A, B)` also serves
/// `(B, A)` with its arguments swapped.
pub struct IntersectionRegistry {
    strategies: HashMap<(CurveKind, CurveKind), Box<dyn Intersector>>,
}

impl IntersectionRegistry {
    /// Creates a registry with no strategies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// Installs `strategy` for the pair, replacing any previous one.
    pub fn register(
        &mut self,
        first: CurveKind,
        second: CurveKind,
        strategy: impl Intersector + 'static,
    ) {
        self.strategies.insert((first, second), Box::new(strategy));
    }

    /// Removes the strategy registered for exactly this ordered pair.
    /// Returns whether one was present.
    pub fn unregister(&mut self, first: CurveKind, second: CurveKind) -> bool {
        self.strategies.remove(&(first, second)).is_some()
    }

    /// Returns whether a strategy serves the pair in either order.
    #[must_use]
    pub fn supports(&self, first: CurveKind, second: CurveKind) -> bool {
        self.strategies.contains_key(&(first, second))
            || self.strategies.contains_key(&(second, first))
    }

    /// Intersects the unbounded curves underlying `first` and `second`.
    ///
    /// Returns an empty vector when no strategy handles the pair.
    #[must_use]
    pub fn intersect(&self, first: &Curve, second: &Curve) -> Vec<Point2> {
        let (a, b) = (first.kind(), second.kind());
        if let Some(strategy) = self.strategies.get(&(a, b)) {
            strategy.intersections(self, first, second)
        } else if let Some(strategy) = self.strategies.get(&(b, a)) {
            strategy.intersections(self, second, first)
        } else {
            trace!(?a, ?b, "no intersection strategy");
            Vec::new()
        }
    }
}

impl Default for IntersectionRegistry {
    /// A registry with every built-in strategy.
    fn default() -> Self {
        use strategies::{CircleCircle, CircleLine, EllipseLine, LineLine, PolylineAny};
        use CurveKind::{Arc, Circle, Ellipse, InfiniteLine, Line, Polyline};

        let mut registry = Self::new();
        for (a, b) in [(Line, Line), (Line, InfiniteLine), (InfiniteLine, InfiniteLine)] {
            registry.register(a, b, LineLine);
        }
        for circle_like in [Arc, Circle] {
            for line_like in [Line, InfiniteLine] {
                registry.register(circle_like, line_like, CircleLine);
            }
        }
        for (a, b) in [(Arc, Arc), (Arc, Circle), (Circle, Circle)] {
            registry.register(a, b, CircleCircle);
        }
        for line_like in [Line, InfiniteLine] {
            registry.register(Ellipse, line_like, EllipseLine);
        }
        for other in [Arc, Circle, Ellipse, InfiniteLine, Line, Polyline] {
            registry.register(Polyline, other, PolylineAny);
        }
        registry
    }
}

impl fmt::Debug for IntersectionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<_> = self.strategies.keys().collect();
        pairs.sort();
        f.debug_struct("IntersectionRegistry")
            .field("pairs", &pairs)
            .finish()
    }
}

/// Intersections of `target` with every reference that lie on both bounded
/// curves, excluding the target's own endpoints.
#[must_use]
pub fn proper_intersections(
    registry: &IntersectionRegistry,
    target: &Curve,
    references: &[&Curve],
) -> Vec<Point2> {
    let endpoints = target.endpoints();
    let is_endpoint = |p: &Point2| {
        endpoints.is_some_and(|(initial, ending)| {
            points_equal(p, &initial) || points_equal(p, &ending)
        })
    };
    references
        .iter()
        .flat_map(|reference| {
            registry
                .intersect(target, reference)
                .into_iter()
                .filter(move |p| target.contains(p) && reference.contains(p))
        })
        .filter(|p| !is_endpoint(p))
        .collect()
}
