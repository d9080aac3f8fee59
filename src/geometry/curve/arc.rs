use tracing::debug;

use super::{nearer_of, Curve, Element};
use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::reference_point::filter_inside;
use crate::geometry::{ComparablePoint, ReferenceKind, ReferencePoint};
use crate::math::geometrics::{
    angle, circumcenter, determinant, distance, mirror_point, normalize, points_equal,
    relative_angle, rotate,
};
use crate::math::{Point2, Rectangle, Vector2, TOLERANCE};

/// Endpoint selector for an [`Arc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcEnd {
    Initial,
    Ending,
}

/// Grip points of an [`Arc`] that can be moved individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcPoint {
    Initial,
    Intermediate,
    Ending,
    Center,
}

/// A circular arc, always stored counter-clockwise.
///
/// Travelling counter-clockwise around `center` from `initial` passes
/// through `intermediate` and reaches `ending`. `intermediate` pins which
/// side of the `initial`-`ending` chord is covered; every constructor
/// places it at the angular midpoint.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point2,
    initial: Point2,
    intermediate: Point2,
    ending: Point2,
}

impl Arc {
    /// Builds the arc through three points, in whichever orientation they
    /// are given.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the points are collinear.
    pub fn from_three_points(initial: Point2, intermediate: Point2, ending: Point2) -> Result<Self> {
        let center = circumcenter(&initial, &intermediate, &ending)?;
        let initial_angle = angle(&center, &initial);
        let middle_angle = angle(&center, &intermediate);
        let ending_angle = angle(&center, &ending);

        let clockwise = (ending_angle > initial_angle
            && (middle_angle < initial_angle || middle_angle > ending_angle))
            || (initial_angle > ending_angle
                && ending_angle < middle_angle
                && middle_angle < initial_angle);

        let (initial, ending) = if clockwise {
            (ending, initial)
        } else {
            (initial, ending)
        };
        Ok(Self::with_midpoint(center, initial, ending))
    }

    /// Builds the arc around `center` from `initial` to `ending`, running
    /// counter-clockwise when `counterclockwise` is set and clockwise
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any two of the points coincide.
    pub fn from_center(
        initial: Point2,
        ending: Point2,
        center: Point2,
        counterclockwise: bool,
    ) -> Result<Self> {
        if points_equal(&initial, &ending)
            || points_equal(&initial, &center)
            || points_equal(&ending, &center)
        {
            return Err(GeometryError::InvalidArgument("arc points coincide".into()).into());
        }
        let (initial, ending) = if counterclockwise {
            (initial, ending)
        } else {
            (ending, initial)
        };
        Ok(Self::with_midpoint(center, initial, ending))
    }

    /// Builds the arc around `center` from `initial` to `ending` that
    /// sweeps towards `direction`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `initial`, `center` and `ending` are
    /// collinear while `initial` and `ending` are not equidistant from
    /// `center`.
    pub fn from_center_direction(
        initial: Point2,
        ending: Point2,
        center: Point2,
        direction: Point2,
    ) -> Result<Self> {
        if determinant(&initial, &center, &ending).abs() <= TOLERANCE {
            let initial_radius = distance(&initial, &center);
            let ending_radius = distance(&ending, &center);
            if (initial_radius - ending_radius).abs() > TOLERANCE {
                return Err(GeometryError::InvalidArgument(
                    "collinear arc points with different radii".into(),
                )
                .into());
            }
        }
        let arc_sweep = relative_angle(&center, &initial, &ending);
        let direction_sweep = relative_angle(&center, &initial, &direction);
        let (initial, ending) = if direction_sweep > arc_sweep {
            (ending, initial)
        } else {
            (initial, ending)
        };
        Ok(Self::with_midpoint(center, initial, ending))
    }

    fn with_midpoint(center: Point2, initial: Point2, ending: Point2) -> Self {
        let half_sweep = relative_angle(&center, &initial, &ending) / 2.0;
        Self {
            center,
            initial,
            intermediate: rotate(&initial, &center, half_sweep),
            ending,
        }
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    #[must_use]
    pub fn initial_point(&self) -> &Point2 {
        &self.initial
    }

    #[must_use]
    pub fn intermediate_point(&self) -> &Point2 {
        &self.intermediate
    }

    #[must_use]
    pub fn ending_point(&self) -> &Point2 {
        &self.ending
    }

    /// Returns the requested endpoint.
    #[must_use]
    pub fn endpoint(&self, end: ArcEnd) -> &Point2 {
        match end {
            ArcEnd::Initial => &self.initial,
            ArcEnd::Ending => &self.ending,
        }
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        distance(&self.center, &self.initial)
    }

    /// Counter-clockwise angle from the initial to the ending point.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        relative_angle(&self.center, &self.initial, &self.ending)
    }

    /// Position of `point` along the arc, increasing counter-clockwise.
    ///
    /// Points within the arc's angular span map to the angle swept from
    /// the initial point, so the initial point is `0` and the ending point
    /// is [`Arc::sweep`]. Points outside the span get negative keys that
    /// keep growing until the initial point is reached again. Points off
    /// the circle are placed by their direction from the center.
    #[must_use]
    pub fn arc_angle(&self, point: &Point2) -> f64 {
        let from_initial = relative_angle(&self.center, &self.initial, point);
        if from_initial <= self.sweep() + TOLERANCE {
            from_initial
        } else {
            relative_angle(&self.center, &self.ending, point)
                - relative_angle(&self.center, &self.ending, &self.initial)
        }
    }

    /// Orders `points` along the arc starting from `reference`.
    ///
    /// Points sharing a key collapse into the first one. Starting from the
    /// ending point walks the keys backwards.
    #[must_use]
    pub fn sorted_points(&self, reference: ArcEnd, points: &[Point2]) -> Vec<ComparablePoint> {
        let mut sorted: Vec<ComparablePoint> = points
            .iter()
            .map(|p| ComparablePoint::new(*p, self.arc_angle(p)))
            .collect();
        sorted.sort();
        sorted.dedup_by(|later, kept| (later.key - kept.key).abs() <= TOLERANCE);
        if reference == ArcEnd::Ending {
            sorted.reverse();
        }
        sorted
    }

    /// Moves the selected grip points by `vector`, re-deriving the arc from
    /// its initial, intermediate and ending points.
    ///
    /// A selection that includes [`ArcPoint::Center`] translates the whole
    /// arc rigidly and ignores the other selected grips; the arc is not
    /// re-derived in that case. If the moved points are collinear the arc
    /// is left exactly as it was and `false` is returned.
    pub fn move_points(&mut self, points: &[ArcPoint], vector: &Vector2) -> bool {
        if points.is_empty() {
            return false;
        }
        if points.contains(&ArcPoint::Center) {
            self.translate(vector);
            return true;
        }
        let shift = |p: &Point2, which: ArcPoint| {
            if points.contains(&which) {
                p + vector
            } else {
                *p
            }
        };
        let initial = shift(&self.initial, ArcPoint::Initial);
        let intermediate = shift(&self.intermediate, ArcPoint::Intermediate);
        let ending = shift(&self.ending, ArcPoint::Ending);
        match Self::from_three_points(initial, intermediate, ending) {
            Ok(moved) => {
                *self = moved;
                true
            }
            Err(err) => {
                debug!(%err, "arc move rolled back");
                false
            }
        }
    }

    /// Overwrites one endpoint without re-deriving the arc.
    ///
    /// `to` must lie on the arc's circle outside the current span, which
    /// keeps the intermediate point between the endpoints.
    pub(crate) fn set_endpoint(&mut self, end: ArcEnd, to: Point2) {
        match end {
            ArcEnd::Initial => self.initial = to,
            ArcEnd::Ending => self.ending = to,
        }
    }

    fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.contains(&Point2::new(x, y))
    }
}

impl PartialEq for Arc {
    /// Arcs are equal when they share the center, the same unordered pair
    /// of endpoints and cover the same side of the chord.
    fn eq(&self, other: &Self) -> bool {
        if !points_equal(&self.center, &other.center) {
            return false;
        }
        let same_ends = (points_equal(&self.initial, &other.initial)
            || points_equal(&self.initial, &other.ending))
            && (points_equal(&self.ending, &other.initial)
                || points_equal(&self.ending, &other.ending));
        if !same_ends {
            return false;
        }
        let own_side = determinant(&self.initial, &self.ending, &self.intermediate);
        let other_side = determinant(&self.initial, &self.ending, &other.intermediate);
        own_side * other_side >= 0.0
    }
}

impl Element for Arc {
    fn contains(&self, point: &Point2) -> bool {
        if (distance(point, &self.center) - self.radius()).abs() > TOLERANCE {
            return false;
        }
        let covered_side = determinant(&self.initial, &self.ending, &self.intermediate);
        let point_side = determinant(&self.initial, &self.ending, point);
        covered_side * point_side >= 0.0
    }

    fn bounding_rectangle(&self) -> Rectangle {
        let radius = self.radius();
        let (cx, cy) = (self.center.x, self.center.y);

        let mut right = self.initial.x.max(self.ending.x);
        let mut left = self.initial.x.min(self.ending.x);
        let mut top = self.initial.y.max(self.ending.y);
        let mut bottom = self.initial.y.min(self.ending.y);

        if self.contains_xy(cx + radius, cy) {
            right = cx + radius;
        }
        if self.contains_xy(cx - radius, cy) {
            left = cx - radius;
        }
        if self.contains_xy(cx, cy + radius) {
            top = cy + radius;
        }
        if self.contains_xy(cx, cy - radius) {
            bottom = cy - radius;
        }
        Rectangle::new(left, top, right, bottom)
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        filter_inside(
            area,
            [
                ReferencePoint::new(ReferenceKind::Square, self.initial),
                ReferencePoint::new(ReferenceKind::Square, self.ending),
                ReferencePoint::new(ReferenceKind::Circle, self.center),
                ReferencePoint::new(ReferenceKind::Triangle, self.intermediate),
            ],
        )
    }

    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        let radius = self.radius();
        if distance < 0.0 && distance.abs() > radius {
            return Err(OperationError::IllegalAction(format!(
                "offset {distance} inverts an arc of radius {radius}"
            ))
            .into());
        }
        let new_radius = radius + distance;
        if new_radius <= TOLERANCE * radius.max(1.0) {
            return Err(OperationError::IllegalAction(
                "offset collapses the arc onto its center".into(),
            )
            .into());
        }
        let project = |p: &Point2| -> Result<Point2> {
            Ok(self.center + normalize(&(p - self.center))? * new_radius)
        };
        let arc = Self::from_three_points(
            project(&self.initial)?,
            project(&self.intermediate)?,
            project(&self.ending)?,
        )
        .map_err(|err| {
            OperationError::IllegalAction(format!("offset {distance} degenerates the arc: {err}"))
        })?;
        Ok(Curve::Arc(arc))
    }

    fn nearest_extreme_point(&self, point: &Point2) -> Option<Point2> {
        Some(nearer_of(point, &self.initial, &self.ending))
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        distance(&self.center, point) > self.radius()
    }

    fn translate(&mut self, vector: &Vector2) {
        self.center += vector;
        self.initial += vector;
        self.intermediate += vector;
        self.ending += vector;
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        let center = mirror_point(&self.center, a, b)?;
        let initial = mirror_point(&self.initial, a, b)?;
        let intermediate = mirror_point(&self.intermediate, a, b)?;
        let ending = mirror_point(&self.ending, a, b)?;
        // Reflection reverses the sense of rotation.
        self.center = center;
        self.initial = ending;
        self.intermediate = intermediate;
        self.ending = initial;
        Ok(())
    }
}

impl std::fmt::Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) with radius {} from ({}, {}) to ({}, {})",
            self.center.x,
            self.center.y,
            self.radius(),
            self.initial.x,
            self.initial.y,
            self.ending.x,
            self.ending.y
        )
    }
}
