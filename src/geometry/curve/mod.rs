mod arc;
mod circle;
mod ellipse;
mod infinite_line;
mod line;
mod polyline;

pub use arc::{Arc, ArcEnd, ArcPoint};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use infinite_line::InfiniteLine;
pub use line::Line;
pub use polyline::Polyline;

use super::ReferencePoint;
use crate::error::Result;
use crate::math::{Point2, Rectangle, Vector2};

/// Capabilities shared by every drafting curve.
pub trait Element {
    /// Returns whether `point` lies on the bounded curve within tolerance.
    fn contains(&self, point: &Point2) -> bool;

    /// Axis-aligned box around the bounded curve.
    fn bounding_rectangle(&self) -> Rectangle;

    /// Snap targets inside `area`. An absent area yields no targets.
    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint>;

    /// Builds the parallel curve at signed `distance`.
    ///
    /// # Errors
    ///
    /// Returns `IllegalAction` when the curve would collapse or invert.
    fn clone_with_distance(&self, distance: f64) -> Result<Curve>;

    /// The endpoint closest to `point`, or `None` for closed or unbounded
    /// curves.
    fn nearest_extreme_point(&self, point: &Point2) -> Option<Point2>;

    /// Whether `point` selects the positive offset side.
    fn is_positive_direction(&self, point: &Point2) -> bool;

    /// Moves the whole curve by `vector`.
    fn translate(&mut self, vector: &Vector2);

    /// Reflects the curve across the line through `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `a` and `b` coincide; the curve is
    /// left untouched.
    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()>;
}

/// Discriminant of [`Curve`], used to key intersection strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CurveKind {
    Arc,
    Circle,
    Ellipse,
    InfiniteLine,
    Line,
    Polyline,
}

/// Any drafting curve.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Arc(Arc),
    Circle(Circle),
    Ellipse(Ellipse),
    InfiniteLine(InfiniteLine),
    Line(Line),
    Polyline(Polyline),
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match $self {
            Curve::Arc($c) => $body,
            Curve::Circle($c) => $body,
            Curve::Ellipse($c) => $body,
            Curve::InfiniteLine($c) => $body,
            Curve::Line($c) => $body,
            Curve::Polyline($c) => $body,
        }
    };
}

impl Curve {
    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::Arc(_) => CurveKind::Arc,
            Self::Circle(_) => CurveKind::Circle,
            Self::Ellipse(_) => CurveKind::Ellipse,
            Self::InfiniteLine(_) => CurveKind::InfiniteLine,
            Self::Line(_) => CurveKind::Line,
            Self::Polyline(_) => CurveKind::Polyline,
        }
    }

    /// Start and end points of open, bounded curves.
    #[must_use]
    pub fn endpoints(&self) -> Option<(Point2, Point2)> {
        match self {
            Self::Arc(arc) => Some((*arc.initial_point(), *arc.ending_point())),
            Self::Line(line) => Some((*line.initial_point(), *line.ending_point())),
            Self::Polyline(pl) => Some((*pl.first_point(), *pl.last_point())),
            Self::Circle(_) | Self::Ellipse(_) | Self::InfiniteLine(_) => None,
        }
    }
}

impl Element for Curve {
    fn contains(&self, point: &Point2) -> bool {
        dispatch!(self, c => c.contains(point))
    }

    fn bounding_rectangle(&self) -> Rectangle {
        dispatch!(self, c => c.bounding_rectangle())
    }

    fn reference_points(&self, area: Option<&Rectangle>) -> Vec<ReferencePoint> {
        dispatch!(self, c => c.reference_points(area))
    }

    fn clone_with_distance(&self, distance: f64) -> Result<Curve> {
        dispatch!(self, c => c.clone_with_distance(distance))
    }

    fn nearest_extreme_point(&self, point: &Point2) -> Option<Point2> {
        dispatch!(self, c => c.nearest_extreme_point(point))
    }

    fn is_positive_direction(&self, point: &Point2) -> bool {
        dispatch!(self, c => c.is_positive_direction(point))
    }

    fn translate(&mut self, vector: &Vector2) {
        dispatch!(self, c => c.translate(vector));
    }

    fn mirror(&mut self, a: &Point2, b: &Point2) -> Result<()> {
        dispatch!(self, c => c.mirror(a, b))
    }
}

impl From<Arc> for Curve {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Circle> for Curve {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Ellipse> for Curve {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl From<InfiniteLine> for Curve {
    fn from(line: InfiniteLine) -> Self {
        Self::InfiniteLine(line)
    }
}

impl From<Line> for Curve {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Polyline> for Curve {
    fn from(polyline: Polyline) -> Self {
        Self::Polyline(polyline)
    }
}

/// Point-only helper shared by the nearest-extreme implementations.
///
/// Ties go to `initial`.
pub(crate) fn nearer_of(point: &Point2, initial: &Point2, ending: &Point2) -> Point2 {
    if (point - ending).norm() < (point - initial).norm() {
        *ending
    } else {
        *initial
    }
}
