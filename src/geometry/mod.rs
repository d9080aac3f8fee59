mod comparable_point;
pub mod curve;
mod reference_point;

pub use comparable_point::ComparablePoint;
pub use curve::{Arc, ArcEnd, ArcPoint, Circle, Curve, CurveKind, Element, Ellipse, InfiniteLine, Line, Polyline};
pub use reference_point::{ReferenceKind, ReferencePoint};
