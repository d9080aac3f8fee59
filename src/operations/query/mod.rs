mod bounding_box;
mod contains;
mod intersect;
pub(crate) mod nearest_intersection;
mod reference_points;

pub use bounding_box::BoundingRectangle;
pub use contains::Contains;
pub use intersect::{CurveCurveIntersect, ProperIntersections};
pub use nearest_intersection::{nearest_intersection, NearestIntersection};
pub use reference_points::ReferencePoints;
