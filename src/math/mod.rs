pub mod geometrics;
pub mod intersect_2d;
mod rectangle;

pub use rectangle::Rectangle;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Constructors, containment tests and intersection solvers all compare
/// against this value so that a point accepted by one is accepted by the
/// others.
pub const TOLERANCE: f64 = 1e-10;
