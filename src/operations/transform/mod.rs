mod mirror;
mod move_points;
mod translate;

pub use mirror::Mirror;
pub use move_points::MovePoints;
pub use translate::Translate;
