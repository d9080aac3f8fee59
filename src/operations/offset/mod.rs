mod curve_offset_2d;
mod session;

pub use curve_offset_2d::Offset;
pub use session::{OffsetCounts, OffsetDirection, OffsetSession, DEFAULT_OFFSET_DISTANCE};
