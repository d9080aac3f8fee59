mod construct;

pub use construct::{ConstructCurve, CurveTemplate};
