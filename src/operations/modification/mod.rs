mod extend;
mod trim;

pub use extend::{extend_curve, Extend};
pub use trim::{trim_curve, Trim};
