pub mod document;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod math;
pub mod operations;

#[cfg(test)]
mod test_support;

pub use error::{DraftlisError, Result};
