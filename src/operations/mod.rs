//! Store-level operations, each a small struct built with `new(..)` and run
//! with `execute(..)` against a [`Drawing`](crate::document::Drawing).
pub mod creation;
pub mod modification;
pub mod offset;
pub mod query;
pub mod transform;
