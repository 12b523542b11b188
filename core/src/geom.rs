//! Basic geometric primitives.

pub use vector::{Vector, eq_or_empty};

pub mod vector;
