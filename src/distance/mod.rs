//! Distance oracle.
//!
//! Provides the read-only dense cost table shared by every tour.

mod matrix;

pub use matrix::{Cost, DistanceMatrix};
