//! Constructive heuristics for building initial tours.
//!
//! - [`random_assignment`]: Shuffle the cities and deal each to a random salesman, O(n)
//! - [`nearest_neighbor`]: Nearest-hub clustering, then a greedy chain per depot, O(n²)
//!
//! Both return a [`TourState`](crate::models::TourState) that satisfies the
//! partition invariant and is ready for annealing.

mod nearest_neighbor;
mod random;

pub use nearest_neighbor::nearest_neighbor;
pub use random::random_assignment;
