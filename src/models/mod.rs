//! Domain model types for the multi-depot multiple traveling salesman problem.
//!
//! Depots own a fixed number of salesmen; each salesman drives a closed route
//! from the depot's hub. [`TourState`] holds the whole partition of cities and
//! exposes the primitives the moves compose.

mod depot;
mod route;
mod tour;
mod violation;

pub use depot::Depot;
pub(crate) use depot::non_hub_cities;
pub(crate) use depot::validate_depots;
pub use route::{Route, Slot};
pub use tour::TourState;
pub use violation::Violation;
