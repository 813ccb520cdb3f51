//! # u-mtsp
//!
//! Multi-depot multiple traveling salesman optimization by simulated
//! annealing over five reversible route moves.
//!
//! ## Modules
//!
//! - [`models`]: Domain model types (Depot, Route, Slot, TourState, Violation)
//! - [`distance`]: Integer distance matrix
//! - [`evaluation`]: Route cost and incremental insertion/removal deltas
//! - [`moves`]: Neighborhood moves with exact undo, and the Invoker
//! - [`anneal`]: Simulated annealing driver, schedule, and move usage statistics
//! - [`constructive`]: Initial tours (random deal, nearest neighbor)
//! - [`error`]: Error type for rejected instances and schedules
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use u_mtsp::anneal::{anneal, default_config};
//! use u_mtsp::constructive::random_assignment;
//! use u_mtsp::distance::DistanceMatrix;
//! use u_mtsp::models::Depot;
//!
//! let points: Vec<(f64, f64)> = (0..12)
//!     .map(|i| ((i % 4) as f64 * 10.0, (i / 4) as f64 * 10.0))
//!     .collect();
//! let dm = Arc::new(DistanceMatrix::from_points(&points));
//! let depots = vec![Depot::new(0, 2), Depot::new(11, 1)];
//!
//! let mut rng = u_numflow::random::create_rng(42);
//! let mut tour = random_assignment(dm, depots, &mut rng).unwrap();
//!
//! let config = default_config()
//!     .with_initial_temperature(50.0)
//!     .with_min_temperature(0.1)
//!     .with_iterations_per_temperature(100)
//!     .with_seed(42);
//! let result = anneal(&mut tour, &config).unwrap();
//!
//! assert!(tour.check_partition().is_ok());
//! assert_eq!(result.final_cost, tour.cost());
//! ```

pub mod anneal;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod moves;

pub use error::MtspError;
