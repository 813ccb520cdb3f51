//! Simulated annealing over multi-depot tours.
//!
//! The schedule is a [`SaConfig`]: start at `initial_temperature`, run
//! `iterations_per_temperature` trials per level, cool by the
//! [`CoolingSchedule`], stop at `min_temperature` or after `max_iterations`
//! trials when that is non-zero.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use u_mtsp::anneal::{anneal, default_config};
//! use u_mtsp::distance::DistanceMatrix;
//! use u_mtsp::models::{Depot, TourState};
//!
//! let points = [(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0), (1.0, 1.0)];
//! let dm = Arc::new(DistanceMatrix::from_points(&points));
//! let mut tour =
//!     TourState::new(dm, vec![Depot::new(0, 1)], vec![vec![vec![2, 4, 1, 3]]]).unwrap();
//!
//! let config = default_config()
//!     .with_iterations_per_temperature(20)
//!     .with_max_iterations(2_000)
//!     .with_seed(42);
//! let result = anneal(&mut tour, &config).unwrap();
//! assert_eq!(result.trials, 2_000);
//! assert_eq!(result.final_cost, tour.cost());
//! ```

mod config;
mod runner;
mod stats;

pub use config::{
    default_config, geometric_levels, DEFAULT_COOLING_RATE, DEFAULT_INITIAL_TEMPERATURE,
    DEFAULT_TEMPERATURE_FLOOR, DEFAULT_TRIALS_PER_TEMPERATURE,
};
pub use runner::{
    acceptance_probability, anneal, anneal_with_cancel, anneal_with_rng, metropolis_accepts,
    AnnealResult, Annealer, Phase, StopReason, Trial,
};
pub use stats::MoveUsage;
pub use u_metaheur::sa::{CoolingSchedule, SaConfig};
