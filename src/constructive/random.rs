//! Random initial assignment.

use std::sync::Arc;

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::MtspError;
use crate::models::{non_hub_cities, validate_depots, Depot, TourState};

/// Shuffles every non-hub city and deals each one to a uniformly random
/// salesman across the whole fleet.
///
/// Some routes may come out empty.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_mtsp::constructive::random_assignment;
/// use u_mtsp::distance::DistanceMatrix;
/// use u_mtsp::models::Depot;
///
/// let points: Vec<(f64, f64)> = (0..8).map(|i| (i as f64, (i * i % 5) as f64)).collect();
/// let dm = Arc::new(DistanceMatrix::from_points(&points));
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let tour = random_assignment(dm, vec![Depot::new(0, 2), Depot::new(7, 1)], &mut rng).unwrap();
/// assert_eq!(tour.city_count(), 6);
/// assert!(tour.check_partition().is_ok());
/// ```
pub fn random_assignment<R: Rng>(
    distances: Arc<DistanceMatrix>,
    depots: Vec<Depot>,
    rng: &mut R,
) -> Result<TourState, MtspError> {
    validate_depots(&depots, distances.size())?;

    let mut cities = non_hub_cities(&depots, distances.size());
    u_numflow::random::shuffle(&mut cities, rng);

    let mut routes: Vec<Vec<Vec<usize>>> = depots
        .iter()
        .map(|d| vec![Vec::new(); d.salesmen()])
        .collect();
    let fleet: usize = depots.iter().map(|d| d.salesmen()).sum();

    for city in cities {
        let mut pick = rng.random_range(0..fleet);
        for depot_routes in routes.iter_mut() {
            if pick < depot_routes.len() {
                depot_routes[pick].push(city);
                break;
            }
            pick -= depot_routes.len();
        }
    }

    TourState::new(distances, depots, routes)
}
