//! Nearest-neighbor constructive heuristic.
//!
//! Each city joins the depot whose hub is closest to it. Within a depot the
//! cities are chained greedily, always stepping to the nearest unvisited city
//! starting from the hub, and the chain is cut into contiguous pieces of
//! near-equal length, one per salesman.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use std::sync::Arc;

use crate::distance::DistanceMatrix;
use crate::error::MtspError;
use crate::models::{non_hub_cities, validate_depots, Depot, TourState};

/// Constructs a tour with nearest-hub clustering and nearest-neighbor chains.
///
/// Ties between hubs go to the lower depot index. When a depot has more
/// salesmen than cities, the trailing salesmen get empty routes.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_mtsp::constructive::nearest_neighbor;
/// use u_mtsp::distance::DistanceMatrix;
/// use u_mtsp::models::Depot;
///
/// let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
/// let dm = Arc::new(DistanceMatrix::from_points(&points));
///
/// let tour = nearest_neighbor(dm, vec![Depot::new(0, 1)]).unwrap();
/// assert_eq!(tour.route(0, 0).cities(), &[1, 2, 3]);
/// // 0→1 + 1→2 + 2→3 + 3→0 = 1 + 1 + 1 + 3
/// assert_eq!(tour.cost(), 6);
/// ```
pub fn nearest_neighbor(
    distances: Arc<DistanceMatrix>,
    depots: Vec<Depot>,
) -> Result<TourState, MtspError> {
    let size = distances.size();
    validate_depots(&depots, size)?;

    let mut clusters: Vec<Vec<usize>> = vec![Vec::new(); depots.len()];
    for city in non_hub_cities(&depots, size) {
        let nearest = (0..depots.len())
            .min_by_key(|&d| distances.get(depots[d].hub(), city))
            .unwrap_or(0);
        clusters[nearest].push(city);
    }

    let routes = depots
        .iter()
        .zip(clusters)
        .map(|(depot, mut remaining)| {
            let mut chain = Vec::with_capacity(remaining.len());
            let mut current = depot.hub();
            while let Some(next) = distances.nearest_neighbor(current, &remaining) {
                remaining.retain(|&c| c != next);
                chain.push(next);
                current = next;
            }
            split_evenly(&chain, depot.salesmen())
        })
        .collect();

    TourState::new(distances, depots, routes)
}

/// Cuts `chain` into `parts` contiguous pieces whose lengths differ by at most one.
fn split_evenly(chain: &[usize], parts: usize) -> Vec<Vec<usize>> {
    let base = chain.len() / parts;
    let extra = chain.len() % parts;
    let mut pieces = Vec::with_capacity(parts);
    let mut start = 0;
    for i in 0..parts {
        let len = base + usize::from(i < extra);
        pieces.push(chain[start..start + len].to_vec());
        start += len;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hub 0 at x = 0 with two salesmen, hub 4 at x = 10 with one.
    fn two_hub_line() -> (Arc<DistanceMatrix>, Vec<Depot>) {
        let xs = [0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0];
        let points: Vec<(f64, f64)> = xs.iter().map(|&x| (x, 0.0)).collect();
        (
            Arc::new(DistanceMatrix::from_points(&points)),
            vec![Depot::new(0, 2), Depot::new(4, 1)],
        )
    }

    #[test]
    fn test_nn_clusters_by_nearest_hub() {
        let (dm, depots) = two_hub_line();
        let tour = nearest_neighbor(dm, depots).expect("valid");
        assert_eq!(
            tour.to_lists(),
            vec![vec![vec![1, 2], vec![3]], vec![vec![5, 6]]]
        );
        assert!(tour.check_partition().is_ok());
        assert_eq!(tour.cost(), tour.recompute_cost());
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let points = [(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)];
        let dm = Arc::new(DistanceMatrix::from_points(&points));
        let tour = nearest_neighbor(dm, vec![Depot::new(0, 1)]).expect("valid");
        assert_eq!(tour.route(0, 0).cities(), &[2, 1]);
    }

    #[test]
    fn test_nn_more_salesmen_than_cities() {
        let points = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)];
        let dm = Arc::new(DistanceMatrix::from_points(&points));
        let tour = nearest_neighbor(dm, vec![Depot::new(0, 4)]).expect("valid");
        assert_eq!(tour.to_lists(), vec![vec![vec![1], vec![2], vec![], vec![]]]);
    }

    #[test]
    fn test_nn_rejects_bad_depots() {
        let (dm, _) = two_hub_line();
        assert!(matches!(
            nearest_neighbor(dm.clone(), vec![]),
            Err(MtspError::NoDepots)
        ));
        assert!(matches!(
            nearest_neighbor(dm, vec![Depot::new(9, 1)]),
            Err(MtspError::HubOutOfRange { .. })
        ));
    }

    #[test]
    fn test_split_evenly() {
        assert_eq!(
            split_evenly(&[1, 2, 3, 4, 5], 3),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(split_evenly(&[], 2), vec![Vec::<usize>::new(), vec![]]);
    }
}
