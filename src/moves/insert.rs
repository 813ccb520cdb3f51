//! Insertion moves: take a city out of a route and put it back elsewhere.

use rand::Rng;

use super::{distinct_pair, random_salesman, MoveRecord};
use crate::models::{Slot, TourState};

/// Moves one city of a random route to a different position in that route.
///
/// Routes with fewer than two cities yield [`MoveRecord::Noop`].
pub fn insert_node_in_route<R: Rng>(tour: &mut TourState, rng: &mut R) -> MoveRecord {
    let (depot, salesman) = random_salesman(tour, rng);
    let len = tour.route(depot, salesman).len();
    if len < 2 {
        return MoveRecord::Noop;
    }
    // After removal the route has len - 1 cities, so 0..len covers every
    // insertion index; excluding `from` rules out putting it straight back.
    let (from, to) = distinct_pair(len, rng);
    let from = Slot::new(depot, salesman, from);
    let to = Slot::new(depot, salesman, to);
    tour.move_city(from, to);
    MoveRecord::Relocate { from, to }
}

/// Moves one city from a random salesman's route into another salesman's route.
///
/// The two salesmen are distinct and may belong to different depots. Yields
/// [`MoveRecord::Noop`] with a single salesman or an empty source route.
pub fn insert_node_between_routes<R: Rng>(tour: &mut TourState, rng: &mut R) -> MoveRecord {
    let fleet = tour.salesman_count();
    if fleet < 2 {
        return MoveRecord::Noop;
    }
    let (a, b) = distinct_pair(fleet, rng);
    let (src_depot, src_salesman) = tour.locate_salesman(a);
    let (dst_depot, dst_salesman) = tour.locate_salesman(b);

    let src_len = tour.route(src_depot, src_salesman).len();
    if src_len == 0 {
        return MoveRecord::Noop;
    }
    let dst_len = tour.route(dst_depot, dst_salesman).len();
    let from = Slot::new(src_depot, src_salesman, rng.random_range(0..src_len));
    let to = Slot::new(dst_depot, dst_salesman, rng.random_range(0..=dst_len));
    tour.move_city(from, to);
    MoveRecord::Relocate { from, to }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::Depot;
    use crate::moves::testing::{all_cities, sample_tour};

    #[test]
    fn test_insert_in_route_keeps_route_contents() {
        let mut rng = u_numflow::random::create_rng(42);
        let original = sample_tour();
        let mut tour = original.clone();
        let record = insert_node_in_route(&mut tour, &mut rng);
        let MoveRecord::Relocate { from, to } = record else {
            panic!("expected a relocation, got {record:?}");
        };
        assert_eq!((from.depot, from.salesman), (to.depot, to.salesman));
        assert_ne!(from.position, to.position);

        let mut before = original.route(from.depot, from.salesman).cities().to_vec();
        let mut after = tour.route(to.depot, to.salesman).cities().to_vec();
        assert_eq!(after[to.position], before[from.position]);
        assert_ne!(after, before);
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(after, before);
    }

    #[test]
    fn test_insert_between_routes_moves_one_city() {
        let mut rng = u_numflow::random::create_rng(9);
        let original = sample_tour();
        let mut tour = original.clone();
        let record = insert_node_between_routes(&mut tour, &mut rng);
        let MoveRecord::Relocate { from, to } = record else {
            panic!("expected a relocation, got {record:?}");
        };
        assert_ne!((from.depot, from.salesman), (to.depot, to.salesman));
        assert_eq!(
            tour.route(from.depot, from.salesman).len() + 1,
            original.route(from.depot, from.salesman).len()
        );
        assert_eq!(
            tour.route(to.depot, to.salesman).len(),
            original.route(to.depot, to.salesman).len() + 1
        );
        assert_eq!(all_cities(&tour), all_cities(&original));
        assert_eq!(tour.cost(), tour.recompute_cost());

        record.undo(&mut tour);
        assert_eq!(tour, original);
    }

    #[test]
    fn test_insert_between_routes_can_empty_and_refill() {
        let points: Vec<(f64, f64)> = (0..4).map(|x| (x as f64, 0.0)).collect();
        let dm = Arc::new(DistanceMatrix::from_points(&points));
        let original = TourState::new(
            dm,
            vec![Depot::new(0, 1), Depot::new(2, 1)],
            vec![vec![vec![1]], vec![vec![3]]],
        )
        .expect("valid");
        let mut rng = u_numflow::random::create_rng(42);
        let mut tour = original.clone();

        let record = insert_node_between_routes(&mut tour, &mut rng);
        assert!(!record.is_noop());
        assert_eq!(tour.city_count(), 2);
        assert!((0..2).any(|d| tour.route(d, 0).is_empty()));
        assert_eq!(tour.cost(), tour.recompute_cost());

        record.undo(&mut tour);
        assert_eq!(tour, original);
    }

    #[test]
    fn test_single_salesman_is_noop() {
        let points: Vec<(f64, f64)> = (0..2).map(|x| (x as f64, 0.0)).collect();
        let dm = Arc::new(DistanceMatrix::from_points(&points));
        let mut tour =
            TourState::new(dm, vec![Depot::new(0, 1)], vec![vec![vec![1]]]).expect("valid");
        let mut rng = u_numflow::random::create_rng(42);
        assert!(insert_node_between_routes(&mut tour, &mut rng).is_noop());
        assert!(insert_node_in_route(&mut tour, &mut rng).is_noop());
    }
}
