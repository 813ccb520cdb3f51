//! Swap moves: exchange two cities without changing route lengths.

use rand::Rng;

use super::{distinct_pair, random_salesman, MoveRecord};
use crate::models::{Slot, TourState};

/// Swaps two distinct positions of a random salesman's route.
///
/// Routes with fewer than two cities yield [`MoveRecord::Noop`].
pub fn swap_nodes_in_route<R: Rng>(tour: &mut TourState, rng: &mut R) -> MoveRecord {
    let (depot, salesman) = random_salesman(tour, rng);
    let len = tour.route(depot, salesman).len();
    if len < 2 {
        return MoveRecord::Noop;
    }
    let (first, second) = distinct_pair(len, rng);
    tour.swap_positions(depot, salesman, first, second);
    MoveRecord::SwapInRoute {
        depot,
        salesman,
        first,
        second,
    }
}

/// Swaps the first and last city of a random salesman's route.
///
/// These are the two cities joined to the hub, so the route leaves and
/// re-enters its depot through each other's edges. Routes with fewer than two
/// cities yield [`MoveRecord::Noop`].
pub fn swap_hub_with_node_in_route<R: Rng>(tour: &mut TourState, rng: &mut R) -> MoveRecord {
    let (depot, salesman) = random_salesman(tour, rng);
    let len = tour.route(depot, salesman).len();
    if len < 2 {
        return MoveRecord::Noop;
    }
    tour.swap_positions(depot, salesman, 0, len - 1);
    MoveRecord::SwapRouteEnds { depot, salesman }
}

/// Exchanges one city each between two distinct salesmen of the same depot.
///
/// The depot is drawn among those with at least two salesmen. Yields
/// [`MoveRecord::Noop`] when no depot qualifies or either route is empty.
pub fn swap_nodes_between_routes<R: Rng>(tour: &mut TourState, rng: &mut R) -> MoveRecord {
    let eligible = |d: &usize| tour.salesmen_in_depot(*d) >= 2;
    let count = (0..tour.depot_count()).filter(eligible).count();
    if count == 0 {
        return MoveRecord::Noop;
    }
    let pick = rng.random_range(0..count);
    let Some(depot) = (0..tour.depot_count()).filter(eligible).nth(pick) else {
        return MoveRecord::Noop;
    };

    let (s1, s2) = distinct_pair(tour.salesmen_in_depot(depot), rng);
    let (len1, len2) = (tour.route(depot, s1).len(), tour.route(depot, s2).len());
    if len1 == 0 || len2 == 0 {
        return MoveRecord::Noop;
    }
    let first = Slot::new(depot, s1, rng.random_range(0..len1));
    let second = Slot::new(depot, s2, rng.random_range(0..len2));
    tour.swap_across_routes(first, second);
    MoveRecord::SwapBetweenRoutes { first, second }
}
