//! Tour state: the partition of cities into per-salesman routes.

use std::sync::Arc;

use super::depot::{hub_mask, validate_depots};
use super::{Depot, Route, Slot, Violation};
use crate::distance::{Cost, DistanceMatrix};
use crate::error::MtspError;
use crate::evaluation::RouteEvaluator;

/// The complete assignment of cities to salesmen, mutated in place.
///
/// Routes are addressed as `(depot, salesman)`. Every non-hub city appears in
/// exactly one route exactly once; hubs never appear in a route body. The
/// public mutation primitives only reorder or relocate existing cities, so the
/// partition holds after any sequence of calls.
///
/// The total cost is kept as a running sum that each primitive updates from
/// the edges it touches. [`TourState::recompute_cost`] sums from scratch and
/// always agrees with [`TourState::cost`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_mtsp::distance::DistanceMatrix;
/// use u_mtsp::models::{Depot, TourState};
///
/// let points: Vec<(f64, f64)> = (0..5).map(|x| (x as f64, 0.0)).collect();
/// let dm = Arc::new(DistanceMatrix::from_points(&points));
/// let depots = vec![Depot::new(0, 2)];
///
/// let mut tour = TourState::new(dm, depots, vec![vec![vec![2, 1], vec![3, 4]]]).unwrap();
/// assert_eq!(tour.cost(), 4 + 8);
///
/// tour.swap_positions(0, 0, 0, 1);
/// assert_eq!(tour.route(0, 0).cities(), &[1, 2]);
/// assert_eq!(tour.cost(), tour.recompute_cost());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TourState {
    distances: Arc<DistanceMatrix>,
    depots: Vec<Depot>,
    routes: Vec<Vec<Route>>,
    cost: Cost,
}

impl TourState {
    /// Builds a tour from explicit routes, indexed `routes[depot][salesman]`.
    ///
    /// Rejects malformed depots, a route layout that does not match the
    /// depots, and routes that do not partition the non-hub cities.
    pub fn new(
        distances: Arc<DistanceMatrix>,
        depots: Vec<Depot>,
        routes: Vec<Vec<Vec<usize>>>,
    ) -> Result<Self, MtspError> {
        validate_depots(&depots, distances.size())?;
        if routes.len() != depots.len() {
            return Err(MtspError::DepotCountMismatch {
                expected: depots.len(),
                actual: routes.len(),
            });
        }
        for (depot, (d, group)) in depots.iter().zip(&routes).enumerate() {
            if group.len() != d.salesmen() {
                return Err(MtspError::RouteCountMismatch {
                    depot,
                    expected: d.salesmen(),
                    actual: group.len(),
                });
            }
        }

        let routes = depots
            .iter()
            .zip(routes)
            .map(|(d, group)| group.into_iter().map(|r| Route::new(d.hub(), r)).collect())
            .collect();

        let mut tour = Self {
            distances,
            depots,
            routes,
            cost: 0,
        };
        tour.check_partition()?;
        tour.cost = tour.recompute_cost();
        Ok(tour)
    }

    /// The shared distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// A handle to the shared distance matrix.
    pub fn distances_arc(&self) -> Arc<DistanceMatrix> {
        Arc::clone(&self.distances)
    }

    /// The depots of this instance.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// Number of depots.
    pub fn depot_count(&self) -> usize {
        self.depots.len()
    }

    /// Number of salesmen in depot `depot`.
    pub fn salesmen_in_depot(&self, depot: usize) -> usize {
        self.routes[depot].len()
    }

    /// Number of salesmen across all depots.
    pub fn salesman_count(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    /// Number of cities visited across all routes.
    pub fn city_count(&self) -> usize {
        self.routes.iter().flatten().map(Route::len).sum()
    }

    /// Route of salesman `salesman` in depot `depot`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn route(&self, depot: usize, salesman: usize) -> &Route {
        &self.routes[depot][salesman]
    }

    /// Iterates over `(depot, salesman, route)` for every salesman.
    pub fn routes(&self) -> impl Iterator<Item = (usize, usize, &Route)> + '_ {
        self.routes.iter().enumerate().flat_map(|(d, group)| {
            group.iter().enumerate().map(move |(s, r)| (d, s, r))
        })
    }

    /// Snapshot of all route bodies, indexed `[depot][salesman]`.
    pub fn to_lists(&self) -> Vec<Vec<Vec<usize>>> {
        self.routes
            .iter()
            .map(|group| group.iter().map(|r| r.cities().to_vec()).collect())
            .collect()
    }

    /// Maps a flat salesman index in `0..salesman_count()` to `(depot, salesman)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn locate_salesman(&self, mut index: usize) -> (usize, usize) {
        for (d, group) in self.routes.iter().enumerate() {
            if index < group.len() {
                return (d, index);
            }
            index -= group.len();
        }
        panic!("salesman index out of range");
    }

    /// Current total travel cost.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Total travel cost summed from scratch.
    pub fn recompute_cost(&self) -> Cost {
        self.routes().map(|(d, s, _)| self.route_cost(d, s)).sum()
    }

    /// Cost of one closed route.
    pub fn route_cost(&self, depot: usize, salesman: usize) -> Cost {
        let route = &self.routes[depot][salesman];
        RouteEvaluator::new(&self.distances).route_cost(route.hub(), route.cities())
    }

    /// Verifies that the routes partition the non-hub cities.
    pub fn check_partition(&self) -> Result<(), Violation> {
        let size = self.distances.size();
        let is_hub = hub_mask(&self.depots, size);
        let mut seen = vec![false; size];

        for (depot, salesman, route) in self.routes() {
            for &city in route.cities() {
                if city >= size {
                    return Err(Violation::CityOutOfRange { city, size });
                }
                if is_hub[city] {
                    return Err(Violation::HubInRoute {
                        depot,
                        salesman,
                        hub: city,
                    });
                }
                if seen[city] {
                    return Err(Violation::DuplicateCity { city });
                }
                seen[city] = true;
            }
        }

        match (0..size).find(|&c| !is_hub[c] && !seen[c]) {
            Some(city) => Err(Violation::MissingCity { city }),
            None => Ok(()),
        }
    }

    /// Swaps the cities at positions `i` and `j` of one route.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn swap_positions(&mut self, depot: usize, salesman: usize, i: usize, j: usize) {
        if i == j {
            let len = self.routes[depot][salesman].len();
            assert!(i < len, "swap position {i} out of range for route of {len} cities");
            return;
        }
        let before = self.route_cost(depot, salesman);
        self.routes[depot][salesman].cities_mut().swap(i, j);
        self.cost += self.route_cost(depot, salesman) - before;
    }

    /// Exchanges the cities at two slots, which may lie in different routes.
    ///
    /// # Panics
    ///
    /// Panics if either slot is out of range.
    pub fn swap_across_routes(&mut self, a: Slot, b: Slot) {
        if (a.depot, a.salesman) == (b.depot, b.salesman) {
            self.swap_positions(a.depot, a.salesman, a.position, b.position);
            return;
        }
        let before = self.route_cost(a.depot, a.salesman) + self.route_cost(b.depot, b.salesman);
        let city_a = self.routes[a.depot][a.salesman].cities()[a.position];
        let city_b = self.routes[b.depot][b.salesman].cities()[b.position];
        self.routes[a.depot][a.salesman].cities_mut()[a.position] = city_b;
        self.routes[b.depot][b.salesman].cities_mut()[b.position] = city_a;
        let after = self.route_cost(a.depot, a.salesman) + self.route_cost(b.depot, b.salesman);
        self.cost += after - before;
    }

    /// Relocates the city at `from` so that it ends up at `to`.
    ///
    /// `to.position` is an index into the destination route as it looks after
    /// the removal, so it may equal that route's length (append). Moving a city
    /// from `from` to `to` and then from `to` back to `from` restores the tour.
    ///
    /// # Panics
    ///
    /// Panics if either slot is out of range.
    pub fn move_city(&mut self, from: Slot, to: Slot) -> usize {
        let city = self.remove_city_at(from.depot, from.salesman, from.position);
        self.insert_city_at(to.depot, to.salesman, to.position, city);
        city
    }

    /// Removes and returns the city at `pos`. Leaves the partition broken
    /// until the city is reinserted.
    pub(crate) fn remove_city_at(&mut self, depot: usize, salesman: usize, pos: usize) -> usize {
        let route = &self.routes[depot][salesman];
        let delta = RouteEvaluator::new(&self.distances).removal_delta(route.hub(), route.cities(), pos);
        let city = self.routes[depot][salesman].cities_mut().remove(pos);
        self.cost += delta;
        city
    }

    /// Inserts `city` so that it lands at index `pos`.
    pub(crate) fn insert_city_at(&mut self, depot: usize, salesman: usize, pos: usize, city: usize) {
        let route = &self.routes[depot][salesman];
        assert!(pos <= route.len(), "insert position {pos} out of range");
        let delta =
            RouteEvaluator::new(&self.distances).insertion_delta(route.hub(), route.cities(), pos, city);
        self.routes[depot][salesman].cities_mut().insert(pos, city);
        self.cost += delta;
    }
}
