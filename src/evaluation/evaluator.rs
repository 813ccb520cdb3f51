//! Route cost evaluation.

use crate::distance::{Cost, DistanceMatrix};

/// Computes closed-route costs and local cost changes.
///
/// A route is the ordered list of visited cities; the hub is implicit at
/// both ends. An empty route costs nothing.
///
/// # Examples
///
/// ```
/// use u_mtsp::distance::DistanceMatrix;
/// use u_mtsp::evaluation::RouteEvaluator;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 2, 3],
///     vec![2, 0, 4],
///     vec![3, 4, 0],
/// ])
/// .unwrap();
/// let evaluator = RouteEvaluator::new(&dm);
/// // 0 → 1 → 2 → 0
/// assert_eq!(evaluator.route_cost(0, &[1, 2]), 2 + 4 + 3);
/// assert_eq!(evaluator.route_cost(0, &[]), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator over the given distance matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Cost of the closed route `hub → cities… → hub`.
    pub fn route_cost(&self, hub: usize, cities: &[usize]) -> Cost {
        let (Some(&first), Some(&last)) = (cities.first(), cities.last()) else {
            return 0;
        };
        let inner: Cost = cities
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum();
        self.distances.get(hub, first) + inner + self.distances.get(last, hub)
    }

    /// Cost change from removing the city at `pos`.
    pub fn removal_delta(&self, hub: usize, cities: &[usize], pos: usize) -> Cost {
        if cities.len() == 1 {
            return -self.route_cost(hub, cities);
        }
        let prev = if pos == 0 { hub } else { cities[pos - 1] };
        let next = if pos == cities.len() - 1 {
            hub
        } else {
            cities[pos + 1]
        };
        let city = cities[pos];

        // prev → city → next  becomes  prev → next
        self.distances.get(prev, next) - self.distances.get(prev, city) - self.distances.get(city, next)
    }

    /// Cost change from inserting `city` so that it lands at index `pos`.
    pub fn insertion_delta(&self, hub: usize, cities: &[usize], pos: usize, city: usize) -> Cost {
        if cities.is_empty() {
            return self.route_cost(hub, &[city]);
        }
        let prev = if pos == 0 { hub } else { cities[pos - 1] };
        let next = if pos == cities.len() { hub } else { cities[pos] };

        // prev → next  becomes  prev → city → next
        self.distances.get(prev, city) + self.distances.get(city, next) - self.distances.get(prev, next)
    }
}
