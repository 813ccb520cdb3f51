//! Route and slot types.

use serde::Serialize;

/// Address of one position in one salesman's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    /// Depot index.
    pub depot: usize,
    /// Salesman index within the depot.
    pub salesman: usize,
    /// Position within the route body.
    pub position: usize,
}

impl Slot {
    /// Creates a slot address.
    pub fn new(depot: usize, salesman: usize, position: usize) -> Self {
        Self {
            depot,
            salesman,
            position,
        }
    }
}

/// The ordered cities visited by a single salesman.
///
/// A route starts and ends at its depot's hub (not stored in `cities`).
///
/// # Examples
///
/// ```
/// use u_mtsp::models::Route;
///
/// let route = Route::new(0, vec![3, 5, 4]);
/// assert_eq!(route.hub(), 0);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.first(), Some(3));
/// assert_eq!(route.last(), Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    hub: usize,
    cities: Vec<usize>,
}

impl Route {
    /// Creates a route from its hub and visit order.
    pub fn new(hub: usize, cities: Vec<usize>) -> Self {
        Self { hub, cities }
    }

    /// Hub city at both ends of the route.
    pub fn hub(&self) -> usize {
        self.hub
    }

    /// Cities in visit order, hub excluded.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of visited cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if this salesman visits no city.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// First city after leaving the hub.
    pub fn first(&self) -> Option<usize> {
        self.cities.first().copied()
    }

    /// Last city before returning to the hub.
    pub fn last(&self) -> Option<usize> {
        self.cities.last().copied()
    }

    pub(crate) fn cities_mut(&mut self) -> &mut Vec<usize> {
        &mut self.cities
    }
}
