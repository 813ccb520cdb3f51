//! Reversible neighborhood moves over a [`TourState`].
//!
//! Five move kinds perturb the tour in place and return a [`MoveRecord`]
//! holding exactly what is needed to put it back:
//!
//! - [`MoveKind::SwapNodesInRoute`]: swap two cities of one route
//! - [`MoveKind::SwapHubWithNodeInRoute`]: swap the first and last city of one route
//! - [`MoveKind::SwapNodesBetweenRoutes`]: swap one city each between two salesmen of a depot
//! - [`MoveKind::InsertNodeInRoute`]: relocate a city within its route
//! - [`MoveKind::InsertNodeBetweenRoutes`]: relocate a city to another salesman's route
//!
//! A move that has no room to act (a route too short, no second salesman)
//! leaves the tour untouched and returns [`MoveRecord::Noop`].
//!
//! [`Invoker`] pairs each executed move with its pending undo.

mod insert;
mod invoker;
mod swap;

use std::fmt::Display;

use rand::Rng;
use serde::Serialize;

use crate::models::{Slot, TourState};

pub use insert::{insert_node_between_routes, insert_node_in_route};
pub use invoker::Invoker;
pub use swap::{swap_hub_with_node_in_route, swap_nodes_between_routes, swap_nodes_in_route};

/// The five neighborhood operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveKind {
    /// Swap two cities within one route.
    SwapNodesInRoute,
    /// Swap the two hub-adjacent cities of one route.
    SwapHubWithNodeInRoute,
    /// Swap cities between two salesmen of the same depot.
    SwapNodesBetweenRoutes,
    /// Relocate a city within its own route.
    InsertNodeInRoute,
    /// Relocate a city into another salesman's route.
    InsertNodeBetweenRoutes,
}

impl MoveKind {
    /// Number of move kinds.
    pub const COUNT: usize = 5;

    /// Every move kind, in index order.
    pub const ALL: [MoveKind; MoveKind::COUNT] = [
        MoveKind::SwapNodesInRoute,
        MoveKind::SwapHubWithNodeInRoute,
        MoveKind::SwapNodesBetweenRoutes,
        MoveKind::InsertNodeInRoute,
        MoveKind::InsertNodeBetweenRoutes,
    ];

    /// Position of this kind in [`MoveKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stable camelCase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            MoveKind::SwapNodesInRoute => "swapNodesInRoute",
            MoveKind::SwapHubWithNodeInRoute => "swapHubWithNodeInRoute",
            MoveKind::SwapNodesBetweenRoutes => "swapNodesBetweenRoutes",
            MoveKind::InsertNodeInRoute => "insertNodeInRoute",
            MoveKind::InsertNodeBetweenRoutes => "insertNodeBetweenRoutes",
        }
    }

    /// Draws a move kind uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::COUNT)]
    }

    /// Applies a random move of this kind and returns its undo record.
    pub fn execute<R: Rng>(self, tour: &mut TourState, rng: &mut R) -> MoveRecord {
        match self {
            MoveKind::SwapNodesInRoute => swap_nodes_in_route(tour, rng),
            MoveKind::SwapHubWithNodeInRoute => swap_hub_with_node_in_route(tour, rng),
            MoveKind::SwapNodesBetweenRoutes => swap_nodes_between_routes(tour, rng),
            MoveKind::InsertNodeInRoute => insert_node_in_route(tour, rng),
            MoveKind::InsertNodeBetweenRoutes => insert_node_between_routes(tour, rng),
        }
    }
}

impl Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What an executed move changed, with enough detail to revert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRecord {
    /// Nothing changed.
    Noop,
    /// Two positions of one route were swapped.
    SwapInRoute {
        /// Depot index.
        depot: usize,
        /// Salesman index.
        salesman: usize,
        /// First swapped position.
        first: usize,
        /// Second swapped position.
        second: usize,
    },
    /// The first and last city of one route were swapped.
    SwapRouteEnds {
        /// Depot index.
        depot: usize,
        /// Salesman index.
        salesman: usize,
    },
    /// Two cities in different routes were exchanged.
    SwapBetweenRoutes {
        /// Slot in the first route.
        first: Slot,
        /// Slot in the second route.
        second: Slot,
    },
    /// A city was moved from one slot to another.
    Relocate {
        /// Where the city was.
        from: Slot,
        /// Where the city is now.
        to: Slot,
    },
}

impl MoveRecord {
    /// Returns `true` if the move left the tour untouched.
    pub fn is_noop(&self) -> bool {
        matches!(self, MoveRecord::Noop)
    }

    /// Reverts this move on the tour it was applied to.
    ///
    /// Must be called on the tour exactly as the move left it.
    pub fn undo(self, tour: &mut TourState) {
        match self {
            MoveRecord::Noop => {}
            MoveRecord::SwapInRoute {
                depot,
                salesman,
                first,
                second,
            } => tour.swap_positions(depot, salesman, first, second),
            MoveRecord::SwapRouteEnds { depot, salesman } => {
                let last = tour.route(depot, salesman).len() - 1;
                tour.swap_positions(depot, salesman, 0, last);
            }
            MoveRecord::SwapBetweenRoutes { first, second } => {
                tour.swap_across_routes(first, second)
            }
            MoveRecord::Relocate { from, to } => {
                tour.move_city(to, from);
            }
        }
    }
}

/// Two distinct indices drawn uniformly from `0..n`. Requires `n >= 2`.
pub(crate) fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    debug_assert!(n >= 2, "need at least two candidates, got {n}");
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

/// A salesman drawn uniformly from the whole fleet.
pub(crate) fn random_salesman<R: Rng>(tour: &TourState, rng: &mut R) -> (usize, usize) {
    tour.locate_salesman(rng.random_range(0..tour.salesman_count()))
}
