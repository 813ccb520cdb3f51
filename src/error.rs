//! Error types for instance construction and solver configuration.

use std::fmt::Display;

use crate::models::Violation;

/// Errors raised when an instance, tour, or schedule is rejected.
///
/// Every variant is a precondition failure: the caller handed in something
/// the solver cannot work with. None of them is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum MtspError {
    /// The annealing schedule failed validation.
    InvalidConfig(String),
    /// The instance declares no depots.
    NoDepots,
    /// A depot has zero salesmen.
    NoSalesmen {
        /// Depot index.
        depot: usize,
    },
    /// A depot hub is not a valid matrix index.
    HubOutOfRange {
        /// Depot index.
        depot: usize,
        /// Offending hub city.
        hub: usize,
        /// Matrix size.
        size: usize,
    },
    /// Two depots share the same hub city.
    DuplicateHub {
        /// The shared hub city.
        hub: usize,
    },
    /// The number of route groups differs from the number of depots.
    DepotCountMismatch {
        /// Number of depots.
        expected: usize,
        /// Number of route groups supplied.
        actual: usize,
    },
    /// A depot received a different number of routes than it has salesmen.
    RouteCountMismatch {
        /// Depot index.
        depot: usize,
        /// Salesmen in the depot.
        expected: usize,
        /// Routes supplied.
        actual: usize,
    },
    /// A matrix row has the wrong length.
    NonSquareMatrix {
        /// Row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (number of rows).
        expected: usize,
    },
    /// A matrix entry is negative.
    NegativeDistance {
        /// Origin city.
        from: usize,
        /// Destination city.
        to: usize,
    },
    /// The routes do not partition the non-hub cities.
    Partition(Violation),
}

impl Display for MtspError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid annealing config: {msg}"),
            Self::NoDepots => write!(f, "instance has no depots"),
            Self::NoSalesmen { depot } => write!(f, "depot {depot} has no salesmen"),
            Self::HubOutOfRange { depot, hub, size } => write!(
                f,
                "hub {hub} of depot {depot} is outside the {size}x{size} distance matrix"
            ),
            Self::DuplicateHub { hub } => write!(f, "hub {hub} is shared by several depots"),
            Self::DepotCountMismatch { expected, actual } => write!(
                f,
                "expected route groups for {expected} depots, got {actual}"
            ),
            Self::RouteCountMismatch {
                depot,
                expected,
                actual,
            } => write!(
                f,
                "depot {depot} has {expected} salesmen but {actual} routes were supplied"
            ),
            Self::NonSquareMatrix { row, len, expected } => write!(
                f,
                "distance matrix row {row} has {len} entries, expected {expected}"
            ),
            Self::NegativeDistance { from, to } => {
                write!(f, "negative distance from {from} to {to}")
            }
            Self::Partition(v) => write!(f, "routes do not partition the cities: {v}"),
        }
    }
}

impl std::error::Error for MtspError {}

impl From<Violation> for MtspError {
    fn from(v: Violation) -> Self {
        Self::Partition(v)
    }
}
