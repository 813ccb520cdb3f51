//! Partition invariant violations.

use std::fmt::Display;

/// A way in which a set of routes fails to partition the non-hub cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A route visits a city outside the distance matrix.
    CityOutOfRange {
        /// Offending city.
        city: usize,
        /// Matrix size.
        size: usize,
    },
    /// A hub city appears inside a route body.
    HubInRoute {
        /// Depot owning the route.
        depot: usize,
        /// Salesman owning the route.
        salesman: usize,
        /// The hub that was found.
        hub: usize,
    },
    /// A city is visited more than once across all routes.
    DuplicateCity {
        /// Offending city.
        city: usize,
    },
    /// A non-hub city is visited by no route.
    MissingCity {
        /// Unvisited city.
        city: usize,
    },
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CityOutOfRange { city, size } => {
                write!(f, "city {city} is outside the {size}-city matrix")
            }
            Self::HubInRoute {
                depot,
                salesman,
                hub,
            } => write!(
                f,
                "hub {hub} appears in the route of salesman {salesman} of depot {depot}"
            ),
            Self::DuplicateCity { city } => write!(f, "city {city} appears more than once"),
            Self::MissingCity { city } => write!(f, "city {city} is not visited"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_display() {
        let v = Violation::HubInRoute {
            depot: 1,
            salesman: 0,
            hub: 3,
        };
        assert_eq!(
            v.to_string(),
            "hub 3 appears in the route of salesman 0 of depot 1"
        );
        assert_eq!(
            Violation::MissingCity { city: 9 }.to_string(),
            "city 9 is not visited"
        );
    }
}
