//! Depot type with its hub city and salesman count.

use crate::error::MtspError;

/// A depot: a hub city plus a fixed number of salesmen based there.
///
/// Every salesman of the depot starts and ends its route at the hub.
///
/// # Examples
///
/// ```
/// use u_mtsp::models::Depot;
///
/// let d = Depot::new(0, 3);
/// assert_eq!(d.hub(), 0);
/// assert_eq!(d.salesmen(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depot {
    hub: usize,
    salesmen: usize,
}

impl Depot {
    /// Creates a depot at city `hub` with `salesmen` salesmen.
    pub fn new(hub: usize, salesmen: usize) -> Self {
        Self { hub, salesmen }
    }

    /// Hub city identifier.
    pub fn hub(&self) -> usize {
        self.hub
    }

    /// Number of salesmen based at this depot.
    pub fn salesmen(&self) -> usize {
        self.salesmen
    }
}

/// Checks that a depot list is usable with a matrix of `size` cities.
pub(crate) fn validate_depots(depots: &[Depot], size: usize) -> Result<(), MtspError> {
    if depots.is_empty() {
        return Err(MtspError::NoDepots);
    }
    let mut is_hub = vec![false; size];
    for (depot, d) in depots.iter().enumerate() {
        if d.salesmen == 0 {
            return Err(MtspError::NoSalesmen { depot });
        }
        if d.hub >= size {
            return Err(MtspError::HubOutOfRange {
                depot,
                hub: d.hub,
                size,
            });
        }
        if is_hub[d.hub] {
            return Err(MtspError::DuplicateHub { hub: d.hub });
        }
        is_hub[d.hub] = true;
    }
    Ok(())
}

/// Marks which of the `size` cities are hubs.
pub(crate) fn hub_mask(depots: &[Depot], size: usize) -> Vec<bool> {
    let mut mask = vec![false; size];
    for d in depots {
        mask[d.hub] = true;
    }
    mask
}

/// All cities that are not hubs, in ascending order.
pub(crate) fn non_hub_cities(depots: &[Depot], size: usize) -> Vec<usize> {
    let mask = hub_mask(depots, size);
    (0..size).filter(|&c| !mask[c]).collect()
}
