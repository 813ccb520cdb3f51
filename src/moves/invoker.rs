//! Dispatch from move kind to execute/undo.

use rand::Rng;

use super::{MoveKind, MoveRecord};
use crate::models::TourState;

/// Executes moves by kind and keeps each kind's pending undo record.
///
/// Every [`Invoker::execute`] must be settled by exactly one
/// [`Invoker::commit`] (keep the change) or [`Invoker::unexecute`] (revert
/// it) before that kind runs again.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_mtsp::distance::DistanceMatrix;
/// use u_mtsp::models::{Depot, TourState};
/// use u_mtsp::moves::{Invoker, MoveKind};
///
/// let points: Vec<(f64, f64)> = (0..4).map(|x| (x as f64, 0.0)).collect();
/// let dm = Arc::new(DistanceMatrix::from_points(&points));
/// let mut tour = TourState::new(dm, vec![Depot::new(0, 1)], vec![vec![vec![3, 1, 2]]]).unwrap();
/// let before = tour.clone();
///
/// let mut invoker = Invoker::new();
/// let mut rng = u_numflow::random::create_rng(42);
/// invoker.execute(MoveKind::SwapNodesInRoute, &mut tour, &mut rng);
/// invoker.unexecute(MoveKind::SwapNodesInRoute, &mut tour);
/// assert_eq!(tour, before);
/// ```
#[derive(Debug, Default)]
pub struct Invoker {
    pending: [Option<MoveRecord>; MoveKind::COUNT],
}

impl Invoker {
    /// Creates an invoker with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a random move of `kind` and holds its undo record.
    ///
    /// # Panics
    ///
    /// Panics if a previous `execute` of the same kind is still unsettled.
    pub fn execute<R: Rng>(
        &mut self,
        kind: MoveKind,
        tour: &mut TourState,
        rng: &mut R,
    ) -> MoveRecord {
        let slot = &mut self.pending[kind.index()];
        assert!(slot.is_none(), "{kind} executed again before commit or undo");
        let record = kind.execute(tour, rng);
        *slot = Some(record);
        record
    }

    /// Reverts the pending move of `kind`.
    ///
    /// # Panics
    ///
    /// Panics if no move of that kind is pending.
    pub fn unexecute(&mut self, kind: MoveKind, tour: &mut TourState) {
        match self.pending[kind.index()].take() {
            Some(record) => record.undo(tour),
            None => panic!("{kind} undone without a pending execute"),
        }
    }

    /// Keeps the pending move of `kind` and drops its undo record.
    pub fn commit(&mut self, kind: MoveKind) -> Option<MoveRecord> {
        self.pending[kind.index()].take()
    }

    /// The unsettled record for `kind`, if any.
    pub fn pending(&self, kind: MoveKind) -> Option<&MoveRecord> {
        self.pending[kind.index()].as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::testing::sample_tour;

    #[test]
    fn test_execute_unexecute_each_kind() {
        let mut rng = u_numflow::random::create_rng(42);
        let mut invoker = Invoker::new();
        let mut tour = sample_tour();
        let before = tour.clone();
        for kind in MoveKind::ALL {
            let record = invoker.execute(kind, &mut tour, &mut rng);
            assert_eq!(invoker.pending(kind), Some(&record));
            invoker.unexecute(kind, &mut tour);
            assert!(invoker.pending(kind).is_none());
            assert_eq!(tour, before, "{kind}");
        }
    }

    #[test]
    fn test_commit_keeps_change() {
        let mut rng = u_numflow::random::create_rng(42);
        let mut invoker = Invoker::new();
        let mut tour = sample_tour();
        let record = invoker.execute(MoveKind::InsertNodeBetweenRoutes, &mut tour, &mut rng);
        assert_eq!(invoker.commit(MoveKind::InsertNodeBetweenRoutes), Some(record));
        assert_ne!(tour.to_lists(), sample_tour().to_lists());
        assert!(invoker.pending(MoveKind::InsertNodeBetweenRoutes).is_none());
    }

    #[test]
    #[should_panic(expected = "without a pending execute")]
    fn test_unexecute_without_execute_panics() {
        let mut invoker = Invoker::new();
        let mut tour = sample_tour();
        invoker.unexecute(MoveKind::SwapNodesInRoute, &mut tour);
    }

    #[test]
    #[should_panic(expected = "executed again")]
    fn test_double_execute_panics() {
        let mut rng = u_numflow::random::create_rng(42);
        let mut invoker = Invoker::new();
        let mut tour = sample_tour();
        invoker.execute(MoveKind::SwapNodesInRoute, &mut tour, &mut rng);
        invoker.execute(MoveKind::SwapNodesInRoute, &mut tour, &mut rng);
    }
}
