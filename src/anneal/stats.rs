//! Per-move-kind acceptance statistics.

use serde::Serialize;

use crate::moves::MoveKind;

/// How many trials of each move kind were accepted over a run.
///
/// Serializes to an object keyed by the camelCase move names.
///
/// # Examples
///
/// ```
/// use u_mtsp::anneal::MoveUsage;
/// use u_mtsp::moves::MoveKind;
///
/// let mut usage = MoveUsage::default();
/// usage.record(MoveKind::InsertNodeInRoute);
/// usage.record(MoveKind::InsertNodeInRoute);
/// assert_eq!(usage.get(MoveKind::InsertNodeInRoute), 2);
/// assert_eq!(usage.total(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveUsage {
    /// Accepted [`MoveKind::SwapNodesInRoute`] trials.
    pub swap_nodes_in_route: usize,
    /// Accepted [`MoveKind::SwapHubWithNodeInRoute`] trials.
    pub swap_hub_with_node_in_route: usize,
    /// Accepted [`MoveKind::SwapNodesBetweenRoutes`] trials.
    pub swap_nodes_between_routes: usize,
    /// Accepted [`MoveKind::InsertNodeInRoute`] trials.
    pub insert_node_in_route: usize,
    /// Accepted [`MoveKind::InsertNodeBetweenRoutes`] trials.
    pub insert_node_between_routes: usize,
}

impl MoveUsage {
    fn counter_mut(&mut self, kind: MoveKind) -> &mut usize {
        match kind {
            MoveKind::SwapNodesInRoute => &mut self.swap_nodes_in_route,
            MoveKind::SwapHubWithNodeInRoute => &mut self.swap_hub_with_node_in_route,
            MoveKind::SwapNodesBetweenRoutes => &mut self.swap_nodes_between_routes,
            MoveKind::InsertNodeInRoute => &mut self.insert_node_in_route,
            MoveKind::InsertNodeBetweenRoutes => &mut self.insert_node_between_routes,
        }
    }

    /// Counts one accepted trial of `kind`.
    pub fn record(&mut self, kind: MoveKind) {
        *self.counter_mut(kind) += 1;
    }

    /// Accepted trials of `kind`.
    pub fn get(&self, kind: MoveKind) -> usize {
        match kind {
            MoveKind::SwapNodesInRoute => self.swap_nodes_in_route,
            MoveKind::SwapHubWithNodeInRoute => self.swap_hub_with_node_in_route,
            MoveKind::SwapNodesBetweenRoutes => self.swap_nodes_between_routes,
            MoveKind::InsertNodeInRoute => self.insert_node_in_route,
            MoveKind::InsertNodeBetweenRoutes => self.insert_node_between_routes,
        }
    }

    /// Accepted trials over all kinds.
    pub fn total(&self) -> usize {
        MoveKind::ALL.iter().map(|&k| self.get(k)).sum()
    }

    /// `(kind, count)` pairs in [`MoveKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveKind, usize)> + '_ {
        MoveKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Serializes the counters as a JSON object.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut usage = MoveUsage::default();
        for (i, kind) in MoveKind::ALL.into_iter().enumerate() {
            for _ in 0..=i {
                usage.record(kind);
            }
        }
        assert_eq!(usage.get(MoveKind::SwapNodesInRoute), 1);
        assert_eq!(usage.get(MoveKind::InsertNodeBetweenRoutes), 5);
        assert_eq!(usage.total(), 15);
        let counts: Vec<usize> = usage.iter().map(|(_, c)| c).collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serialized_keys_match_move_names() {
        let mut usage = MoveUsage::default();
        usage.record(MoveKind::SwapHubWithNodeInRoute);
        let value = serde_json::to_value(usage).expect("serializable");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), MoveKind::COUNT);
        for kind in MoveKind::ALL {
            assert_eq!(
                object[kind.name()].as_u64(),
                Some(usage.get(kind) as u64),
                "{kind}"
            );
        }
    }
}
