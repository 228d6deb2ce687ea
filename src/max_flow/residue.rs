//! Residual graph related definitions
//! - ParentMap
//! - Augmentation
//!
//! The residual graph is not materialized:
//! an edge `u -> v` exists in it iff `residual[(u, v)] > 0`.
//!
use super::error::Result;
use super::network::FlowNetwork;
use super::Capacity;
use itertools::Itertools; // for tuple_windows
use log::trace;
use std::collections::VecDeque;

///
/// BFS tree found by `find_augmenting_path`
///
/// `parent[v]` is the predecessor of `v`, or `None` if `v` was not reached (or `v` is the source).
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap {
    source: usize,
    sink: usize,
    parent: Vec<Option<usize>>,
}

impl ParentMap {
    pub fn source(&self) -> usize {
        self.source
    }
    pub fn sink(&self) -> usize {
        self.sink
    }
    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parent.get(v).copied().flatten()
    }
    ///
    /// Vertices of the augmenting path, from source to sink
    ///
    pub fn path(&self) -> Vec<usize> {
        let mut path = vec![self.sink];
        let mut v = self.sink;
        while v != self.source {
            let u = self.parent[v].expect("parent map does not reach the source");
            path.push(u);
            v = u;
        }
        path.reverse();
        path
    }
    ///
    /// Edges `(u, v)` of the augmenting path, from source to sink
    ///
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.path().into_iter().tuple_windows().collect()
    }
}

///
/// Result of a single augmenting step
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// vertices of the augmenting path, from source to sink
    pub path: Vec<usize>,
    /// bottleneck pushed along the path
    pub path_flow: Capacity,
}

impl FlowNetwork {
    ///
    /// Forget all flow: residual = capacity
    ///
    pub fn reset_residual(&mut self) {
        self.residual = self.capacity.clone();
    }

    ///
    /// Find the shortest (fewest edges) augmenting path from `source` to `sink`
    /// by BFS on the residual graph.
    ///
    /// Neighbors are scanned in increasing index order,
    /// and the search stops as soon as `sink` is discovered.
    /// Returns `None` if no augmenting path exists.
    ///
    pub fn find_augmenting_path(&self, source: usize, sink: usize) -> Result<Option<ParentMap>> {
        self.check_query(source, sink)?;

        let mut parent = vec![None; self.n];
        let mut visited = vec![false; self.n];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = queue.pop_front() {
            trace!("bfs visit {}", u);
            for (v, &r) in self.residual.row(u).iter().enumerate() {
                if visited[v] || r <= 0 {
                    continue;
                }
                parent[v] = Some(u);
                visited[v] = true;
                if v == sink {
                    return Ok(Some(ParentMap {
                        source,
                        sink,
                        parent,
                    }));
                }
                queue.push_back(v);
            }
        }
        Ok(None)
    }

    ///
    /// Push the bottleneck amount of flow along the path described by `parent_map`,
    /// and return the amount.
    ///
    /// For each path edge `u -> v`, `r(u, v)` decreases and `r(v, u)` increases by the bottleneck.
    ///
    /// # Panics
    ///
    /// if `parent_map` does not describe a source-sink path with positive residual on every edge
    /// of this network, e.g. a parent map taken before the residual was changed.
    ///
    pub fn augment_along(&mut self, parent_map: &ParentMap) -> Capacity {
        assert!(
            parent_map.parent.len() == self.n,
            "parent map (len={}) does not match network (n={})",
            parent_map.parent.len(),
            self.n
        );
        let edges = parent_map.edges();

        // (1) bottleneck
        let path_flow = edges
            .iter()
            .map(|&(u, v)| self.residual[(u, v)])
            .min()
            .expect("augmenting path has no edge");
        assert!(
            path_flow > 0,
            "augmenting path {:?} has no residual capacity",
            parent_map.path()
        );

        // (2) move the flow and credit the reverse edges
        for &(u, v) in edges.iter() {
            self.residual[(u, v)] -= path_flow;
            self.residual[(v, u)] += path_flow;
        }
        path_flow
    }

    ///
    /// Run a single BFS + augment on the current residual graph.
    ///
    /// The residual is not reset, so repeated calls continue from where the last call stopped.
    ///
    pub fn step(&mut self, source: usize, sink: usize) -> Result<Option<Augmentation>> {
        match self.find_augmenting_path(source, sink)? {
            Some(parent_map) => {
                let path_flow = self.augment_along(&parent_map);
                Ok(Some(Augmentation {
                    path: parent_map.path(),
                    path_flow,
                }))
            }
            None => Ok(None),
        }
    }

    ///
    /// vertices reachable from `source` via positive residual edges
    ///
    pub(super) fn reachable_from(&self, source: usize) -> Vec<bool> {
        let mut visited = vec![false; self.n];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;
        while let Some(u) = queue.pop_front() {
            for (v, &r) in self.residual.row(u).iter().enumerate() {
                if !visited[v] && r > 0 {
                    visited[v] = true;
                    queue.push_back(v);
                }
            }
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::super::error::FlowError;
    use super::super::mocks::{mock_clrs_network, mock_disconnected_network};
    use super::*;

    #[test]
    fn bfs_finds_shortest_path_first() {
        let network = mock_clrs_network();
        let parent_map = network.find_augmenting_path(0, 5).unwrap().unwrap();
        assert_eq!(parent_map.source(), 0);
        assert_eq!(parent_map.sink(), 5);
        // 0 -> 1 -> 3 -> 5 is the lowest-index path of length 3
        assert_eq!(parent_map.path(), vec![0, 1, 3, 5]);
        assert_eq!(parent_map.edges(), vec![(0, 1), (1, 3), (3, 5)]);
        assert_eq!(parent_map.parent(3), Some(1));
        assert_eq!(parent_map.parent(0), None);
        assert_eq!(parent_map.parent(100), None);
    }

    #[test]
    fn bfs_without_path() {
        let network = mock_disconnected_network();
        assert_eq!(network.find_augmenting_path(0, 3), Ok(None));
    }

    #[test]
    fn bfs_validation() {
        let network = mock_clrs_network();
        assert_eq!(
            network.find_augmenting_path(0, 6),
            Err(FlowError::InvalidVertex { vertex: 6, n: 6 })
        );
        assert_eq!(
            network.find_augmenting_path(2, 2),
            Err(FlowError::DisconnectedQuery(2))
        );
    }

    #[test]
    fn augment_updates_residual_pairs() {
        let mut network = mock_clrs_network();
        let parent_map = network.find_augmenting_path(0, 5).unwrap().unwrap();
        let path_flow = network.augment_along(&parent_map);
        // min(16, 12, 20)
        assert_eq!(path_flow, 12);
        assert_eq!(network.residual_of(0, 1), Ok(4));
        assert_eq!(network.residual_of(1, 0), Ok(12));
        assert_eq!(network.residual_of(1, 3), Ok(0));
        assert_eq!(network.residual_of(3, 1), Ok(12));
        assert_eq!(network.residual_of(3, 5), Ok(8));
        assert_eq!(network.residual_of(5, 3), Ok(12));
        // untouched edge
        assert_eq!(network.residual_of(0, 2), Ok(13));
        // capacity never changes
        assert_eq!(network.capacity_of(1, 3), Ok(12));
    }

    #[test]
    #[should_panic]
    fn augment_with_stale_parent_map() {
        let mut network = mock_clrs_network();
        let parent_map = network.find_augmenting_path(0, 5).unwrap().unwrap();
        network.augment_along(&parent_map);
        // (1, 3) is saturated now
        network.augment_along(&parent_map);
    }

    #[test]
    fn step_continues_without_reset() {
        let mut network = mock_clrs_network();
        let first = network.step(0, 5).unwrap().unwrap();
        assert_eq!(first.path, vec![0, 1, 3, 5]);
        assert_eq!(first.path_flow, 12);
        let second = network.step(0, 5).unwrap().unwrap();
        assert_eq!(second.path, vec![0, 2, 4, 5]);
        assert_eq!(second.path_flow, 4);
        let third = network.step(0, 5).unwrap().unwrap();
        assert_eq!(third.path, vec![0, 2, 4, 3, 5]);
        assert_eq!(third.path_flow, 7);
        assert_eq!(network.step(0, 5), Ok(None));

        network.reset_residual();
        assert_eq!(network.residual(), network.capacity());
    }

    #[test]
    fn reachable_set() {
        let network = mock_disconnected_network();
        assert_eq!(network.reachable_from(0), vec![true, true, false, false]);
    }
}
