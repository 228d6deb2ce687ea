//!
//! Minimum s-t cut derived from a saturated residual graph
//!
use super::error::Result;
use super::network::FlowNetwork;
use super::Capacity;

///
/// Partition of the vertices into the source side and the sink side
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    source_side: Vec<bool>,
    edges: Vec<(usize, usize)>,
    capacity: Capacity,
}

impl MinCut {
    pub fn is_source_side(&self, v: usize) -> bool {
        self.source_side.get(v).copied().unwrap_or(false)
    }
    pub fn source_vertices(&self) -> Vec<usize> {
        (0..self.source_side.len())
            .filter(|&v| self.source_side[v])
            .collect()
    }
    pub fn sink_vertices(&self) -> Vec<usize> {
        (0..self.source_side.len())
            .filter(|&v| !self.source_side[v])
            .collect()
    }
    /// edges (u, v) with u on the source side and v on the sink side
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
    /// total capacity of the crossing edges
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

impl FlowNetwork {
    ///
    /// Cut whose source side is the set of vertices reachable from `source`
    /// in the current residual graph.
    ///
    /// It is a minimum cut (and its capacity equals the max flow) only after
    /// `max_flow` has saturated the network.
    ///
    pub fn min_cut(&self, source: usize) -> Result<MinCut> {
        self.check_vertex(source)?;
        let source_side = self.reachable_from(source);
        let edges: Vec<(usize, usize)> = self
            .capacity
            .iter_nonzero()
            .filter(|&(u, v, _)| source_side[u] && !source_side[v])
            .map(|(u, v, _)| (u, v))
            .collect();
        let capacity = edges.iter().map(|&(u, v)| self.capacity[(u, v)]).sum();
        Ok(MinCut {
            source_side,
            edges,
            capacity,
        })
    }
}
