//! Flow network definitions
//! - FlowNetwork
//!
//! A network owns two dense matrices:
//! - capacity `c(u, v)`, built once by `add_edge` or bulk assignment
//! - residual `r(u, v)`, reset to a copy of capacity at the start of every max-flow run
//!
//! The sum of all capacities always fits in `Capacity`. Every residual entry, flow value
//! and cut capacity is bounded by that sum, so none of them can overflow.
//!
use super::error::{FlowError, Result};
use super::matrix::Matrix;
use super::Capacity;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNetwork {
    pub(super) n: usize,
    pub(super) capacity: Matrix,
    pub(super) residual: Matrix,
    /// sum of all entries of `capacity`
    total_capacity: Capacity,
}

impl FlowNetwork {
    ///
    /// Network of `n` vertices without any edges
    ///
    pub fn new(n: usize) -> Result<FlowNetwork> {
        if n == 0 {
            return Err(FlowError::InvalidSize(n));
        }
        Ok(FlowNetwork {
            n,
            capacity: Matrix::zeros(n),
            residual: Matrix::zeros(n),
            total_capacity: 0,
        })
    }

    ///
    /// Build from a square capacity matrix `rows[u][v] = c(u, v)`.
    ///
    /// The whole matrix is validated before the network is created.
    ///
    pub fn from_capacity_matrix(rows: Vec<Vec<Capacity>>) -> Result<FlowNetwork> {
        let n = rows.len();
        let mut network = FlowNetwork::new(n)?;
        let mut total_capacity: Capacity = 0;
        for (u, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(FlowError::NonSquareMatrix {
                    row: u,
                    len: row.len(),
                    n,
                });
            }
            for (v, &capacity) in row.iter().enumerate() {
                if capacity < 0 {
                    return Err(FlowError::InvalidCapacity { u, v, capacity });
                }
                if u == v && capacity != 0 {
                    return Err(FlowError::SelfLoop(u));
                }
                total_capacity = total_capacity
                    .checked_add(capacity)
                    .ok_or(FlowError::CapacityOverflow { u, v })?;
            }
        }
        for (u, row) in rows.iter().enumerate() {
            for (v, &capacity) in row.iter().enumerate() {
                network.capacity[(u, v)] = capacity;
            }
        }
        network.residual = network.capacity.clone();
        network.total_capacity = total_capacity;
        Ok(network)
    }

    ///
    /// Build from a petgraph DiGraph whose edge weight is the capacity.
    ///
    /// Parallel edges are summed up.
    ///
    pub fn from_graph<N>(graph: &DiGraph<N, Capacity>) -> Result<FlowNetwork> {
        let mut network = FlowNetwork::new(graph.node_count())?;
        for er in graph.edge_references() {
            network.add_edge(er.source().index(), er.target().index(), *er.weight())?;
        }
        Ok(network)
    }

    ///
    /// Add `cap` to the capacity (and the residual capacity) of `u -> v`.
    ///
    /// The insertion is additive, and the reverse edge `v -> u` is left as it is.
    /// Fails with `CapacityOverflow` if the sum of all capacities would overflow.
    ///
    pub fn add_edge(&mut self, u: usize, v: usize, cap: Capacity) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(FlowError::SelfLoop(u));
        }
        if cap < 0 {
            return Err(FlowError::InvalidCapacity {
                u,
                v,
                capacity: cap,
            });
        }
        self.total_capacity = self
            .total_capacity
            .checked_add(cap)
            .ok_or(FlowError::CapacityOverflow { u, v })?;
        // r(u, v) <= c(u, v) + c(v, u) <= total_capacity before and after the insertion
        self.capacity[(u, v)] += cap;
        self.residual[(u, v)] += cap;
        Ok(())
    }

    /// number of vertices
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn capacity(&self) -> &Matrix {
        &self.capacity
    }
    pub fn residual(&self) -> &Matrix {
        &self.residual
    }
    /// sum of the capacities of all edges
    pub fn total_capacity(&self) -> Capacity {
        self.total_capacity
    }
    pub fn capacity_of(&self, u: usize, v: usize) -> Result<Capacity> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.capacity[(u, v)])
    }
    pub fn residual_of(&self, u: usize, v: usize) -> Result<Capacity> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.residual[(u, v)])
    }
    ///
    /// Number of ordered pairs with positive capacity
    ///
    pub fn edge_count(&self) -> usize {
        self.capacity.iter_nonzero().count()
    }

    pub(super) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.n {
            Ok(())
        } else {
            Err(FlowError::InvalidVertex { vertex, n: self.n })
        }
    }

    ///
    /// Validation shared by every source/sink query
    ///
    pub(super) fn check_query(&self, source: usize, sink: usize) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        if source == sink {
            return Err(FlowError::DisconnectedQuery(source));
        }
        Ok(())
    }
}
