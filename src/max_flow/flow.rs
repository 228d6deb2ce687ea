//! Flow read-out from the residual matrix
//!
//! The flow sent so far is never stored. It is derived as
//! `net_flow(u, v) = c(u, v) - r(u, v)`, which is antisymmetric
//! (`net_flow(u, v) == -net_flow(v, u)`) because augmentation moves residual
//! between `(u, v)` and `(v, u)` without changing their sum.
//!
use super::error::Result;
use super::matrix::Matrix;
use super::network::FlowNetwork;
use super::Capacity;

impl FlowNetwork {
    pub fn net_flow(&self, u: usize, v: usize) -> Result<Capacity> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.net(u, v))
    }

    ///
    /// Flow carried by the edge `u -> v`.
    ///
    /// it is 0 if there is no such edge, and is in `[0, c(u, v)]` otherwise.
    /// If both `u -> v` and `v -> u` have capacity, the net flow is put on
    /// the edge in the direction it goes.
    ///
    pub fn edge_flow(&self, u: usize, v: usize) -> Result<Capacity> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.carried(u, v))
    }

    ///
    /// `"flow/capacity"` label of the edge `u -> v`
    ///
    pub fn flow_label(&self, u: usize, v: usize) -> Result<String> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.label(u, v))
    }

    ///
    /// Net amount of flow leaving `source`
    ///
    pub fn flow_value(&self, source: usize) -> Result<Capacity> {
        self.check_vertex(source)?;
        Ok((0..self.n).map(|v| self.net(source, v)).sum())
    }

    fn net(&self, u: usize, v: usize) -> Capacity {
        self.capacity[(u, v)] - self.residual[(u, v)]
    }

    fn carried(&self, u: usize, v: usize) -> Capacity {
        if self.capacity[(u, v)] > 0 {
            self.net(u, v).max(0)
        } else {
            0
        }
    }

    pub(super) fn label(&self, u: usize, v: usize) -> String {
        format!("{}/{}", self.carried(u, v), self.capacity[(u, v)])
    }

    ///
    /// `edge_flow` of every ordered pair
    ///
    pub fn flow_matrix(&self) -> Matrix {
        let mut flow = Matrix::zeros(self.n);
        for (u, v, _) in self.capacity.iter_nonzero() {
            flow[(u, v)] = self.carried(u, v);
        }
        flow
    }

    ///
    /// Check if the current flow is valid, i.e. it satisfies
    /// - capacity constraint
    /// - flow constraint on every vertex other than source and sink
    ///
    pub fn is_valid_flow(&self, source: usize, sink: usize) -> bool {
        self.is_in_capacity() && self.is_satisfying_flow_constraint(source, sink)
    }

    ///
    /// For each edge, the flow must satisfy `0 <= flow <= capacity`,
    /// and no residual capacity is negative.
    ///
    pub fn is_in_capacity(&self) -> bool {
        let edges_ok = self.capacity.iter_nonzero().all(|(u, v, c)| {
            let f = self.carried(u, v);
            0 <= f && f <= c
        });
        let residual_ok = self.residual.rows().all(|row| row.iter().all(|&r| r >= 0));
        edges_ok && residual_ok
    }

    ///
    /// For each vertex except `source` and `sink`,
    /// (the sum of in-coming flows) should be equal to (the sum of out-going flows).
    ///
    pub fn is_satisfying_flow_constraint(&self, source: usize, sink: usize) -> bool {
        (0..self.n)
            .filter(|&v| v != source && v != sink)
            .all(|v| {
                let in_flow: Capacity = (0..self.n).map(|u| self.carried(u, v)).sum();
                let out_flow: Capacity = (0..self.n).map(|w| self.carried(v, w)).sum();
                in_flow == out_flow
            })
    }
}
