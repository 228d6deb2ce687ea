//!
//! Errors raised while building or querying a `FlowNetwork`
//!
//! Every variant is an input-validation failure detected before any matrix is touched.
//!
use super::Capacity;

pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// vertex count must be positive
    #[error("invalid network size: {0} vertices")]
    InvalidSize(usize),

    #[error("vertex {vertex} is out of range for a network of {n} vertices")]
    InvalidVertex { vertex: usize, n: usize },

    #[error("invalid capacity {capacity} on edge {u}->{v}")]
    InvalidCapacity { u: usize, v: usize, capacity: Capacity },

    /// accumulated capacity of (u, v) does not fit in `Capacity`
    #[error("capacity overflow on edge {u}->{v}")]
    CapacityOverflow { u: usize, v: usize },

    #[error("self loop on vertex {0} is not a flow edge")]
    SelfLoop(usize),

    /// source == sink
    #[error("source and sink are the same vertex {0}")]
    DisconnectedQuery(usize),

    #[error("capacity matrix row {row} has {len} entries, expected {n}")]
    NonSquareMatrix { row: usize, len: usize, n: usize },
}
