//!
//! utils
//!
//! petgraph views of a `FlowNetwork` for the drawing side.
//! Node weight is the vertex index.
//!
use super::matrix::Matrix;
use super::network::FlowNetwork;
use super::Capacity;
use log::debug;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

///
/// Convert a matrix into a DiGraph with an edge `u -> v` for each positive entry
///
pub fn to_graph(matrix: &Matrix) -> DiGraph<usize, Capacity> {
    let mut graph = DiGraph::new();
    for v in 0..matrix.size() {
        graph.add_node(v);
    }
    for (u, v, c) in matrix.iter_nonzero() {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), c);
    }
    graph
}

///
/// Capacity graph whose edges are labeled with `"flow/capacity"`
///
pub fn to_flow_graph(network: &FlowNetwork) -> DiGraph<usize, String> {
    let mut graph = DiGraph::new();
    for v in 0..network.n() {
        graph.add_node(v);
    }
    for (u, v, _) in network.capacity().iter_nonzero() {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), network.label(u, v));
    }
    graph
}

pub fn capacity_dot(network: &FlowNetwork) -> String {
    format!("{}", Dot::new(&to_graph(network.capacity())))
}

pub fn flow_dot(network: &FlowNetwork) -> String {
    format!("{}", Dot::new(&to_flow_graph(network)))
}

pub fn residual_dot(network: &FlowNetwork) -> String {
    format!("{}", Dot::new(&to_graph(network.residual())))
}

///
/// dump capacity, flow and residual graphs into the debug log
///
pub fn draw(network: &FlowNetwork) {
    debug!("capacity\n{}", capacity_dot(network));
    debug!("flow\n{}", flow_dot(network));
    debug!("residual\n{}", residual_dot(network));
}
