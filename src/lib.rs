//!
//! rustflow-ek solves [maximum flow problem](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! of integer capacity by Edmonds-Karp algorithm on a dense capacity matrix.
//!
//! ```
//! use rustflow_ek::max_flow::FlowNetwork;
//!
//! let mut network = FlowNetwork::new(4).unwrap();
//! network.add_edge(0, 1, 3).unwrap();
//! network.add_edge(0, 2, 2).unwrap();
//! network.add_edge(1, 3, 2).unwrap();
//! network.add_edge(2, 3, 3).unwrap();
//! assert_eq!(network.max_flow(0, 3), Ok(4));
//! assert_eq!(network.min_cut(0).unwrap().capacity(), 4);
//! ```
//!
pub mod config;
pub mod max_flow;
