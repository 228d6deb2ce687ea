//!
//! JSON description of a max-flow query
//!
//! ```text
//! { "vertices": 6, "edges": [[0, 1, 16], [0, 2, 13]], "source": 0, "sink": 5 }
//! ```
//!
use crate::max_flow::{Capacity, FlowError, FlowNetwork};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid network description: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Flow(#[from] FlowError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub vertices: usize,
    /// `(u, v, capacity)`
    pub edges: Vec<(usize, usize, Capacity)>,
    pub source: usize,
    pub sink: usize,
}

impl NetworkConfig {
    pub fn from_json_str(s: &str) -> Result<NetworkConfig, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<NetworkConfig, ConfigError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        NetworkConfig::from_json_str(&s)
    }

    pub fn to_network(&self) -> Result<FlowNetwork, ConfigError> {
        let mut network = FlowNetwork::new(self.vertices)?;
        for &(u, v, c) in self.edges.iter() {
            network.add_edge(u, v, c)?;
        }
        Ok(network)
    }
}
