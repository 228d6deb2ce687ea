pub mod cut;
pub mod error;
pub mod flow;
pub mod matrix;
pub mod mocks;
pub mod network;
pub mod residue;
pub mod utils;

#[cfg(test)]
mod properties;

pub use cut::MinCut;
pub use error::{FlowError, Result};
pub use matrix::Matrix;
pub use network::FlowNetwork;
pub use residue::{Augmentation, ParentMap};

use log::{debug, info};

/// Capacity (and flow amount) of an edge
pub type Capacity = i64;

///
/// State after one augmentation of `max_flow_with`
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentStep {
    /// 1-based count of augmentations in this run
    pub iteration: usize,
    /// vertices of the augmenting path, from source to sink
    pub path: Vec<usize>,
    pub path_flow: Capacity,
    /// flow value after this augmentation
    pub total: Capacity,
}

//
// public functions
//

impl FlowNetwork {
    ///
    /// Find the maximum flow from `source` to `sink` by Edmonds-Karp.
    ///
    /// The residual is reset first, so calling it twice gives the same value.
    /// After it returns, the residual holds the max flow, and `min_cut(source)` gives the min cut.
    ///
    pub fn max_flow(&mut self, source: usize, sink: usize) -> Result<Capacity> {
        self.max_flow_with(source, sink, |_, _| {})
    }

    ///
    /// `max_flow` that calls `observer` with the network state after every augmentation
    ///
    pub fn max_flow_with<O>(
        &mut self,
        source: usize,
        sink: usize,
        mut observer: O,
    ) -> Result<Capacity>
    where
        O: FnMut(&AugmentStep, &FlowNetwork),
    {
        self.check_query(source, sink)?;
        self.reset_residual();

        let mut total: Capacity = 0;
        let mut iteration = 0;
        while let Some(augmentation) = self.step(source, sink)? {
            iteration += 1;
            total += augmentation.path_flow;
            debug!(
                "augment #{} path={:?} path_flow={} total={}",
                iteration, augmentation.path, augmentation.path_flow, total
            );
            let step = AugmentStep {
                iteration,
                path: augmentation.path,
                path_flow: augmentation.path_flow,
                total,
            };
            observer(&step, self);
        }

        info!(
            "max flow {}->{} = {} ({} augmentations)",
            source, sink, total, iteration
        );
        Ok(total)
    }
}
