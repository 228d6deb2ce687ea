//! mock networks for tests and the binary
use super::network::FlowNetwork;
use super::Capacity;

fn network_from_edges(n: usize, edges: &[(usize, usize, Capacity)]) -> FlowNetwork {
    let mut network = FlowNetwork::new(n).expect("mock network size is positive");
    for &(u, v, c) in edges {
        network
            .add_edge(u, v, c)
            .expect("mock network edges are valid");
    }
    network
}

/// mock network cited from Introduction to Algorithms (CLRS) Figure 26.1, max flow 0->5 is 23
pub fn mock_clrs_network() -> FlowNetwork {
    network_from_edges(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (1, 3, 12),
            (2, 4, 14),
            (3, 5, 20),
            (4, 3, 7),
            (4, 5, 4),
        ],
    )
}

/// two layers of middle vertices, max flow 0->5 is 16 (cut {0, 2})
pub fn mock_two_layer_network() -> FlowNetwork {
    network_from_edges(
        6,
        &[
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 3, 6),
            (3, 5, 10),
            (4, 5, 10),
        ],
    )
}

/// 0->1 and 2->3 with no connection in between
pub fn mock_disconnected_network() -> FlowNetwork {
    network_from_edges(4, &[(0, 1, 3), (2, 3, 3)])
}

/// 1->2 and 2->1 both have capacity, max flow 0->3 is 5
pub fn mock_antiparallel_network() -> FlowNetwork {
    network_from_edges(
        4,
        &[(0, 1, 5), (1, 2, 3), (2, 1, 1), (1, 3, 3), (2, 3, 2)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_networks_are_well_formed() {
        let network = mock_clrs_network();
        assert_eq!(network.n(), 6);
        assert_eq!(network.edge_count(), 8);
        assert_eq!(mock_two_layer_network().edge_count(), 7);
        assert_eq!(mock_disconnected_network().edge_count(), 2);
        assert_eq!(mock_antiparallel_network().edge_count(), 5);
    }
}
