//!
//! Randomized checks of max flow against brute force on small networks
//!
use super::network::FlowNetwork;
use super::Capacity;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn random_edges(rng: &mut StdRng, n: usize) -> Vec<(usize, usize, Capacity)> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v && rng.gen_bool(0.4) {
                edges.push((u, v, rng.gen_range(1..10)));
            }
        }
    }
    edges
}

fn build(n: usize, edges: &[(usize, usize, Capacity)]) -> FlowNetwork {
    let mut network = FlowNetwork::new(n).unwrap();
    for &(u, v, c) in edges {
        network.add_edge(u, v, c).unwrap();
    }
    network
}

///
/// minimum capacity over all `2^(n-2)` cuts separating `s` and `t`
///
fn brute_force_min_cut(network: &FlowNetwork, s: usize, t: usize) -> Capacity {
    let n = network.n();
    let others: Vec<usize> = (0..n).filter(|&v| v != s && v != t).collect();
    (0..(1usize << others.len()))
        .map(|mask| {
            let mut source_side = vec![false; n];
            source_side[s] = true;
            for (i, &v) in others.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    source_side[v] = true;
                }
            }
            network
                .capacity()
                .iter_nonzero()
                .filter(|&(u, v, _)| source_side[u] && !source_side[v])
                .map(|(_, _, c)| c)
                .sum::<Capacity>()
        })
        .min()
        .unwrap()
}

#[test]
fn max_flow_equals_brute_force_min_cut() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let n = rng.gen_range(2..=7);
        let mut network = build(n, &random_edges(&mut rng, n));
        let total = network.max_flow(0, n - 1).unwrap();
        assert_eq!(total, brute_force_min_cut(&network, 0, n - 1));
        assert_eq!(network.min_cut(0).unwrap().capacity(), total);
        assert_eq!(network.flow_value(0), Ok(total));
    }
}

#[test]
fn max_flow_is_invariant_under_relabeling() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let n = rng.gen_range(2..=7);
        let edges = random_edges(&mut rng, n);
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut rng);
        let relabeled: Vec<_> = edges.iter().map(|&(u, v, c)| (perm[u], perm[v], c)).collect();

        let total = build(n, &edges).max_flow(0, n - 1).unwrap();
        let relabeled_total = build(n, &relabeled)
            .max_flow(perm[0], perm[n - 1])
            .unwrap();
        assert_eq!(total, relabeled_total);
    }
}

#[test]
fn every_intermediate_flow_is_valid() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let n = rng.gen_range(3..=7);
        let mut network = build(n, &random_edges(&mut rng, n));
        let sink = n - 1;
        let total = network
            .max_flow_with(0, sink, |step, network| {
                assert!(step.path_flow > 0);
                assert_eq!(step.path.first(), Some(&0));
                assert_eq!(step.path.last(), Some(&sink));
                assert!(network.is_valid_flow(0, sink));
                assert_eq!(network.flow_value(0), Ok(step.total));
                for u in 0..n {
                    for v in 0..n {
                        // residual pair sum equals capacity pair sum
                        assert_eq!(
                            network.residual()[(u, v)] + network.residual()[(v, u)],
                            network.capacity()[(u, v)] + network.capacity()[(v, u)]
                        );
                    }
                }
            })
            .unwrap();
        // re-query gives the same answer
        assert_eq!(network.max_flow(0, sink), Ok(total));
    }
}

#[test]
fn number_of_searches_is_bounded() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let n = rng.gen_range(2..=7);
        let mut network = build(n, &random_edges(&mut rng, n));
        let sink = n - 1;
        let e = network.edge_count();

        network.reset_residual();
        let mut searches = 0;
        let mut total = 0;
        loop {
            searches += 1;
            match network.step(0, sink).unwrap() {
                Some(augmentation) => total += augmentation.path_flow,
                None => break,
            }
        }
        // V*E/2 augmenting searches, plus the final one that finds nothing
        assert!(searches <= (n * e / 2).max(1) + 1);
        assert_eq!(network.max_flow(0, sink), Ok(total));
    }
}
