// src/rank/surfer.rs
//! Random-surfer simulation: a teleporting walk tallying visit frequency.
//!
//! Stochastic estimator of the same stationary distribution the Markov-chain
//! simulator computes exactly. The RNG is injected by the caller, so tests
//! run against a fixed-seed `ChaCha8Rng` and stay deterministic.

use rand::Rng;

use crate::graph::DotGraph;
use crate::rank::{entries_from_scores, RankEntry};

/// Walks `steps` transitions and scores each node by visit frequency.
///
/// Each step teleports to a uniformly random node with probability
/// `teleport_prob`, and otherwise follows a uniformly random out-edge of the
/// current node. A node without out-edges forces a teleport. The node landed
/// on after each step is counted; visit counts partition `steps` exactly, so
/// for `steps >= 1` the returned scores sum to 1.
///
/// A graph with zero nodes or a walk of zero steps yields an empty result.
pub fn simulate_random_surfer<R: Rng>(
    graph: &DotGraph,
    steps: u64,
    teleport_prob: f64,
    rng: &mut R,
) -> Vec<RankEntry> {
    let n = graph.node_count();
    if n == 0 || steps == 0 {
        return Vec::new();
    }

    let mut visits = vec![0u64; n];
    let mut current = rng.random_range(0..n);

    for _ in 0..steps {
        let teleport = rng.random::<f64>() < teleport_prob;
        current = if teleport || graph.out_degree(current) == 0 {
            rng.random_range(0..n)
        } else {
            let pick = rng.random_range(0..graph.out_degree(current));
            match graph.out_neighbors(current).nth(pick) {
                Some(next) => next,
                // Degree counter out of sync with adjacency; treat as dangling.
                None => rng.random_range(0..n),
            }
        };
        visits[current] += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let scores: Vec<f64> = visits.iter().map(|&v| v as f64 / steps as f64).collect();
    entries_from_scores(graph, &scores)
}
