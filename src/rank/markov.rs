// src/rank/markov.rs
//! Exact power iteration over the teleporting-surfer transition model.

use crate::graph::DotGraph;
use crate::rank::{entries_from_scores, RankEntry};

/// Runs `steps` power-iteration updates and scores each node by its final
/// probability mass.
///
/// Starts from the uniform vector, so `steps == 0` returns exactly
/// `1/node_count` per node. Each update distributes `(1 - p) * prob[i] /
/// out_degree(i)` along node i's out-edges, pools the mass of dangling nodes,
/// and spreads teleportation plus the pooled dangling mass uniformly. The
/// vector is renormalized after every update, so it sums to 1 throughout.
///
/// A graph with zero nodes yields an empty result.
pub fn simulate_markov_chain(graph: &DotGraph, steps: u64, teleport_prob: f64) -> Vec<RankEntry> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let n_f64 = n as f64;
    let mut prob = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];

    for _ in 0..steps {
        next.fill(0.0);
        let mut dangling = 0.0;

        for i in 0..n {
            let degree = graph.out_degree(i);
            if degree == 0 {
                dangling += prob[i];
            } else {
                #[allow(clippy::cast_precision_loss)]
                let share = (1.0 - teleport_prob) * prob[i] / degree as f64;
                for j in graph.out_neighbors(i) {
                    next[j] += share;
                }
            }
        }

        let uniform = (teleport_prob + dangling) / n_f64;
        for entry in next.iter_mut() {
            *entry += uniform;
        }

        normalize(&mut next);
        std::mem::swap(&mut prob, &mut next);
    }

    entries_from_scores(graph, &prob)
}

fn normalize(probs: &mut [f64]) {
    let total: f64 = probs.iter().sum();
    if total > 0.0 {
        for p in probs.iter_mut() {
            *p /= total;
        }
    }
}
