// src/rank/mod.rs
//! Node ranking shared across simulators.
//!
//! Both simulators hand back per-node scores; this module turns them into
//! rank entries ordered by node identifier. The sort key is always the
//! identifier, never the score, so ties in score cannot reorder output.

pub mod markov;
pub mod surfer;

use serde::Serialize;

use crate::graph::DotGraph;

/// One node's result from a simulation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub id: String,
    pub score: f64,
}

/// Orders rank entries by byte-lexicographic identifier comparison.
#[must_use]
pub fn rank_by_identifier(mut entries: Vec<RankEntry>) -> Vec<RankEntry> {
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    entries
}

/// Pairs index-addressed scores with their node identifiers and sorts.
pub(crate) fn entries_from_scores(graph: &DotGraph, scores: &[f64]) -> Vec<RankEntry> {
    let entries = graph
        .nodes()
        .iter()
        .zip(scores)
        .map(|(node, &score)| RankEntry {
            id: node.id.clone(),
            score,
        })
        .collect();
    rank_by_identifier(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, score: f64) -> RankEntry {
        RankEntry {
            id: id.to_string(),
            score,
        }
    }

    #[test]
    fn orders_by_identifier_not_score() {
        let ranked = rank_by_identifier(vec![
            entry("zeta", 0.9),
            entry("alpha", 0.1),
            entry("mid", 0.5),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn byte_comparison_puts_uppercase_first() {
        let ranked = rank_by_identifier(vec![entry("a", 0.0), entry("B", 0.0)]);
        let ids: Vec<&str> = ranked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "a"]);
    }
}
