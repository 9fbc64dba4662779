//! Random graph generation for benchmarks and randomized checks

use super::common::{NodeId, Weight, WeightedEdge};
use rand::Rng;
use std::ops::RangeInclusive;

/// `edge_count` directed edges between nodes `0..node_count` with weights
/// drawn from `weights`. Self-loops and parallel edges may appear.
pub fn random_weighted_edges<R: Rng>(
    rng: &mut R,
    node_count: usize,
    edge_count: usize,
    weights: RangeInclusive<Weight>,
) -> Vec<WeightedEdge> {
    if node_count == 0 {
        return Vec::new();
    }
    (0..edge_count)
        .map(|_| {
            let source = rng.gen_range(0..node_count) as NodeId;
            let target = rng.gen_range(0..node_count) as NodeId;
            let weight = rng.gen_range(weights.clone());
            WeightedEdge::new(source, target, weight)
        })
        .collect()
}

/// Random DAG: every edge goes from a lower to a higher node id.
pub fn random_dag_edges<R: Rng>(
    rng: &mut R,
    node_count: usize,
    edge_count: usize,
) -> Vec<WeightedEdge> {
    if node_count < 2 {
        return Vec::new();
    }
    (0..edge_count)
        .map(|_| {
            let a = rng.gen_range(0..node_count);
            let mut b = rng.gen_range(0..node_count - 1);
            if b >= a {
                b += 1;
            }
            let (source, target) = if a < b { (a, b) } else { (b, a) };
            WeightedEdge::new(source as NodeId, target as NodeId, 1)
        })
        .collect()
}
