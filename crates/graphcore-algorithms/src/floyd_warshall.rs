//! All-pairs shortest paths (Floyd-Warshall)
//!
//! Dense `n × n` relaxation: O(n³) time, O(n²) space. Meant for small or dense
//! graphs; sparse single-source queries belong to Bellman-Ford or Dijkstra.

use super::common::Weight;
use super::distance::Distance;
use super::error::{AlgoError, AlgoResult};
use ndarray::{Array2, ArrayView1, Axis};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Floyd-Warshall configuration
#[derive(Debug, Clone)]
pub struct FloydWarshallConfig {
    /// Vertex count at or above which the rows of each `k` iteration are
    /// relaxed on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for FloydWarshallConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 256,
        }
    }
}

/// Shortest distance between every ordered pair of vertices `0..n`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    dist: Array2<Distance>,
}

impl DistanceMatrix {
    pub fn vertex_count(&self) -> usize {
        self.dist.nrows()
    }

    /// Distance from `i` to `j`; out-of-range indices read as unreachable.
    pub fn get(&self, i: usize, j: usize) -> Distance {
        self.dist.get((i, j)).copied().unwrap_or(Distance::INFINITY)
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, Distance> {
        self.dist.row(i)
    }

    pub fn as_array(&self) -> &Array2<Distance> {
        &self.dist
    }

    /// Every ordered pair, row-major
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), Distance)> + '_ {
        self.dist.indexed_iter().map(|(pair, &d)| (pair, d))
    }

    /// The `(i, j) -> distance` mapping, unreachable pairs included.
    pub fn to_map(&self) -> HashMap<(usize, usize), Distance> {
        self.iter().collect()
    }
}

/// Floyd-Warshall with the default configuration.
///
/// `edge_lengths` maps `(from, to)` to an edge length. A self-loop only
/// replaces the zero diagonal when it is negative.
pub fn shortest_path_lengths_floyd_warshall(
    vertex_count: usize,
    edge_lengths: &HashMap<(usize, usize), Weight>,
) -> AlgoResult<DistanceMatrix> {
    floyd_warshall(vertex_count, edge_lengths, &FloydWarshallConfig::default())
}

/// Floyd-Warshall all-pairs shortest path lengths.
///
/// Fails with [`AlgoError::VertexOutOfRange`] when an edge addresses a vertex
/// outside `0..vertex_count`.
pub fn floyd_warshall(
    vertex_count: usize,
    edge_lengths: &HashMap<(usize, usize), Weight>,
    config: &FloydWarshallConfig,
) -> AlgoResult<DistanceMatrix> {
    let n = vertex_count;
    let mut dist = Array2::from_elem((n, n), Distance::INFINITY);
    for i in 0..n {
        dist[[i, i]] = Distance::ZERO;
    }

    for (&(i, j), &length) in edge_lengths {
        for index in [i, j] {
            if index >= n {
                return Err(AlgoError::VertexOutOfRange { index, vertex_count: n });
            }
        }
        let direct = Distance::new(length);
        if i != j || direct < dist[[i, j]] {
            dist[[i, j]] = direct;
        }
    }

    let parallel = n >= config.parallel_threshold;
    debug!(
        "Floyd-Warshall over {} vertices, {} edges (parallel: {})",
        n,
        edge_lengths.len(),
        parallel
    );

    if parallel {
        relax_parallel(&mut dist);
    } else {
        relax_sequential(&mut dist);
    }

    Ok(DistanceMatrix { dist })
}

fn relax_sequential(dist: &mut Array2<Distance>) {
    let n = dist.nrows();
    for k in 0..n {
        for i in 0..n {
            let via = dist[[i, k]];
            if via.is_infinite() {
                continue;
            }
            for j in 0..n {
                // `+` short-circuits when either side is the sentinel
                let candidate = via + dist[[k, j]];
                if candidate < dist[[i, j]] {
                    dist[[i, j]] = candidate;
                }
            }
        }
    }
}

// Row `k` and column `k` are snapshotted before each round, so rows can be
// relaxed independently. Without negative cycles neither changes during round
// `k`, and the result equals the sequential one.
fn relax_parallel(dist: &mut Array2<Distance>) {
    let n = dist.nrows();
    for k in 0..n {
        let row_k: Vec<Distance> = dist.row(k).to_vec();
        let col_k: Vec<Distance> = dist.column(k).to_vec();

        dist.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, mut row)| {
                let via = col_k[i];
                if via.is_infinite() {
                    return;
                }
                for (cell, &tail) in row.iter_mut().zip(row_k.iter()) {
                    let candidate = via + tail;
                    if candidate < *cell {
                        *cell = candidate;
                    }
                }
            });
    }
}
