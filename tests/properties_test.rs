//! Randomized cross-checks between independent algorithms

use graphcore_algorithms::generate::{random_dag_edges, random_weighted_edges};
use graphcore_algorithms::{
    bellman_ford, component_count, detect_cycle, dijkstra, floyd_warshall, minimum_spanning_tree,
    shortest_path_dijkstra, topological_ordering, DisjointSet, Distance, FloydWarshallConfig,
    GraphView, NodeId, SuccessorChain, Weight, WeightedEdge,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

fn all_nodes(n: usize) -> Vec<NodeId> {
    (0..n as NodeId).collect()
}

fn lengths(edges: &[WeightedEdge]) -> HashMap<(usize, usize), Weight> {
    let mut map = HashMap::new();
    for edge in edges {
        map.entry((edge.source as usize, edge.target as usize))
            .and_modify(|w: &mut Weight| *w = (*w).min(edge.weight))
            .or_insert(edge.weight);
    }
    map
}

#[test]
fn test_dijkstra_matches_bellman_ford() {
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..20 {
        let n = 5 + round;
        let edges = random_weighted_edges(&mut rng, n, n * 4, 0..=20);
        let view = GraphView::from_edges(&all_nodes(n), &edges).unwrap();
        let reference = bellman_ford(0, &edges);
        assert!(!reference.negative_cycle_suspected);

        for target in 0..n as NodeId {
            let expected = reference.distance(target);
            assert_eq!(shortest_path_dijkstra(&view, 0, target), expected);

            match dijkstra(&view, 0, target) {
                Some(path) => {
                    assert_eq!(Distance::new(path.cost), expected);
                    assert_eq!(path.path.first(), Some(&0));
                    assert_eq!(path.path.last(), Some(&target));
                }
                None => assert!(expected.is_infinite()),
            }
        }
    }
}

/// Cheapest acyclic edge subset of size |V| - c, by enumeration.
fn brute_force_forest_weight(edges: &[WeightedEdge], forest_size: usize) -> Weight {
    let mut best = Weight::MAX;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != forest_size {
            continue;
        }
        let mut sets = DisjointSet::new();
        let mut total = 0;
        let mut acyclic = true;
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                if !sets.union(edge.source, edge.target) {
                    acyclic = false;
                    break;
                }
                total += edge.weight;
            }
        }
        if acyclic {
            best = best.min(total);
        }
    }
    best
}

#[test]
fn test_kruskal_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..30 {
        let edges = random_weighted_edges(&mut rng, 6, 9, -5..=10);
        let mst = minimum_spanning_tree(&edges);

        let mut endpoints: Vec<NodeId> = edges.iter().flat_map(|e| [e.source, e.target]).collect();
        endpoints.sort_unstable();
        endpoints.dedup();
        let forest_size = endpoints.len() - component_count(&edges);

        assert_eq!(mst.len(), forest_size);
        assert_eq!(mst.total_weight, mst.edges.iter().map(|e| e.weight).sum::<Weight>());
        assert_eq!(mst.total_weight, brute_force_forest_weight(&edges, forest_size));
    }
}

#[test]
fn test_floyd_warshall_triangle_inequality_and_dijkstra() {
    let mut rng = StdRng::seed_from_u64(1234);
    let n = 25;
    let edges = random_weighted_edges(&mut rng, n, 90, 1..=50);
    let view = GraphView::from_edges(&all_nodes(n), &edges).unwrap();
    let matrix = floyd_warshall(n, &lengths(&edges), &FloydWarshallConfig::default()).unwrap();

    for i in 0..n {
        assert_eq!(matrix.get(i, i), Distance::ZERO);
        for j in 0..n {
            assert_eq!(
                matrix.get(i, j),
                shortest_path_dijkstra(&view, i as NodeId, j as NodeId)
            );
            for k in 0..n {
                assert!(matrix.get(i, j) <= matrix.get(i, k) + matrix.get(k, j));
            }
        }
    }
}

#[test]
fn test_parallel_floyd_warshall_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(99);
    let n = 40;
    // DAG edges with signed weights: negative lengths but no negative cycle
    let edges: Vec<WeightedEdge> = random_dag_edges(&mut rng, n, 200)
        .into_iter()
        .map(|e| WeightedEdge::new(e.source, e.target, rng.gen_range(-10..=30)))
        .collect();
    let map = lengths(&edges);

    let sequential = floyd_warshall(n, &map, &FloydWarshallConfig { parallel_threshold: usize::MAX }).unwrap();
    let parallel = floyd_warshall(n, &map, &FloydWarshallConfig { parallel_threshold: 0 }).unwrap();
    assert_eq!(sequential, parallel);

    let reference = bellman_ford(0, &edges);
    for j in 0..n {
        assert_eq!(sequential.get(0, j), reference.distance(j as NodeId));
    }
}

#[test]
fn test_topological_ordering_of_random_dags() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let n = rng.gen_range(1..60);
        let edges = random_dag_edges(&mut rng, n, n * 3);
        let view = GraphView::from_edges(&all_nodes(n), &edges).unwrap();
        let order = topological_ordering(&view);

        assert_eq!(order.len(), n);
        let mut position = vec![usize::MAX; n];
        for (pos, &node) in order.iter().enumerate() {
            assert_eq!(position[node as usize], usize::MAX, "node {} listed twice", node);
            position[node as usize] = pos;
        }
        for edge in &edges {
            assert!(position[edge.source as usize] < position[edge.target as usize]);
        }
    }
}

#[test]
fn test_topological_ordering_is_short_on_cyclic_graphs() {
    let mut rng = StdRng::seed_from_u64(31);

    for _ in 0..20 {
        let n = rng.gen_range(2..60);
        let mut edges = random_dag_edges(&mut rng, n, n * 3);
        // One edge from a higher to a lower id closes a cycle through a forward edge
        let forward = edges.get(rng.gen_range(0..edges.len())).copied().unwrap();
        edges.push(WeightedEdge::new(forward.target, forward.source, 1));

        let view = GraphView::from_edges(&all_nodes(n), &edges).unwrap();
        let order = topological_ordering(&view);
        assert!(order.len() < n, "cycle through {} and {} went unnoticed", forward.source, forward.target);
    }
}

#[test]
fn test_cycle_detection_on_every_chain_shape() {
    for len in 0..=100 {
        let chain = SuccessorChain::linear(len, None).unwrap();
        let start = if len == 0 { None } else { Some(0) };
        assert!(!detect_cycle(&chain, start), "length {}", len);

        for back in 0..len {
            let chain = SuccessorChain::linear(len, Some(back)).unwrap();
            assert!(detect_cycle(&chain, Some(0)), "length {} back to {}", len, back);
        }
    }
}
