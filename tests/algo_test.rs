use graphcore::graph::{GraphStore, NodeId};
use graphcore::{algo, Distance, GraphDocument, GraphError, GraphcoreConfig};
use graphcore_algorithms::WeightedEdge;

fn load(json: &str) -> GraphStore {
    GraphDocument::from_json_str(json)
        .unwrap()
        .to_store(GraphcoreConfig::default().default_weight)
        .unwrap()
}

fn id(store: &GraphStore, label: &str) -> NodeId {
    store.resolve(label).unwrap()
}

#[test]
fn test_mst_triangle_document() {
    let store = load(
        r#"{
            "directed": false,
            "edges": [
                { "source": "A", "target": "B", "weight": 1 },
                { "source": "B", "target": "C", "weight": 2 },
                { "source": "A", "target": "C", "weight": 4 }
            ]
        }"#,
    );

    let mst = algo::minimum_spanning_tree(&store);
    assert_eq!(mst.total_weight, 3);
    assert_eq!(mst.len(), 2);

    let (a, b, c) = (id(&store, "A"), id(&store, "B"), id(&store, "C"));
    assert!(mst.contains(&WeightedEdge::new(a.as_u64(), b.as_u64(), 1)));
    assert!(mst.contains(&WeightedEdge::new(b.as_u64(), c.as_u64(), 2)));
}

#[test]
fn test_bellman_ford_prefers_cheaper_detour() {
    let store = load(
        r#"{
            "edges": [
                { "source": "S", "target": "A", "weight": 4 },
                { "source": "S", "target": "B", "weight": 1 },
                { "source": "B", "target": "A", "weight": 1 }
            ]
        }"#,
    );

    let s = id(&store, "S");
    let distances = algo::shortest_paths(&store, s).unwrap();
    assert_eq!(distances[&s], Distance::new(0));
    assert_eq!(distances[&id(&store, "A")], Distance::new(2));
    assert_eq!(distances[&id(&store, "B")], Distance::new(1));

    // Dijkstra agrees on non-negative weights
    assert_eq!(
        algo::shortest_path_length(&store, s, id(&store, "A")).unwrap(),
        Distance::new(2)
    );
}

#[test]
fn test_bellman_ford_negative_edges_and_cycle_report() {
    let mut store = GraphStore::new();
    store.connect("S", "A", 5).unwrap();
    store.connect("A", "B", -3).unwrap();
    store.connect("S", "B", 4).unwrap();

    let s = id(&store, "S");
    let report = algo::bellman_ford(&store, s).unwrap();
    assert_eq!(report.distance(id(&store, "B").as_u64()), Distance::new(2));
    assert!(!report.negative_cycle_suspected);

    store.connect("B", "A", 1).unwrap();
    let report = algo::bellman_ford(&store, s).unwrap();
    assert!(report.negative_cycle_suspected);
}

#[test]
fn test_dijkstra_path_and_unreachable_goal() {
    let mut store = GraphStore::new();
    store.connect("a", "b", 7).unwrap();
    store.connect("a", "c", 9).unwrap();
    store.connect("a", "f", 14).unwrap();
    store.connect("b", "c", 10).unwrap();
    store.connect("b", "d", 15).unwrap();
    store.connect("c", "d", 11).unwrap();
    store.connect("c", "f", 2).unwrap();
    store.connect("d", "e", 6).unwrap();
    store.connect("f", "e", 9).unwrap();
    store.create_node("island").unwrap();

    let a = id(&store, "a");
    let e = id(&store, "e");
    let path = algo::shortest_path(&store, a, e).unwrap().unwrap();
    assert_eq!(path.cost, 20);
    let labels: Vec<&str> = path
        .path
        .iter()
        .map(|&n| store.label_of(NodeId::new(n)).unwrap().as_str())
        .collect();
    assert_eq!(labels, vec!["a", "c", "f", "e"]);

    let island = id(&store, "island");
    assert_eq!(
        algo::shortest_path_length(&store, a, island).unwrap(),
        Distance::INFINITY
    );
    assert!(algo::shortest_path(&store, a, island).unwrap().is_none());
    assert!(!algo::is_reachable(&store, a, island).unwrap());
}

#[test]
fn test_unweighted_path_counts_hops() {
    let mut store = GraphStore::new();
    store.connect("a", "b", 1).unwrap();
    store.connect("b", "c", 1).unwrap();
    store.connect("a", "c", 100).unwrap();

    let path = algo::unweighted_path(&store, id(&store, "a"), id(&store, "c"))
        .unwrap()
        .unwrap();
    assert_eq!(path.path.len(), 2);
    assert_eq!(path.cost, 1);
}

#[test]
fn test_all_pairs_matrix() {
    let store = load(
        r#"{
            "nodes": ["0", "1", "2", "3"],
            "edges": [
                { "source": "0", "target": "1", "weight": 3 },
                { "source": "1", "target": "2", "weight": -2 },
                { "source": "0", "target": "2", "weight": 5 },
                { "source": "2", "target": "3", "weight": 1 }
            ]
        }"#,
    );

    let matrix = algo::all_pairs_shortest_paths(&store, &GraphcoreConfig::default()).unwrap();
    assert_eq!(matrix.vertex_count(), 4);
    assert_eq!(matrix.get(0, 2), Distance::new(1));
    assert_eq!(matrix.get(0, 3), Distance::new(2));
    assert_eq!(matrix.get(1, 3), Distance::new(-1));
    assert_eq!(matrix.get(3, 0), Distance::INFINITY);
    for i in 0..4 {
        assert_eq!(matrix.get(i, i), Distance::ZERO);
    }
}

#[test]
fn test_topological_ordering_document() {
    let store = load(
        r#"{
            "nodes": ["5", "7", "3", "11", "8", "2", "9", "10"],
            "edges": [
                { "source": "5", "target": "11" },
                { "source": "7", "target": "11" },
                { "source": "7", "target": "8" },
                { "source": "3", "target": "8" },
                { "source": "3", "target": "10" },
                { "source": "11", "target": "2" },
                { "source": "11", "target": "9" },
                { "source": "11", "target": "10" },
                { "source": "8", "target": "9" }
            ]
        }"#,
    );

    let order: Vec<&str> = algo::topological_ordering(&store)
        .into_iter()
        .map(|n| store.label_of(n).unwrap().as_str())
        .collect();
    assert_eq!(order, vec!["5", "7", "3", "11", "8", "2", "10", "9"]);
    assert!(algo::is_acyclic(&store));
}

#[test]
fn test_topological_ordering_with_cycle_is_short() {
    let mut store = GraphStore::new();
    store.connect("root", "a", 1).unwrap();
    store.connect("a", "b", 1).unwrap();
    store.connect("b", "a", 1).unwrap();
    store.connect("b", "leaf", 1).unwrap();

    let order = algo::topological_ordering(&store);
    assert_eq!(order, vec![id(&store, "root")]);
    assert!(!algo::is_acyclic(&store));
}

#[test]
fn test_successor_chain_cycle() {
    let mut store = GraphStore::new();
    store.connect("1", "2", 1).unwrap();
    store.connect("2", "3", 1).unwrap();
    store.connect("3", "4", 1).unwrap();
    assert!(!algo::detect_cycle(&store, id(&store, "1")).unwrap());

    store.connect("4", "2", 1).unwrap();
    assert!(algo::detect_cycle(&store, id(&store, "1")).unwrap());
    // Starting inside the loop
    assert!(algo::detect_cycle(&store, id(&store, "3")).unwrap());
}

#[test]
fn test_errors_surface_through_facade() {
    let mut store = GraphStore::new();
    store.connect("a", "b", -1).unwrap();

    let err = algo::shortest_path_length(&store, id(&store, "a"), id(&store, "b")).unwrap_err();
    assert!(matches!(err, GraphError::NegativeWeight { weight: -1, .. }));

    let ghost = NodeId::new(99);
    assert_eq!(
        algo::shortest_paths(&store, ghost).unwrap_err(),
        GraphError::NodeNotFound(ghost)
    );
}

#[test]
fn test_document_round_trip_preserves_results() {
    let mut store = GraphStore::new_undirected();
    store.connect("x", "y", 4).unwrap();
    store.connect("y", "z", 1).unwrap();
    store.connect("x", "z", 2).unwrap();

    let json = GraphDocument::from_store(&store).to_json_pretty().unwrap();
    let reloaded = load(&json);

    assert_eq!(
        algo::minimum_spanning_tree(&reloaded),
        algo::minimum_spanning_tree(&store)
    );
    assert_eq!(algo::connected_components(&reloaded).component_count(), 1);
}

#[test]
fn test_largest_weight_stays_finite() {
    let mut store = GraphStore::new();
    store.connect("a", "b", graphcore_algorithms::MAX_WEIGHT).unwrap();
    let a = id(&store, "a");
    let b = id(&store, "b");

    let distances = algo::shortest_paths(&store, a).unwrap();
    assert_eq!(distances[&b], Distance::MAX_FINITE);
    assert!(distances[&b].is_finite());

    let err = store.connect("b", "c", i64::MAX / 2).unwrap_err();
    assert!(matches!(err, GraphError::WeightOutOfRange { .. }));
}

#[test]
fn test_results_serialize_to_json() {
    let mut store = GraphStore::new();
    store.connect("S", "A", 3).unwrap();
    store.create_node("Z").unwrap();
    let s = id(&store, "S");

    let report = algo::bellman_ford(&store, s).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: graphcore::BellmanFordResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    // unreached vertices serialize as null
    assert!(json.contains("null"));

    let matrix = algo::all_pairs_shortest_paths(&store, &GraphcoreConfig::default()).unwrap();
    let back: graphcore::DistanceMatrix =
        serde_json::from_str(&serde_json::to_string(&matrix).unwrap()).unwrap();
    assert_eq!(back, matrix);

    let components = algo::connected_components(&store);
    let back: graphcore::WccResult =
        serde_json::from_str(&serde_json::to_string(&components).unwrap()).unwrap();
    assert_eq!(back, components);
}
