pub mod common;
pub mod distance;
pub mod error;
pub mod union_find;
pub mod community;
pub mod mst;
pub mod bellman_ford;
pub mod pathfinding;
pub mod floyd_warshall;
pub mod topology;
pub mod cycle;
pub mod generate;

pub use common::{GraphView, NodeId, Weight, WeightedEdge, MAX_WEIGHT};
pub use distance::Distance;
pub use error::{AlgoError, AlgoResult};
pub use union_find::DisjointSet;
pub use community::{component_count, weakly_connected_components, WccResult};
pub use mst::{kruskal_mst, minimum_spanning_tree, MstResult};
pub use bellman_ford::{bellman_ford, shortest_paths_bellman_ford, BellmanFordResult};
pub use pathfinding::{bfs, dijkstra, is_reachable, shortest_path_dijkstra, PathResult};
pub use floyd_warshall::{
    floyd_warshall, shortest_path_lengths_floyd_warshall, DistanceMatrix, FloydWarshallConfig,
};
pub use topology::{is_acyclic, topological_ordering};
pub use cycle::{detect_cycle, SuccessorChain};
