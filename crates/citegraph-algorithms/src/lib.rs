pub mod common;
pub mod pathfinding;

pub use common::GraphView;
pub use pathfinding::{bfs, dfs, dijkstra, widest_path, PathResult};
