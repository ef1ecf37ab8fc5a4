pub mod traits;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod bellman_ford;
pub mod prim;
pub mod path;

pub use traits::ShortestPathAlgorithm;
