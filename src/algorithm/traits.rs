use crate::graph::{Graph, VertexKey, Weight};
use crate::Result;

/// Trait for single-source algorithms that record a distance and a predecessor
/// on every vertex they reach (BFS, Dijkstra, Bellman-Ford).
///
/// Results are written into the graph's vertex metadata rather than returned.
pub trait ShortestPathAlgorithm<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Compute distances and predecessors from `source`, writing them onto the vertices
    fn compute_shortest_paths(&self, graph: &mut Graph<K, W>, source: &K) -> Result<()>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the path from `source` to `target` recorded by the last run, as keys
    fn get_path(&self, graph: &Graph<K, W>, source: &K, target: &K) -> Result<Vec<K>> {
        graph.traverse(source, target)
    }
}
