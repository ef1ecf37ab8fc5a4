use log::{debug, trace, warn};

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, VertexKey, Weight};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Tolerates negative edge weights. Runs `|V|` relaxation passes over the edge set,
/// then one detection pass; if any edge can still be relaxed the run fails with
/// [`Error::NegativeCycle`] and the vertex metadata is left partially relaxed.
///
/// Vertices at an infinite distance never relax their outgoing edges, so anything
/// unreachable from the start keeps its sentinel distance.
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    /// Stop relaxing once a full pass changes nothing
    early_exit: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a Bellman-Ford instance with early exit enabled
    pub fn new() -> Self {
        BellmanFord { early_exit: true }
    }

    /// A pass that changes nothing means every later pass changes nothing too, so
    /// this only affects running time.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for BellmanFord
where
    K: VertexKey,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &mut Graph<K, W>, source: &K) -> Result<()> {
        let start = graph.id_of(source)?;
        let edges = graph.edge_list();
        let passes = graph.size();
        debug!(
            "Bellman-Ford from {:?}: {} passes over {} edges",
            source,
            passes,
            edges.len()
        );

        graph.at_mut(start).set_distance(W::zero());

        for pass in 0..passes {
            let mut changed = false;
            for &(u, v, weight) in &edges {
                let dist_u = graph.at(u).distance();
                if dist_u == W::infinity() {
                    continue;
                }
                let candidate = dist_u + weight;
                if candidate < graph.at(v).distance() {
                    trace!(
                        "pass {}: relax {:?} -> {:?} to {:?}",
                        pass,
                        graph.at(u).key(),
                        graph.at(v).key(),
                        candidate
                    );
                    let vertex = graph.at_mut(v);
                    vertex.set_distance(candidate);
                    vertex.set_previous(Some(u));
                    changed = true;
                }
            }
            if !changed && self.early_exit {
                debug!("Bellman-Ford converged after {} passes", pass + 1);
                break;
            }
        }

        for &(u, v, weight) in &edges {
            let dist_u = graph.at(u).distance();
            if dist_u == W::infinity() {
                continue;
            }
            if dist_u + weight < graph.at(v).distance() {
                let from = format!("{:?}", graph.at(u).key());
                let to = format!("{:?}", graph.at(v).key());
                warn!("negative-weight cycle detected through edge {} -> {}", from, to);
                return Err(Error::NegativeCycle { from, to });
            }
        }

        Ok(())
    }
}

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Bellman-Ford from `start`; see [`BellmanFord`]
    pub fn bellman_ford(&mut self, start: &K) -> Result<()> {
        BellmanFord::new().compute_shortest_paths(self, start)
    }
}
