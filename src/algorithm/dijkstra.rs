use log::{debug, trace};

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{Graph, VertexKey, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Only the start vertex's distance is initialised; every other vertex is compared
/// against whatever distance it already holds, so reset the graph for a clean run.
#[derive(Debug, Clone, Copy)]
pub struct Dijkstra {
    /// Fail on the first negative edge met during relaxation
    check_weights: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance that rejects negative edges
    pub fn new() -> Self {
        Dijkstra { check_weights: true }
    }

    /// Enable or disable the negative edge check. With the check off, negative
    /// edges silently produce wrong distances. Each vertex is still expanded at
    /// most once, so the run terminates even on a reachable negative cycle.
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.check_weights = enabled;
        self
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for Dijkstra
where
    K: VertexKey,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &mut Graph<K, W>, source: &K) -> Result<()> {
        let start = graph.id_of(source)?;
        debug!(
            "Dijkstra from {:?} over {} vertices and {} edges",
            source,
            graph.size(),
            graph.edge_count()
        );

        graph.at_mut(start).set_distance(W::zero());

        let mut queue = IndexedPriorityQueue::with_capacity(graph.size());
        queue.push(start, source.clone(), W::zero());
        let mut settled = vec![false; graph.size()];
        let mut settled_count = 0usize;

        while let Some((u, _)) = queue.pop() {
            settled[u] = true;
            settled_count += 1;
            let dist_u = graph.at(u).distance();

            // Relax all outgoing edges
            for cursor in 0..graph.at(u).out_degree() {
                let Some((v, weight)) = graph.at(u).neighbor_at(cursor) else {
                    break;
                };

                if self.check_weights && weight < W::zero() {
                    return Err(Error::NegativeWeight {
                        from: format!("{:?}", graph.at(u).key()),
                        to: format!("{:?}", graph.at(v).key()),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }

                let new_dist = dist_u + weight;
                if new_dist < graph.at(v).distance() {
                    trace!(
                        "relax {:?} -> {:?}: {:?}",
                        graph.at(u).key(),
                        graph.at(v).key(),
                        new_dist
                    );
                    let vertex = graph.at_mut(v);
                    vertex.set_distance(new_dist);
                    vertex.set_previous(Some(u));
                    // a settled vertex is never expanded again
                    if !settled[v] {
                        let tie = vertex.key().clone();
                        queue.push(v, tie, new_dist);
                    }
                }
            }
        }

        debug!("Dijkstra from {:?} settled {} vertices", source, settled_count);
        Ok(())
    }
}

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Dijkstra's algorithm from `start` with the negative edge check on
    pub fn dijkstra(&mut self, start: &K) -> Result<()> {
        Dijkstra::new().compute_shortest_paths(self, start)
    }
}
