use log::{debug, warn};

use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{Graph, VertexId, VertexKey, Weight};
use crate::{Error, Result};

/// What Prim's algorithm does with vertices it cannot connect to the start vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanningPolicy {
    /// Every unconnectable vertex drained from the queue becomes the root of its
    /// own tree; the result is a minimum spanning forest
    #[default]
    Forest,
    /// Fail with [`Error::Disconnected`] at the first unconnectable vertex
    RequireConnected,
}

/// Tree (or forest) built by [`Prim`], also recorded in the vertices' `previous`
/// pointers and `distance` fields (the weight of the edge that attached each vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<K, W> {
    /// (parent, child, weight) in the order children were finalised
    pub edges: Vec<(K, K, W)>,
    /// Sum of all edge weights
    pub total_weight: W,
    /// Tree roots: the start vertex first, then one per extra component
    pub roots: Vec<K>,
}

impl<K, W> SpanningTree<K, W> {
    /// True when every vertex hangs off the start vertex
    pub fn is_spanning(&self) -> bool {
        self.roots.len() == 1
    }
}

/// Prim's minimum spanning tree algorithm.
///
/// Every vertex is queued up front, keyed by its current distance (reset the graph
/// first). The start vertex gets distance 0 and no predecessor. Only outgoing edges
/// are followed, so on a directed graph the result is a tree of outgoing edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim {
    policy: SpanningPolicy,
}

impl Prim {
    /// Creates a Prim instance that builds a spanning forest
    pub fn new() -> Self {
        Prim {
            policy: SpanningPolicy::Forest,
        }
    }

    /// Choose how unreachable vertices are handled
    pub fn with_policy(mut self, policy: SpanningPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Grows the tree from `start`, writing distance and previous on every vertex
    /// it attaches, and returns the collected tree edges.
    pub fn run<K, W>(&self, graph: &mut Graph<K, W>, start: &K) -> Result<SpanningTree<K, W>>
    where
        K: VertexKey,
        W: Weight,
    {
        let root = graph.id_of(start)?;
        let n = graph.size();
        debug!("Prim from {:?} over {} vertices", start, n);

        {
            let vertex = graph.at_mut(root);
            vertex.set_distance(W::zero());
            vertex.set_previous(None);
        }

        let mut queue = IndexedPriorityQueue::with_capacity(n);
        for id in 0..n {
            let vertex = graph.at(id);
            queue.push(id, vertex.key().clone(), vertex.distance());
        }

        // Vertices given a parent during this run
        let mut attached = vec![false; n];
        let mut finalised: Vec<VertexId> = Vec::with_capacity(n);
        let mut roots = vec![start.clone()];

        while let Some((u, _)) = queue.pop() {
            if u != root && !attached[u] {
                if self.policy == SpanningPolicy::RequireConnected {
                    let unreached = queue.len() + 1;
                    warn!("Prim from {:?}: {} vertices unreachable", start, unreached);
                    return Err(Error::Disconnected {
                        root: format!("{:?}", start),
                        unreached,
                    });
                }
                graph.at_mut(u).set_previous(None);
                roots.push(graph.at(u).key().clone());
            } else if u != root {
                finalised.push(u);
            }

            for cursor in 0..graph.at(u).out_degree() {
                let Some((v, weight)) = graph.at(u).neighbor_at(cursor) else {
                    break;
                };
                if queue.contains(v) && weight < graph.at(v).distance() {
                    let vertex = graph.at_mut(v);
                    vertex.set_previous(Some(u));
                    vertex.set_distance(weight);
                    attached[v] = true;
                    queue.decrease_key(v, weight);
                }
            }
        }

        if roots.len() > 1 {
            warn!("Prim from {:?} built a forest of {} trees", start, roots.len());
        }

        let mut edges = Vec::with_capacity(finalised.len());
        let mut total_weight = W::zero();
        for child in finalised {
            let vertex = graph.at(child);
            if let Some(parent) = vertex.previous() {
                let weight = vertex.distance();
                total_weight = total_weight + weight;
                edges.push((graph.at(parent).key().clone(), vertex.key().clone(), weight));
            }
        }

        debug!(
            "Prim from {:?}: {} tree edges, total weight {:?}",
            start,
            edges.len(),
            total_weight
        );
        Ok(SpanningTree {
            edges,
            total_weight,
            roots,
        })
    }
}

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Prim's algorithm from `start`, building a forest on disconnected graphs
    pub fn prim(&mut self, start: &K) -> Result<SpanningTree<K, W>> {
        Prim::new().run(self, start)
    }
}
