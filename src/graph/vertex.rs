use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::graph::traits::{VertexKey, Weight};

/// Index of a vertex inside the graph's vertex arena (assigned in insertion order)
pub type VertexId = usize;

/// Traversal marker shared by BFS, DFS and the priority-queue algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not yet discovered
    #[default]
    White,
    /// Discovered, still being processed
    Gray,
    /// Fully processed
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Gray => "gray",
            Color::Black => "black",
        };
        f.pad(name)
    }
}

/// A graph vertex: its key, outgoing neighbors and per-run algorithm metadata.
///
/// Equality, hashing and ordering look at the key only.
#[derive(Debug, Clone)]
pub struct Vertex<K, W>
where
    K: VertexKey,
    W: Weight,
{
    key: K,
    /// Outgoing edges as (target, weight), in insertion order
    neighbors: Vec<(VertexId, W)>,
    color: Color,
    distance: W,
    previous: Option<VertexId>,
    discovery_time: usize,
    closing_time: usize,
}

impl<K, W> Vertex<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Creates a white vertex at infinite distance with no neighbors
    pub fn new(key: K) -> Self {
        Vertex {
            key,
            neighbors: Vec::new(),
            color: Color::White,
            distance: W::infinity(),
            previous: None,
            discovery_time: 0,
            closing_time: 0,
        }
    }

    /// The key this vertex is stored under
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Weight of the edge to `other`, if there is one
    pub fn get_neighbor(&self, other: VertexId) -> Option<W> {
        self.neighbors
            .iter()
            .find(|(target, _)| *target == other)
            .map(|(_, weight)| *weight)
    }

    /// Adds or overwrites the edge to `other`.
    ///
    /// Crate-private: the graph keeps its edge set in sync with this list.
    pub(crate) fn set_neighbor(&mut self, other: VertexId, weight: W) {
        for edge in self.neighbors.iter_mut() {
            if edge.0 == other {
                edge.1 = weight;
                return;
            }
        }
        self.neighbors.push((other, weight));
    }

    /// Outgoing edges as (target, weight)
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.neighbors.iter().copied()
    }

    /// Neighbor at position `index` in insertion order
    pub(crate) fn neighbor_at(&self, index: usize) -> Option<(VertexId, W)> {
        self.neighbors.get(index).copied()
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Current traversal color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Marks the vertex for BFS/DFS bookkeeping
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Distance recorded by the last run, infinite when unreached
    pub fn distance(&self) -> W {
        self.distance
    }

    /// Overwrites the recorded distance
    pub fn set_distance(&mut self, distance: W) {
        self.distance = distance;
    }

    /// Predecessor on the current best-known path
    pub fn previous(&self) -> Option<VertexId> {
        self.previous
    }

    /// Crate-private: the id must belong to the owning graph, which exposes a
    /// key-based `set_previous` instead.
    pub(crate) fn set_previous(&mut self, previous: Option<VertexId>) {
        self.previous = previous;
    }

    /// DFS time at which the vertex turned gray
    pub fn discovery_time(&self) -> usize {
        self.discovery_time
    }

    /// Sets the discovery timestamp
    pub fn set_discovery_time(&mut self, time: usize) {
        self.discovery_time = time;
    }

    /// DFS time at which the vertex turned black
    pub fn closing_time(&self) -> usize {
        self.closing_time
    }

    /// Sets the closing timestamp
    pub fn set_closing_time(&mut self, time: usize) {
        self.closing_time = time;
    }

    /// Restores color, distance, predecessor and timestamps to their initial values
    pub fn reset(&mut self) {
        self.color = Color::White;
        self.distance = W::infinity();
        self.previous = None;
        self.discovery_time = 0;
        self.closing_time = 0;
    }
}

impl<K: VertexKey, W: Weight> PartialEq for Vertex<K, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: VertexKey, W: Weight> Eq for Vertex<K, W> {}

impl<K: VertexKey, W: Weight> Hash for Vertex<K, W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<K: VertexKey, W: Weight> PartialOrd for Vertex<K, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: VertexKey, W: Weight> Ord for Vertex<K, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
