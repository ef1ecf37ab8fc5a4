use std::collections::{BTreeMap, HashMap};
use std::fmt;

use log::trace;
use ordered_float::OrderedFloat;

use crate::graph::traits::{VertexKey, Weight};
use crate::graph::vertex::{Vertex, VertexId};
use crate::{Error, Result};

/// A weighted graph stored as adjacency lists.
///
/// The graph owns every vertex in an arena indexed by [`VertexId`]. Each edge is
/// recorded twice: in the source vertex's neighbor list, and in a separate edge set
/// keyed by `(from, to)` that Bellman-Ford iterates. `add_edge` is the only way to
/// write either view, so they never disagree.
#[derive(Debug, Clone)]
pub struct Graph<K, W = OrderedFloat<f64>>
where
    K: VertexKey,
    W: Weight,
{
    /// Vertex arena in insertion order
    vertices: Vec<Vertex<K, W>>,

    /// Key -> arena slot
    index: HashMap<K, VertexId>,

    /// Directed edge set: (from, to) -> weight
    edges: BTreeMap<(VertexId, VertexId), W>,

    /// Whether `add_edge` inserts a single direction
    directed: bool,
}

impl<K, W> Default for Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: BTreeMap::new(),
            directed: true,
        }
    }

    /// Creates a new empty undirected graph.
    ///
    /// Every `add_edge` call stores both directions, and each direction counts as
    /// its own entry in the edge set.
    pub fn undirected() -> Self {
        Graph {
            directed: false,
            ..Self::new()
        }
    }

    /// Creates a new directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edges: BTreeMap::new(),
            directed: true,
        }
    }

    /// False for graphs built with [`Graph::undirected`]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a vertex and returns its id.
    ///
    /// If the key is already present the existing vertex is left untouched, edges
    /// and metadata included, and its id is returned.
    pub fn add_vertex(&mut self, key: K) -> VertexId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(key.clone(), id);
        self.vertices.push(Vertex::new(key));
        id
    }

    /// Adds an edge, creating either endpoint if needed.
    ///
    /// Re-adding an existing edge overwrites its weight. Negative weights are allowed.
    pub fn add_edge(&mut self, from: K, to: K, weight: W) {
        let from_id = self.add_vertex(from);
        let to_id = self.add_vertex(to);
        self.insert_edge(from_id, to_id, weight);
        if !self.directed && from_id != to_id {
            self.insert_edge(to_id, from_id, weight);
        }
    }

    /// Adds an edge of weight zero
    pub fn add_unweighted_edge(&mut self, from: K, to: K) {
        self.add_edge(from, to, W::zero());
    }

    fn insert_edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        trace!(
            "edge {:?} -> {:?} ({:?})",
            self.vertices[from].key(),
            self.vertices[to].key(),
            weight
        );
        self.vertices[from].set_neighbor(to, weight);
        self.edges.insert((from, to), weight);
    }

    /// Looks up a vertex by key
    pub fn get_vertex(&self, key: &K) -> Option<&Vertex<K, W>> {
        self.index.get(key).map(|&id| &self.vertices[id])
    }

    /// Looks up a vertex by key, failing with `KeyNotFound`
    pub fn vertex(&self, key: &K) -> Result<&Vertex<K, W>> {
        self.get_vertex(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Mutable access to a vertex's metadata
    pub fn vertex_mut(&mut self, key: &K) -> Result<&mut Vertex<K, W>> {
        match self.index.get(key) {
            Some(&id) => Ok(&mut self.vertices[id]),
            None => Err(Error::key_not_found(key)),
        }
    }

    /// Looks up a vertex by arena id
    pub fn vertex_by_id(&self, id: VertexId) -> Option<&Vertex<K, W>> {
        self.vertices.get(id)
    }

    /// Arena access for algorithms; `id` must come from this graph
    pub(crate) fn at(&self, id: VertexId) -> &Vertex<K, W> {
        &self.vertices[id]
    }

    /// Mutable arena access for algorithms
    pub(crate) fn at_mut(&mut self, id: VertexId) -> &mut Vertex<K, W> {
        &mut self.vertices[id]
    }

    /// Resolves a key to its id, failing with `KeyNotFound`
    pub fn id_of(&self, key: &K) -> Result<VertexId> {
        self.index.get(key).copied().ok_or_else(|| Error::key_not_found(key))
    }

    /// Key stored at arena slot `id`
    pub fn key_of(&self, id: VertexId) -> Option<&K> {
        self.vertices.get(id).map(|v| v.key())
    }

    /// Key of the vertex recorded as `key`'s predecessor
    pub fn previous_key(&self, key: &K) -> Result<Option<&K>> {
        match self.vertex(key)?.previous() {
            Some(id) => self
                .key_of(id)
                .map(Some)
                .ok_or_else(|| Error::KeyNotFound(format!("vertex id {}", id))),
            None => Ok(None),
        }
    }

    /// Points `key`'s predecessor at `previous`, or clears it with `None`.
    ///
    /// Both keys must already be in the graph. The next run that reaches `key`
    /// overwrites it.
    pub fn set_previous(&mut self, key: &K, previous: Option<&K>) -> Result<()> {
        let id = self.id_of(key)?;
        let previous = previous.map(|p| self.id_of(p)).transpose()?;
        self.vertices[id].set_previous(previous);
        Ok(())
    }

    /// True if a vertex with this key exists
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, W>> + '_ {
        self.vertices.iter()
    }

    /// Vertex keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().map(|v| v.key())
    }

    /// Every directed edge as (from, to, weight), ordered by source then target insertion
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, W)> + '_ {
        self.edges
            .iter()
            .map(move |(&(from, to), &weight)| {
                (self.vertices[from].key(), self.vertices[to].key(), weight)
            })
    }

    /// Snapshot of the edge set by id, for algorithms that mutate vertices while scanning edges
    pub(crate) fn edge_list(&self) -> Vec<(VertexId, VertexId, W)> {
        self.edges.iter().map(|(&(from, to), &weight)| (from, to, weight)).collect()
    }

    /// Weight of the `from` -> `to` edge, if both keys and the edge exist
    pub fn edge_weight(&self, from: &K, to: &K) -> Option<W> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.edges.get(&(from, to)).copied()
    }

    /// Whether the `from` -> `to` edge exists
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Same as [`Graph::size`]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of directed edges (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Sets every vertex's distance to `default`, leaving all other metadata alone
    pub fn reset_distances(&mut self, default: W) {
        for vertex in self.vertices.iter_mut() {
            vertex.set_distance(default);
        }
    }

    /// Returns every vertex to white, infinite distance, no predecessor, zero timestamps
    pub fn reset_search_state(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.reset();
        }
    }

    /// Total weight of the edges along a key sequence
    pub fn path_weight(&self, path: &[K]) -> Result<W> {
        let mut total = W::zero();
        for pair in path.windows(2) {
            let weight = self.edge_weight(&pair[0], &pair[1]).ok_or_else(|| Error::MissingEdge {
                from: format!("{:?}", pair[0]),
                to: format!("{:?}", pair[1]),
            })?;
            total = total + weight;
        }
        Ok(total)
    }
}

/// Formats a weight for display, rendering the unreached sentinel as `inf`
pub(crate) fn format_weight<W: Weight>(weight: W) -> String {
    if weight.is_infinite() && weight > W::zero() {
        "inf".to_string()
    } else {
        match weight.to_f64() {
            Some(value) => value.to_string(),
            None => format!("{:?}", weight),
        }
    }
}

/// One row per vertex: key | color | distance | discovery | closing | previous
impl<K, W> fmt::Display for Graph<K, W>
where
    K: VertexKey + fmt::Display,
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            let previous = match vertex.previous().and_then(|id| self.key_of(id)) {
                Some(key) => key.to_string(),
                None => "None".to_string(),
            };
            writeln!(
                f,
                "{:^8}|{:^8}|{:^8}|{:^8}|{:^8}|{}",
                vertex.key().to_string(),
                vertex.color(),
                format_weight(vertex.distance()),
                vertex.discovery_time(),
                vertex.closing_time(),
                previous
            )?;
        }
        Ok(())
    }
}
