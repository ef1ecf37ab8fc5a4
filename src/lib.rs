//! Adjacency Graph - directed, weighted graphs and the classical algorithms on them
//!
//! A [`Graph`] owns its vertices and edges. Every algorithm runs in place: it writes
//! color, distance, predecessor and timestamp metadata onto the vertices, and the
//! caller reads the results back through the vertex accessors or [`Graph::traverse`].
//!
//! Algorithms never reset metadata on their own. Call [`Graph::reset_search_state`]
//! between runs unless resuming a previous computation is intended.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, bfs::BreadthFirstSearch, dfs::{DepthFirstSearch, DfsClock},
    dijkstra::Dijkstra, prim::{Prim, SpanningPolicy, SpanningTree}, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{Color, Graph, Vertex, VertexId, VertexKey, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    KeyNotFound(String),

    #[error("Graph contains a negative-weight cycle (edge {from} -> {to} still relaxes)")]
    NegativeCycle { from: String, to: String },

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("No path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("Predecessor chain starting at {0} contains a cycle")]
    PredecessorCycle(String),

    #[error("No edge from {from} to {to}")]
    MissingEdge { from: String, to: String },

    #[error("{unreached} vertices are not reachable from spanning tree root {root}")]
    Disconnected { root: String, unreached: usize },
}

impl Error {
    pub(crate) fn key_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Error::KeyNotFound(format!("{:?}", key))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
