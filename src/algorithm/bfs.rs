use std::collections::VecDeque;

use log::debug;

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Color, Graph, VertexKey, Weight};
use crate::Result;

/// Level-order traversal that records hop counts as distances.
///
/// Only white vertices are discovered, so vertices left gray or black by an
/// earlier run are skipped unless the graph is reset first.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirstSearch;

impl BreadthFirstSearch {
    pub fn new() -> Self {
        BreadthFirstSearch
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for BreadthFirstSearch
where
    K: VertexKey,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn compute_shortest_paths(&self, graph: &mut Graph<K, W>, source: &K) -> Result<()> {
        let start = graph.id_of(source)?;
        debug!("BFS from {:?} over {} vertices", source, graph.size());

        {
            let vertex = graph.at_mut(start);
            vertex.set_distance(W::zero());
            vertex.set_previous(None);
            vertex.set_color(Color::Gray);
        }

        let mut queue = VecDeque::from([start]);
        let mut visited = 1usize;

        while let Some(current) = queue.pop_front() {
            let next_distance = graph.at(current).distance() + W::one();
            let neighbors: Vec<_> = graph.at(current).neighbors().map(|(v, _)| v).collect();

            for next in neighbors {
                let vertex = graph.at_mut(next);
                if vertex.color() == Color::White {
                    vertex.set_color(Color::Gray);
                    vertex.set_distance(next_distance);
                    vertex.set_previous(Some(current));
                    queue.push_back(next);
                    visited += 1;
                }
            }

            graph.at_mut(current).set_color(Color::Black);
        }

        debug!("BFS from {:?} reached {} vertices", source, visited);
        Ok(())
    }
}

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Breadth-first search from `start`; see [`BreadthFirstSearch`]
    pub fn bfs(&mut self, start: &K) -> Result<()> {
        BreadthFirstSearch::new().compute_shortest_paths(self, start)
    }
}
