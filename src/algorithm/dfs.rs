use log::debug;

use crate::graph::{Color, Graph, VertexId, VertexKey, Weight};
use crate::Result;

/// Timestamp source for one depth-first search.
///
/// Each discovery and each closing advances the clock by one, and the new value is
/// the stamp, so the first vertex discovered gets time 1.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DfsClock {
    time: usize,
}

impl DfsClock {
    /// A clock that has not ticked yet
    pub fn new() -> Self {
        DfsClock { time: 0 }
    }

    /// The last stamp handed out
    pub fn now(&self) -> usize {
        self.time
    }

    fn tick(&mut self) -> usize {
        self.time += 1;
        self.time
    }
}

/// Depth-first search over the whole graph, stamping discovery and closing times.
///
/// Uses an explicit stack, so graph depth is bounded by memory rather than by the
/// call stack. Timestamps and predecessors match the textbook recursive version:
/// vertices are tried in insertion order, neighbors in edge insertion order.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirstSearch;

impl DepthFirstSearch {
    pub fn new() -> Self {
        DepthFirstSearch
    }

    /// Visits every still-white vertex, starting a new tree at each one.
    /// Returns the clock after the last vertex closes.
    pub fn run<K, W>(&self, graph: &mut Graph<K, W>) -> DfsClock
    where
        K: VertexKey,
        W: Weight,
    {
        let mut clock = DfsClock::new();
        let mut trees = 0usize;
        let n = graph.size();

        for id in 0..n {
            if graph.at(id).color() == Color::White {
                self.visit_id(graph, id, &mut clock);
                trees += 1;
            }
        }

        debug!("DFS over {} vertices started {} trees, clock at {}", n, trees, clock.now());
        clock
    }

    /// Explores everything reachable from `start` through white vertices.
    ///
    /// `start` itself is entered regardless of its color, the way a direct call to
    /// the recursive visit would.
    pub fn visit<K, W>(
        &self,
        graph: &mut Graph<K, W>,
        start: &K,
        clock: &mut DfsClock,
    ) -> Result<()>
    where
        K: VertexKey,
        W: Weight,
    {
        let id = graph.id_of(start)?;
        self.visit_id(graph, id, clock);
        Ok(())
    }

    fn visit_id<K, W>(&self, graph: &mut Graph<K, W>, start: VertexId, clock: &mut DfsClock)
    where
        K: VertexKey,
        W: Weight,
    {
        discover(graph, start, clock);
        // (vertex, index of the next neighbor to try)
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

        while let Some(&(current, cursor)) = stack.last() {
            match graph.at(current).neighbor_at(cursor) {
                Some((next, _)) => {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                    if graph.at(next).color() == Color::White {
                        graph.at_mut(next).set_previous(Some(current));
                        discover(graph, next, clock);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                    let time = clock.tick();
                    let vertex = graph.at_mut(current);
                    vertex.set_color(Color::Black);
                    vertex.set_closing_time(time);
                }
            }
        }
    }
}

fn discover<K: VertexKey, W: Weight>(graph: &mut Graph<K, W>, id: VertexId, clock: &mut DfsClock) {
    let time = clock.tick();
    let vertex = graph.at_mut(id);
    vertex.set_color(Color::Gray);
    vertex.set_discovery_time(time);
}

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Depth-first search over every white vertex; see [`DepthFirstSearch`]
    pub fn dfs(&mut self) -> DfsClock {
        DepthFirstSearch::new().run(self)
    }

    /// One depth-first tree rooted at `start`, sharing `clock` with other calls
    pub fn dfs_visit(&mut self, start: &K, clock: &mut DfsClock) -> Result<()> {
        DepthFirstSearch::new().visit(self, start, clock)
    }
}
