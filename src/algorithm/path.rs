use std::collections::HashSet;
use std::fmt::Display;

use crate::graph::adjacency::format_weight;
use crate::graph::{Graph, VertexKey, Weight};
use crate::{Error, Result};

impl<K, W> Graph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Reconstructs the `src` -> `dst` path from the `previous` pointers left by the
    /// last traversal or shortest-path run.
    ///
    /// The walk starts at `dst` and stops as soon as it reaches `src`; a chain that
    /// ends anywhere else yields [`Error::NoPath`], and a chain that loops (possible
    /// after a failed Bellman-Ford run) yields [`Error::PredecessorCycle`].
    pub fn traverse(&self, src: &K, dst: &K) -> Result<Vec<K>> {
        let source = self.id_of(src)?;
        let target = self.id_of(dst)?;

        let mut path = vec![target];
        let mut visited = HashSet::from([target]);
        let mut current = target;

        // Build path in reverse order
        while current != source {
            match self.vertex_by_id(current).and_then(|vertex| vertex.previous()) {
                Some(pred) => {
                    if !visited.insert(pred) {
                        return Err(Error::PredecessorCycle(format!("{:?}", dst)));
                    }
                    path.push(pred);
                    current = pred;
                }
                None => {
                    return Err(Error::NoPath {
                        from: format!("{:?}", src),
                        to: format!("{:?}", dst),
                    });
                }
            }
        }

        path.reverse();
        Ok(path.into_iter().map(|id| self.at(id).key().clone()).collect())
    }

    /// Renders the reconstructed path as `Path from A to C (3): A B C`, where the
    /// number in parentheses is `dst`'s recorded distance
    pub fn format_path(&self, src: &K, dst: &K) -> Result<String>
    where
        K: Display,
    {
        let path = self.traverse(src, dst)?;
        let distance = self.vertex(dst)?.distance();
        let keys: Vec<String> = path.iter().map(|key| key.to_string()).collect();
        Ok(format!(
            "Path from {} to {} ({}): {}",
            src,
            dst,
            format_weight(distance),
            keys.join(" ")
        ))
    }
}
