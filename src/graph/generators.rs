use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::graph::Graph;

/// Builds the word-ladder graph: an undirected graph whose vertices are words and
/// whose unit-weight edges join words that differ in exactly one letter position.
///
/// Words are bucketed by each of their "blanked" forms (one letter replaced by `_`),
/// and every pair of words sharing a bucket is connected.
pub fn word_ladder<I, S>(words: I) -> Graph<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buckets: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut graph = Graph::undirected();

    for word in words {
        let word = word.as_ref();
        graph.add_vertex(word.to_string());
        let letters: Vec<char> = word.chars().collect();
        for i in 0..letters.len() {
            let bucket: String = letters
                .iter()
                .enumerate()
                .map(|(j, &c)| if i == j { '_' } else { c })
                .collect();
            let members = buckets.entry(bucket).or_default();
            if !members.iter().any(|w| w == word) {
                members.push(word.to_string());
            }
        }
    }

    for members in buckets.values() {
        for (i, first) in members.iter().enumerate() {
            for second in &members[i + 1..] {
                graph.add_edge(first.clone(), second.clone(), OrderedFloat(1.0));
            }
        }
    }

    graph
}

/// Generates a random directed graph over vertices `0..n` with roughly
/// `edge_factor * n` edges and weights drawn from `[1, 100)`.
///
/// The same seed always produces the same graph. Self-loops are skipped.
pub fn random_graph(n: usize, edge_factor: f64, seed: u64) -> Graph<usize> {
    let mut graph = Graph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with unit edges in the four cardinal directions.
/// Vertex `y * width + x` sits at `(x, y)`.
pub fn grid_graph(width: usize, height: usize) -> Graph<usize> {
    let mut graph = Graph::with_capacity(width * height);

    for v in 0..width * height {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x > 0 {
                graph.add_edge(current, current - 1, OrderedFloat(1.0));
            }
            if x + 1 < width {
                graph.add_edge(current, current + 1, OrderedFloat(1.0));
            }
            if y > 0 {
                graph.add_edge(current, current - width, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}
