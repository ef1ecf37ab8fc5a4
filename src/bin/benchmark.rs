use std::env;
use std::time::{Duration, Instant};

use adjacency_graph::algorithm::ShortestPathAlgorithm;
use adjacency_graph::graph::generators::random_graph;
use adjacency_graph::graph::Graph;
use adjacency_graph::{BellmanFord, BreadthFirstSearch, Dijkstra};
use log::info;
use num_traits::Float;

// Function to benchmark an algorithm on a fresh copy of the graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &Graph<usize>, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<usize, ordered_float::OrderedFloat<f64>>,
{
    let mut graph = graph.clone();
    graph.reset_search_state();

    let start = Instant::now();
    let outcome = algorithm.compute_shortest_paths(&mut graph, &source);
    let duration = start.elapsed();

    match outcome {
        Ok(()) => {
            let reachable = graph.vertices().filter(|v| v.distance().is_finite()).count();
            println!(
                "  - {}: {} reachable vertices in {:?}",
                algorithm.name(),
                reachable,
                duration
            );
        }
        Err(err) => println!("  - {}: failed after {:?}: {}", algorithm.name(), duration, err),
    }

    duration
}

fn main() {
    env_logger::init();

    // Sizes can be given on the command line: benchmark 1000 5000 ...
    let args: Vec<usize> = env::args().skip(1).filter_map(|a| a.parse().ok()).collect();
    let graph_sizes = if args.is_empty() {
        vec![1_000, 5_000, 20_000]
    } else {
        args
    };

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: BFS vs Dijkstra vs Bellman-Ford");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for (i, &size) in graph_sizes.iter().enumerate() {
        info!("generating random graph with {} vertices", size);
        let graph = random_graph(size, edge_factor, i as u64);
        println!("\nGraph has {} vertices and {} edges", graph.size(), graph.edge_count());

        let bfs_time = benchmark_algorithm(&BreadthFirstSearch::new(), &graph, 0);
        let dijkstra_time = benchmark_algorithm(&Dijkstra::new(), &graph, 0);
        let bellman_ford_time = benchmark_algorithm(&BellmanFord::new(), &graph, 0);

        results.push((size, bfs_time, dijkstra_time, bellman_ford_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<14} | {:<18}",
        "Vertices", "BFS (ms)", "Dijkstra (ms)", "Bellman-Ford (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, bfs_time, dijkstra_time, bellman_ford_time) in &results {
        println!(
            "{:<10} | {:<10} | {:<14} | {:<18}",
            size,
            bfs_time.as_millis(),
            dijkstra_time.as_millis(),
            bellman_ford_time.as_millis()
        );
    }
}
