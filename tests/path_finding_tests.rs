use adjacency_graph::algorithm::ShortestPathAlgorithm;
use adjacency_graph::graph::generators::{grid_graph, random_graph};
use adjacency_graph::{BellmanFord, Dijkstra, Error, Graph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

fn abc() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", w(1.0));
    graph.add_edge("B", "C", w(2.0));
    graph.add_edge("A", "C", w(5.0));
    graph
}

// Floyd-Warshall over the graph's edge set, used as a reference
fn reference_distances(graph: &Graph<usize>) -> Vec<Vec<f64>> {
    let n = graph.size();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for (&from, &to, weight) in graph.edges() {
        dist[from][to] = dist[from][to].min(weight.0);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k] + dist[k][j] < dist[i][j] {
                    dist[i][j] = dist[i][k] + dist[k][j];
                }
            }
        }
    }
    dist
}

#[test]
fn test_dijkstra_simple_graph() {
    let mut graph = abc();
    graph.dijkstra(&"A").unwrap();

    assert_eq!(graph.vertex(&"A").unwrap().distance(), w(0.0));
    assert_eq!(graph.vertex(&"B").unwrap().distance(), w(1.0));
    assert_eq!(graph.vertex(&"C").unwrap().distance(), w(3.0));
    assert_eq!(graph.previous_key(&"C").unwrap(), Some(&"B"));

    assert_eq!(graph.traverse(&"A", &"C").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(graph.traverse(&"A", &"A").unwrap(), vec!["A"]);
    assert_eq!(
        graph.format_path(&"A", &"C").unwrap(),
        "Path from A to C (3): A B C"
    );
}

#[test]
fn test_bellman_ford_detects_negative_cycle() {
    let mut graph = abc();
    graph.add_edge("C", "A", w(-10.0));

    let err = graph.bellman_ford(&"A").unwrap_err();
    assert!(matches!(err, Error::NegativeCycle { .. }), "got {:?}", err);
}

#[test]
fn test_bellman_ford_negative_self_loop() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("s", "t", w(2.0));
    graph.add_edge("t", "t", w(-1.0));

    assert!(matches!(graph.bellman_ford(&"s"), Err(Error::NegativeCycle { .. })));
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("s", "t", w(2.0));
    graph.add_edge("x", "y", w(-3.0));
    graph.add_edge("y", "x", w(-3.0));

    graph.bellman_ford(&"s").unwrap();
    assert_eq!(graph.vertex(&"t").unwrap().distance(), w(2.0));
    assert_eq!(graph.vertex(&"x").unwrap().distance(), w(f64::INFINITY));
    assert_eq!(graph.vertex(&"y").unwrap().previous(), None);
}

#[test]
fn test_bellman_ford_with_negative_edges_matches_reference() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..5 {
        let n = 30;
        let mut graph: Graph<usize> = Graph::new();
        for v in 0..n {
            graph.add_vertex(v);
        }
        // edges only go forward, so there is no cycle at all
        for _ in 0..120 {
            let u = rng.gen_range(0..n - 1);
            let v = rng.gen_range(u + 1..n);
            graph.add_edge(u, v, w(rng.gen_range(-20..50) as f64));
        }

        let reference = reference_distances(&graph);
        graph.bellman_ford(&0).unwrap();

        for v in 0..n {
            assert_eq!(graph.vertex(&v).unwrap().distance().0, reference[0][v], "vertex {}", v);
            if v != 0 && reference[0][v].is_finite() {
                let path = graph.traverse(&0, &v).unwrap();
                assert_eq!(graph.path_weight(&path).unwrap().0, reference[0][v]);
            }
        }
    }
}

#[test]
fn test_early_exit_does_not_change_results() {
    let mut with_exit = random_graph(150, 3.0, 5);
    let mut without_exit = with_exit.clone();

    BellmanFord::new().compute_shortest_paths(&mut with_exit, &0).unwrap();
    BellmanFord::new()
        .with_early_exit(false)
        .compute_shortest_paths(&mut without_exit, &0)
        .unwrap();

    for v in 0..150usize {
        let a = with_exit.vertex(&v).unwrap();
        let b = without_exit.vertex(&v).unwrap();
        assert_eq!(a.distance(), b.distance());
        assert_eq!(a.previous(), b.previous());
    }
}

#[test]
fn test_dijkstra_matches_bellman_ford_on_random_graphs() {
    for seed in 0..8 {
        let mut dijkstra_graph = random_graph(250, 3.0, seed);
        let mut bellman_graph = dijkstra_graph.clone();

        let dijkstra = Dijkstra::new();
        let bellman_ford = BellmanFord::new();
        dijkstra.compute_shortest_paths(&mut dijkstra_graph, &0).unwrap();
        bellman_ford.compute_shortest_paths(&mut bellman_graph, &0).unwrap();

        for v in 0..250usize {
            let d = dijkstra_graph.vertex(&v).unwrap().distance().0;
            let b = bellman_graph.vertex(&v).unwrap().distance().0;
            if d.is_infinite() || b.is_infinite() {
                assert_eq!(d, b, "seed {} vertex {}", seed, v);
            } else {
                assert!((d - b).abs() < 1e-9, "seed {} vertex {}: {} vs {}", seed, v, d, b);
            }
        }
    }
}

#[test]
fn test_traversed_path_weight_equals_distance() {
    let mut graph = random_graph(400, 2.5, 99);
    let dijkstra = Dijkstra::new();
    dijkstra.compute_shortest_paths(&mut graph, &0).unwrap();

    for target in 1..400usize {
        let distance = graph.vertex(&target).unwrap().distance();
        if distance.0.is_infinite() {
            assert!(matches!(
                <Dijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>>>::get_path(
                    &dijkstra, &graph, &0, &target
                ),
                Err(Error::NoPath { .. })
            ));
            continue;
        }
        let path = <Dijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>>>::get_path(
            &dijkstra, &graph, &0, &target,
        )
        .unwrap();
        assert_eq!(path[0], 0, "Path should start at source");
        assert_eq!(path[path.len() - 1], target, "Path should end at target");
        let weight = graph.path_weight(&path).unwrap();
        assert!((weight.0 - distance.0).abs() < 1e-9);
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let mut graph = grid_graph(10, 10);
    graph.dijkstra(&0).unwrap();

    assert_eq!(graph.vertex(&99).unwrap().distance(), w(18.0));
    let path = graph.traverse(&0, &99).unwrap();
    assert_eq!(path.len(), 19);
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }
}

#[test]
fn test_dijkstra_rejects_negative_edges_by_default() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("a", "b", w(2.0));
    graph.add_edge("b", "c", w(-1.0));

    match graph.dijkstra(&"a") {
        Err(Error::NegativeWeight { weight, .. }) => assert_eq!(weight, -1.0),
        other => panic!("expected NegativeWeight, got {:?}", other),
    }

    graph.reset_search_state();
    Dijkstra::new()
        .with_weight_check(false)
        .compute_shortest_paths(&mut graph, &"a")
        .unwrap();
    assert_eq!(graph.vertex(&"c").unwrap().distance(), w(1.0));
}

#[test]
fn test_dijkstra_negative_edge_outside_reach_is_fine() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("a", "b", w(2.0));
    graph.add_edge("x", "y", w(-1.0));
    assert!(graph.dijkstra(&"a").is_ok());
}

#[test]
fn test_dijkstra_ties_break_by_key() {
    // b and c are both at distance 1 and both reach d at 2; b is settled first
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("a", "c", w(1.0));
    graph.add_edge("a", "b", w(1.0));
    graph.add_edge("c", "d", w(1.0));
    graph.add_edge("b", "d", w(1.0));

    graph.dijkstra(&"a").unwrap();
    assert_eq!(graph.previous_key(&"d").unwrap(), Some(&"b"));
}

#[test]
fn test_traverse_without_a_run_is_an_error() {
    let graph = abc();
    assert!(matches!(graph.traverse(&"A", &"C"), Err(Error::NoPath { .. })));
}

#[test]
fn test_traverse_detects_predecessor_cycles() {
    let mut graph = abc();
    graph.set_previous(&"B", Some(&"C")).unwrap();
    graph.set_previous(&"C", Some(&"B")).unwrap();

    assert!(matches!(
        graph.traverse(&"A", &"C"),
        Err(Error::PredecessorCycle(_))
    ));
}

#[test]
fn test_set_previous_builds_a_walkable_chain() {
    let mut graph = abc();
    graph.set_previous(&"C", Some(&"A")).unwrap();
    assert_eq!(graph.traverse(&"A", &"C").unwrap(), vec!["A", "C"]);

    graph.set_previous(&"C", None).unwrap();
    assert!(matches!(graph.traverse(&"A", &"C"), Err(Error::NoPath { .. })));

    // unknown keys are rejected and nothing is written
    assert!(matches!(
        graph.set_previous(&"C", Some(&"Z")),
        Err(Error::KeyNotFound(_))
    ));
    assert!(matches!(
        graph.set_previous(&"Z", Some(&"A")),
        Err(Error::KeyNotFound(_))
    ));
    assert_eq!(graph.previous_key(&"C").unwrap(), None);
}

#[test]
fn test_dijkstra_without_weight_check_terminates_on_negative_cycle() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("a", "b", w(1.0));
    graph.add_edge("b", "a", w(-3.0));
    graph.add_edge("b", "c", w(1.0));

    Dijkstra::new()
        .with_weight_check(false)
        .compute_shortest_paths(&mut graph, &"a")
        .unwrap();

    // every vertex is expanded once; the settled start keeps the lowered distance
    assert_eq!(graph.vertex(&"a").unwrap().distance(), w(-2.0));
    assert_eq!(graph.vertex(&"b").unwrap().distance(), w(1.0));
    assert_eq!(graph.vertex(&"c").unwrap().distance(), w(2.0));
    assert_eq!(graph.traverse(&"a", &"c").unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_algorithm_names() {
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<usize, OrderedFloat<f64>>>::name(&Dijkstra::new()),
        "Dijkstra"
    );
    assert_eq!(
        <BellmanFord as ShortestPathAlgorithm<usize, OrderedFloat<f64>>>::name(&BellmanFord::new()),
        "Bellman-Ford"
    );
}
