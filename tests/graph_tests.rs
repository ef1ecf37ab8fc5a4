use adjacency_graph::{Color, Error, Graph};
use ordered_float::OrderedFloat;

fn w(x: f64) -> OrderedFloat<f64> {
    OrderedFloat(x)
}

fn sample() -> Graph<&'static str> {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", w(1.0));
    graph.add_edge("B", "C", w(2.0));
    graph.add_edge("A", "C", w(5.0));
    graph
}

// Every entry in the edge set has a matching neighbor entry and vice versa
fn assert_consistent(graph: &Graph<&'static str>) {
    for (from, to, weight) in graph.edges() {
        let to_id = graph.id_of(to).unwrap();
        assert_eq!(graph.vertex(from).unwrap().get_neighbor(to_id), Some(weight));
    }
    let neighbor_total: usize = graph.vertices().map(|v| v.out_degree()).sum();
    assert_eq!(neighbor_total, graph.edge_count());
}

#[test]
fn test_add_edge_creates_vertices() {
    let graph = sample();
    assert_eq!(graph.size(), 3);
    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.contains(&"A"));
    assert!(!graph.contains(&"Z"));
    assert_eq!(graph.keys().copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(graph.edge_weight(&"A", &"C"), Some(w(5.0)));
    assert_eq!(graph.edge_weight(&"C", &"A"), None);
    assert_consistent(&graph);
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph = sample();
    let id = graph.id_of(&"A").unwrap();
    graph.vertex_mut(&"A").unwrap().set_color(Color::Black);

    assert_eq!(graph.add_vertex("A"), id);

    let a = graph.vertex(&"A").unwrap();
    assert_eq!(a.out_degree(), 2, "existing edges must survive");
    assert_eq!(a.color(), Color::Black, "existing metadata must survive");
    assert_eq!(graph.size(), 3);
    assert_consistent(&graph);
}

#[test]
fn test_re_adding_edge_overwrites_weight() {
    let mut graph = sample();
    graph.add_edge("A", "B", w(4.0));
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(w(4.0)));
    assert_consistent(&graph);
}

#[test]
fn test_unweighted_edge_defaults_to_zero() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_unweighted_edge("x", "y");
    assert_eq!(graph.edge_weight(&"x", &"y"), Some(w(0.0)));
}

#[test]
fn test_undirected_graph_stores_both_directions() {
    let mut graph: Graph<&str> = Graph::undirected();
    assert!(!graph.is_directed());
    graph.add_edge("a", "b", w(3.0));
    graph.add_edge("a", "a", w(1.0));
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edge_weight(&"b", &"a"), Some(w(3.0)));
    assert_eq!(graph.edge_weight(&"a", &"a"), Some(w(1.0)));
}

#[test]
fn test_missing_key_is_a_typed_error() {
    let mut graph = sample();
    assert!(graph.get_vertex(&"Z").is_none());
    assert!(matches!(graph.vertex(&"Z"), Err(Error::KeyNotFound(_))));
    assert!(matches!(graph.vertex_mut(&"Z"), Err(Error::KeyNotFound(_))));
    assert!(matches!(graph.bfs(&"Z"), Err(Error::KeyNotFound(_))));
    assert!(matches!(graph.dijkstra(&"Z"), Err(Error::KeyNotFound(_))));
    assert!(matches!(graph.bellman_ford(&"Z"), Err(Error::KeyNotFound(_))));
    assert!(matches!(graph.prim(&"Z"), Err(Error::KeyNotFound(_))));
    assert!(matches!(graph.traverse(&"A", &"Z"), Err(Error::KeyNotFound(_))));
}

#[test]
fn test_reset_distances_leaves_other_metadata() {
    let mut graph = sample();
    graph.bfs(&"A").unwrap();
    graph.reset_distances(w(7.0));

    for vertex in graph.vertices() {
        assert_eq!(vertex.distance(), w(7.0));
        assert_eq!(vertex.color(), Color::Black);
    }
    assert_eq!(graph.previous_key(&"B").unwrap(), Some(&"A"));

    graph.reset_distances(w(f64::INFINITY));
    assert!(graph.vertices().all(|v| v.distance() == w(f64::INFINITY)));
}

#[test]
fn test_reset_search_state_restores_fresh_vertices() {
    let mut graph = sample();
    graph.dfs();
    graph.dijkstra(&"A").unwrap();
    graph.reset_search_state();

    for vertex in graph.vertices() {
        assert_eq!(vertex.color(), Color::White);
        assert_eq!(vertex.distance(), w(f64::INFINITY));
        assert_eq!(vertex.previous(), None);
        assert_eq!(vertex.discovery_time(), 0);
        assert_eq!(vertex.closing_time(), 0);
    }
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_path_weight() {
    let graph = sample();
    assert_eq!(graph.path_weight(&["A", "B", "C"]).unwrap(), w(3.0));
    assert_eq!(graph.path_weight(&["A"]).unwrap(), w(0.0));
    assert!(matches!(
        graph.path_weight(&["C", "A"]),
        Err(Error::MissingEdge { .. })
    ));
}

#[test]
fn test_display_renders_one_row_per_vertex() {
    let mut graph = sample();
    graph.add_vertex("D");
    graph.dijkstra(&"A").unwrap();

    let rendered = graph.to_string();
    let rows: Vec<&str> = rendered.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[2],
        format!("{:^8}|{:^8}|{:^8}|{:^8}|{:^8}|{}", "C", "white", "3", 0, 0, "B")
    );
    assert_eq!(
        rows[3],
        format!("{:^8}|{:^8}|{:^8}|{:^8}|{:^8}|{}", "D", "white", "inf", 0, 0, "None")
    );
}

#[test]
fn test_set_previous_is_read_back_by_key() {
    let mut graph = sample();
    graph.add_vertex("D");
    graph.set_previous(&"D", Some(&"B")).unwrap();

    assert_eq!(graph.previous_key(&"D").unwrap(), Some(&"B"));
    let rendered = graph.to_string();
    assert!(rendered.lines().last().unwrap().ends_with("|B"));

    assert!(matches!(
        graph.set_previous(&"D", Some(&"Z")),
        Err(Error::KeyNotFound(_))
    ));
    assert_eq!(graph.previous_key(&"D").unwrap(), Some(&"B"));
}
