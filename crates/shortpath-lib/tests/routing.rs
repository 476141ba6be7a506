mod common;

use shortpath_lib::{dijkstra, sample_graph, shortest_path_between, Error, Graph, Path};

use common::{directed_fixture, label_pairs};

#[test]
fn prefers_longer_chain_over_heavy_direct_edge() {
    let graph = directed_fixture();
    let path = graph.shortest_path_between("B", "E").expect("path exists");

    assert_eq!(path.to_string(), "B -> C -> D -> E");
    assert_eq!(path.distance(), 6);
    assert_eq!(path.hop_count(), 3);
    assert_eq!(path.source(), "B");
    assert_eq!(path.destination(), "E");
}

#[test]
fn undirected_sample_graph_matches_directed_answer() {
    let graph = sample_graph(false, true);
    let path = shortest_path_between(&graph, "B", "E").expect("path exists");
    assert_eq!(path.to_string(), "B -> C -> D -> E");
    assert_eq!(path.distance(), 6);

    let back = shortest_path_between(&graph, "E", "A").expect("undirected path back");
    assert_eq!(back.to_string(), "E -> D -> C -> B -> A");
    assert_eq!(back.distance(), 7);
}

#[test]
fn single_vertex_path_has_zero_distance() {
    let graph = Graph::with_vertices(true, true, ["A"]);
    let path = graph.shortest_path_between("A", "A").expect("trivial path");

    assert_eq!(path.vertices(), &["A".to_string()]);
    assert_eq!(path.distance(), 0);
    assert_eq!(path.to_string(), "A");
}

#[test]
fn disconnected_vertices_report_no_path() {
    let graph = Graph::with_vertices(true, true, ["A", "B"]);
    let error = graph.shortest_path_between("A", "B").expect_err("no edge");

    assert_eq!(
        error,
        Error::NoPathExists {
            from: "A".to_string(),
            to: "B".to_string(),
        }
    );
    assert_eq!(error.to_string(), "no path exists from A to B");
}

#[test]
fn directed_edges_are_not_walked_backwards() {
    let graph = directed_fixture();
    let error = graph.shortest_path_between("E", "A").expect_err("edges point away");
    assert!(matches!(error, Error::NoPathExists { .. }));
}

#[test]
fn unknown_source_is_rejected_before_solving() {
    let graph = directed_fixture();
    let error = dijkstra(&graph, "Z").expect_err("unknown source");
    assert!(matches!(error, Error::UnknownVertex { ref label, .. } if label == "Z"));

    let error = graph.shortest_path_between("A", "Z").expect_err("unknown goal");
    assert!(matches!(error, Error::UnknownVertex { ref label, .. } if label == "Z"));
}

#[test]
fn table_records_distances_and_predecessors() {
    let graph = directed_fixture();
    let table = graph.dijkstras("B").expect("B exists");

    assert_eq!(table.source(), "B");
    assert_eq!(table.distance("B").unwrap(), Some(0));
    assert_eq!(table.predecessor("B").unwrap(), Some("B"));
    assert_eq!(table.distance("C").unwrap(), Some(3));
    assert_eq!(table.distance("D").unwrap(), Some(4));
    assert_eq!(table.distance("E").unwrap(), Some(6));
    assert_eq!(table.predecessor("E").unwrap(), Some("D"));

    assert_eq!(table.distance("A").unwrap(), None);
    assert_eq!(table.predecessor("A").unwrap(), None);
    assert!(!table.is_reachable("A").unwrap());

    let reachable: Vec<(&str, u64)> = table.reachable().collect();
    assert_eq!(reachable, vec![("B", 0), ("C", 3), ("D", 4), ("E", 6)]);
}

#[test]
fn equal_cost_ties_go_to_first_inserted_vertex() {
    let mut graph = Graph::with_vertices(true, true, ["S", "X", "Y", "T"]);
    graph.set_edge("S", "Y", 1).unwrap();
    graph.set_edge("S", "X", 1).unwrap();
    graph.set_edge("X", "T", 1).unwrap();
    graph.set_edge("Y", "T", 1).unwrap();

    for _ in 0..3 {
        let path = graph.shortest_path_between("S", "T").unwrap();
        assert_eq!(path.to_string(), "S -> X -> T");
    }
}

#[test]
fn zero_weight_edges_are_usable() {
    let mut graph = Graph::with_vertices(true, true, ["A", "B", "C"]);
    graph.set_edge("A", "B", 0).unwrap();
    graph.set_edge("B", "C", 0).unwrap();
    graph.set_edge("A", "C", 1).unwrap();

    let path = graph.shortest_path_between("A", "C").unwrap();
    assert_eq!(path.to_string(), "A -> B -> C");
    assert_eq!(path.distance(), 0);
}

#[test]
fn unweighted_graph_counts_hops() {
    let mut graph = sample_graph(true, false);
    graph.set_edge("B", "E", 100).unwrap();

    let path = graph.shortest_path_between("B", "E").unwrap();
    assert_eq!(path.to_string(), "B -> E");
    assert_eq!(path.distance(), 1);
}

#[test]
fn reconstructed_distance_matches_table_for_every_pair() {
    let mut graph = Graph::with_vertices(true, true, ["A", "B", "C", "D", "E", "F"]);
    for (from, to, weight) in [
        ("A", "B", 7),
        ("A", "C", 9),
        ("A", "F", 14),
        ("B", "C", 10),
        ("B", "D", 15),
        ("C", "D", 11),
        ("C", "F", 2),
        ("D", "E", 6),
        ("F", "E", 9),
        ("E", "A", 3),
    ] {
        graph.set_edge(from, to, weight).unwrap();
    }

    for (source, destination) in label_pairs(&graph) {
        let table = graph.dijkstras(&source).unwrap();
        match table.distance(&destination).unwrap() {
            Some(expected) => {
                let path = table.path_to(&destination).unwrap();
                assert_eq!(path.distance(), expected, "{source} -> {destination}");
                assert_eq!(path.source(), source);
                assert_eq!(path.destination(), destination);
            }
            None => {
                let error = table.path_to(&destination).unwrap_err();
                assert!(matches!(error, Error::NoPathExists { .. }));
            }
        }
    }
}

#[test]
fn path_distance_is_summed_from_edges() {
    let graph = directed_fixture();
    let path = Path::new(&graph, &["A", "B", "E"]).expect("edges exist");
    assert_eq!(path.distance(), 9);
}

#[test]
fn set_path_recomputes_distance() {
    let graph = directed_fixture();
    let mut path = Path::new(&graph, &["A", "B"]).unwrap();
    assert_eq!(path.distance(), 1);

    path.set_path(&graph, &["B", "C", "D"]).unwrap();
    assert_eq!(path.distance(), 4);
    assert_eq!(path.to_string(), "B -> C -> D");
}

#[test]
fn set_path_keeps_previous_path_on_error() {
    let graph = directed_fixture();
    let mut path = Path::new(&graph, &["A", "B"]).unwrap();

    let error = path.set_path(&graph, &["A", "C"]).unwrap_err();
    assert_eq!(
        error,
        Error::MissingEdge {
            from: "A".to_string(),
            to: "C".to_string(),
        }
    );
    assert_eq!(path.to_string(), "A -> B");
    assert_eq!(path.distance(), 1);
}

#[test]
fn empty_path_is_rejected() {
    let graph = directed_fixture();
    let labels: [&str; 0] = [];
    assert_eq!(Path::new(&graph, &labels).unwrap_err(), Error::EmptyPath);
}

#[test]
fn path_serialises_vertices_and_distance() {
    let graph = directed_fixture();
    let path = graph.shortest_path_between("A", "C").unwrap();
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "vertices": ["A", "B", "C"], "distance": 4 })
    );
}
