//! Common test utilities and fixture graphs.

use shortpath_lib::Graph;

#[allow(dead_code)]
/// Directed, weighted five-vertex graph: A->B (1), B->C (3), C->D (1),
/// D->E (2), B->E (8).
pub fn directed_fixture() -> Graph {
    let mut graph = Graph::with_vertices(true, true, ["A", "B", "C", "D", "E"]);
    for (from, to, weight) in [
        ("A", "B", 1),
        ("B", "C", 3),
        ("C", "D", 1),
        ("D", "E", 2),
        ("B", "E", 8),
    ] {
        graph.set_edge(from, to, weight).expect("fixture vertices exist");
    }
    graph
}

/// Every ordered pair of labels in `graph`.
#[allow(dead_code)]
pub fn label_pairs(graph: &Graph) -> Vec<(String, String)> {
    let labels: Vec<String> = graph.vertices().map(|v| v.label().to_string()).collect();
    labels
        .iter()
        .flat_map(|a| labels.iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}
