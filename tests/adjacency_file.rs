use std::{fs::File, io::BufWriter, path::PathBuf};

use faster_sssp::{
    graphs::{
        adjacency_file::{
            read_graph_from_adjacency, read_graph_from_adjacency_file, write_adjacency,
            AdjacencyFileError,
        },
        edge::WeightedEdge,
        hash_graph::HashGraph,
        Graph,
    },
    search::{
        dijkstra::{compute_distances, sum_of_distances, sum_of_distances_from_file},
        SearchError,
    },
};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn parse(text: &str, symmetric: bool) -> Result<HashGraph<String, u64>, AdjacencyFileError> {
    read_graph_from_adjacency(text.as_bytes(), symmetric)
}

#[test]
fn symmetric_triangle_from_file() {
    let answer: u64 = sum_of_distances_from_file(&data_path("triangle.txt"), "0", true).unwrap();
    assert_eq!(answer, 22);
}

#[test]
fn directed_triangle_from_file() {
    let graph: HashGraph<String, u64> =
        read_graph_from_adjacency_file(&data_path("triangle.txt"), false).unwrap();
    assert_eq!(graph.number_of_vertices(), 3);
    assert_eq!(graph.number_of_edges(), 3);

    let distances = compute_distances(&graph, &"0".to_string()).unwrap();
    assert_eq!(distances.get("1"), Some(&10));
    assert_eq!(distances.get("2"), Some(&12));

    let distances = compute_distances(&graph, &"2".to_string()).unwrap();
    assert!(distances.is_empty());
}

#[test]
fn source_is_honored() {
    let answer: u64 = sum_of_distances_from_file(&data_path("triangle.txt"), "2", true).unwrap();
    // 2 -> 1 costs 2, 2 -> 1 -> 0 costs 12
    assert_eq!(answer, 14);
}

#[test]
fn vertex_and_edge_miscount() {
    let result = sum_of_distances_from_file::<u64>(&data_path("triangle_bad_count.txt"), "0", true);
    assert!(matches!(
        result,
        Err(SearchError::AdjacencyFile(AdjacencyFileError::CountMismatch {
            declared_vertices: 4,
            declared_edges: 3,
            vertices: 3,
            edges: 3,
        }))
    ));
}

#[test]
fn edge_miscount() {
    let result = parse("n=2 m=2\na\nb 1\n", true);
    assert!(matches!(
        result,
        Err(AdjacencyFileError::CountMismatch { edges: 1, .. })
    ));
}

#[test]
fn missing_file() {
    let result = read_graph_from_adjacency_file::<u64>(&data_path("does_not_exist.txt"), true);
    assert!(matches!(result, Err(AdjacencyFileError::Io(_))));
}

#[test]
fn empty_input_has_no_header() {
    assert!(matches!(
        parse("", true),
        Err(AdjacencyFileError::MalformedHeader(_))
    ));
}

#[test]
fn edge_before_vertex() {
    assert!(matches!(
        parse("n=2 m=1\nb 1\n", true),
        Err(AdjacencyFileError::EdgeWithoutTail { line: 2 })
    ));
}

#[test]
fn invalid_weight() {
    let result = parse("n=2 m=1\na\nb heavy\n", true);
    assert!(matches!(
        result,
        Err(AdjacencyFileError::InvalidWeight { line: 3, ref weight }) if weight == "heavy"
    ));

    let negative = parse("n=2 m=1\na\nb -1\n", true);
    assert!(matches!(
        negative,
        Err(AdjacencyFileError::InvalidWeight { line: 3, .. })
    ));
}

#[test]
fn too_many_values() {
    assert!(matches!(
        parse("n=2 m=1\na\nb 1 2\n", true),
        Err(AdjacencyFileError::MalformedLine { line: 3, found: 3 })
    ));
}

#[test]
fn blank_lines_and_isolated_vertices() {
    let graph = parse("n=3 m=1\n\na\nb 4\n\nc\n", false).unwrap();
    assert_eq!(graph.number_of_vertices(), 3);
    assert!(graph.contains_vertex(&"c".to_string()));
    assert_eq!(graph.get_edge_weight(&"a".to_string(), &"b".to_string()), Some(4));
    assert_eq!(graph.get_edge_weight(&"b".to_string(), &"a".to_string()), None);
}

#[test]
fn written_graph_reads_back() {
    let edges = vec![
        WeightedEdge::new(0_u32, 1, 10_u64),
        WeightedEdge::new(2, 1, 2),
        WeightedEdge::new(0, 2, 15),
        WeightedEdge::new(3, 2, 1),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    write_adjacency(BufWriter::new(File::create(&path).unwrap()), &edges).unwrap();

    let graph: HashGraph<String, u64> = read_graph_from_adjacency_file(&path, true).unwrap();
    assert_eq!(graph.number_of_vertices(), 4);
    assert_eq!(graph.number_of_edges(), 2 * edges.len());

    let expected: HashGraph<u32, u64> = edges
        .iter()
        .flat_map(|edge| [edge.clone(), edge.reversed()])
        .collect();
    assert_eq!(
        sum_of_distances(&graph, &"0".to_string()),
        sum_of_distances(&expected, &0)
    );
}
