//! End-to-end checks over the full lattice → MST → GML pipeline.

use std::collections::BTreeMap;

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::prelude::*;

fn random_real_lattice(nx: usize, ny: usize, dim: usize, seed: u64) -> Lattice {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..nx * ny * dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Lattice::real(nx, ny, dim, data).unwrap()
}

fn random_complex_lattice(nx: usize, ny: usize, dim: usize, seed: u64) -> Lattice {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..nx * ny * dim)
        .map(|_| Complex64::new(rng.gen(), rng.gen()))
        .collect();
    Lattice::complex(nx, ny, dim, data).unwrap()
}

#[test]
fn test_pipeline_round_trip_counts() {
    let som = SomGraph::from_lattice(random_real_lattice(5, 4, 3, 1)).unwrap();
    let graph = som.mst_graph().unwrap();
    assert_eq!(graph.num_nodes(), 20);
    assert_eq!(graph.num_edges(), 19);

    let mut attrs = NodeAttributes::new();
    attrs.insert(
        "index".to_string(),
        (0..20).map(|n| (n, n as f64)).collect::<BTreeMap<_, _>>(),
    );
    let mut buf = Vec::new();
    write_gml(&mut buf, &graph, false, &attrs).unwrap();
    let doc = read_gml(buf.as_slice()).unwrap();
    assert_eq!(doc.nodes.len(), graph.num_nodes());
    assert_eq!(doc.edges.len(), 2 * graph.num_edges());
    assert!(doc.nodes.iter().all(|n| n.attributes["index"] == n.id as f64));
}

#[test]
fn test_full_adjacency_graph_degree() {
    let som = SomGraph::from_lattice(random_real_lattice(4, 4, 2, 2)).unwrap();
    let graph = som.graph();
    assert_eq!(graph.num_edges(), 4 * 16);
    for node in graph.nodes() {
        assert_eq!(graph.neighbors(node).count(), 8);
    }
}

#[test]
fn test_complex_pipeline_spans_lattice() {
    let lattice = random_complex_lattice(3, 5, 4, 3);
    let som = SomGraph::from_lattice(lattice).unwrap();
    assert_eq!(som.metric(), Some(MetricStrategy::Complex));
    let forest = som.spanning_forest().unwrap();
    assert_eq!(forest.num_edges(), 14);
    assert!(som.adjacency().is_symmetric());
}

#[test]
fn test_pipeline_deterministic() {
    let lattice = random_real_lattice(6, 6, 3, 4);
    let a = SomGraph::from_lattice(lattice.clone()).unwrap();
    let b = SomGraph::from_lattice(lattice).unwrap();
    assert_eq!(a.adjacency(), b.adjacency());
    assert_eq!(a.minimum_spanning_tree().unwrap(), b.minimum_spanning_tree().unwrap());
}

#[test]
fn test_tied_weights_deterministic() {
    // Constant-gradient lattice: many equal neighbour distances.
    let lattice = Lattice::real(4, 4, 1, (0..16).map(|k| (k % 4) as f64).collect()).unwrap();
    let first = SomGraph::from_lattice(lattice.clone()).unwrap().spanning_forest().unwrap();
    for _ in 0..5 {
        let again = SomGraph::from_lattice(lattice.clone()).unwrap().spanning_forest().unwrap();
        assert_eq!(first, again);
    }
    assert_eq!(first.num_edges(), 15);
}

#[test]
fn test_write_defaults_to_mst() {
    let som = SomGraph::from_lattice(random_real_lattice(3, 3, 2, 5)).unwrap();
    let path = std::env::temp_dir().join(format!("toric_mst_default_{}.gml", std::process::id()));
    som.write_gml(&path, None, false, &NodeAttributes::new()).unwrap();
    let doc = read_gml_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(doc.nodes.len(), 9);
    assert_eq!(doc.edges.len(), 16);
    assert_eq!(doc.to_graph(), som.mst_graph().unwrap().clone_rounded());
}

trait RoundedWeights {
    fn clone_rounded(&self) -> Graph;
}

impl RoundedWeights for Graph {
    /// Weights as they read back from a 4-decimal document.
    fn clone_rounded(&self) -> Graph {
        let mut out = Graph::new();
        for (u, v, w) in self.arcs() {
            let rounded: f64 = format!("{w:.4}").parse().unwrap();
            out.add_arc(u, v, rounded);
        }
        out
    }
}
