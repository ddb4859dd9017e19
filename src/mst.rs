//! Minimum spanning forest via Kruskal's algorithm.
//!
//! Every finite entry (u, v) of the adjacency matrix is a candidate edge.
//! Candidates are sorted by weight with a stable sort over their flattened
//! row-major position, so equal weights are taken in matrix order and the
//! result is reproducible. An edge is accepted when its endpoints lie in
//! different sets of a [`DisjointSetForest`] local to the call.
//!
//! Time: O(n² log n) for the sort over a dense n × n matrix, plus
//! O(E α(n)) for union-find.

use log::debug;

use crate::disjoint_set::DisjointSetForest;
use crate::error::Result;
use crate::matrix::{DistanceMatrix, NO_EDGE};

/// An accepted tree edge: (u, v, weight), with (u, v) the matrix position it
/// was taken from.
pub type TreeEdge = (usize, usize, f64);

/// Result of Kruskal's algorithm: the accepted edges of a minimum spanning forest.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningForest {
    num_nodes: usize,
    edges: Vec<TreeEdge>,
}

impl SpanningForest {
    /// Accepted edges in acceptance order (ascending weight).
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of logical (undirected) edges; n − k for k components.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of trees in the forest.
    pub fn num_components(&self) -> usize {
        self.num_nodes - self.edges.len()
    }

    /// Sum of accepted edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|&(_, _, w)| w).sum()
    }

    /// Matrix with accepted weights mirrored at (u, v) and (v, u), [`NO_EDGE`] elsewhere.
    pub fn to_matrix(&self) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::unconnected(self.num_nodes);
        for &(u, v, w) in &self.edges {
            matrix.set(u, v, w);
            matrix.set(v, u, w);
        }
        matrix
    }
}

/// Run Kruskal's algorithm on `adjacency`.
pub fn kruskal(adjacency: &DistanceMatrix) -> Result<SpanningForest> {
    let n = adjacency.len();
    let weights = adjacency.as_slice();

    let mut candidates: Vec<usize> = (0..weights.len())
        .filter(|&k| weights[k] != NO_EDGE)
        .collect();
    // `sort_by` is stable: ties keep flattened-position order.
    candidates.sort_by(|&a, &b| weights[a].total_cmp(&weights[b]));

    let mut forest = DisjointSetForest::make_sets(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for k in candidates {
        if forest.set_count() <= 1 {
            break;
        }
        let (u, v) = (k / n, k % n);
        let set_u = forest.find_set(u);
        let set_v = forest.find_set(v);
        if set_u != set_v {
            forest.union(set_u, set_v)?;
            edges.push((u, v, weights[k]));
        }
    }

    debug!(
        "kruskal: accepted {} edges over {} nodes ({} components)",
        edges.len(),
        n,
        forest.set_count()
    );
    Ok(SpanningForest {
        num_nodes: n,
        edges,
    })
}

/// Minimum spanning forest of `adjacency` as a matrix of the same shape.
pub fn minimum_spanning_tree(adjacency: &DistanceMatrix) -> Result<DistanceMatrix> {
    Ok(kruskal(adjacency)?.to_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::adjacency_matrix;
    use crate::lattice::Lattice;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn symmetric(n: usize, edges: &[(usize, usize, f64)]) -> DistanceMatrix {
        let mut m = DistanceMatrix::unconnected(n);
        for &(u, v, w) in edges {
            m.set(u, v, w);
            m.set(v, u, w);
        }
        m
    }

    fn logical_edges(m: &DistanceMatrix) -> Vec<(usize, usize, f64)> {
        let mut out = Vec::new();
        for u in 0..m.len() {
            for v in (u + 1)..m.len() {
                if m.has_edge(u, v) {
                    out.push((u, v, m.get(u, v)));
                }
            }
        }
        out
    }

    #[test]
    fn test_four_node_complete_graph_optimum() {
        let m = symmetric(
            4,
            &[
                (0, 1, 1.0),
                (0, 2, 4.0),
                (0, 3, 3.0),
                (1, 2, 2.0),
                (1, 3, 5.0),
                (2, 3, 6.0),
            ],
        );
        let forest = kruskal(&m).unwrap();
        assert_eq!(forest.total_weight(), 6.0);
        assert_eq!(forest.num_edges(), 3);

        let tree = minimum_spanning_tree(&m).unwrap();
        assert_eq!(
            logical_edges(&tree),
            vec![(0, 1, 1.0), (0, 3, 3.0), (1, 2, 2.0)]
        );
        assert!(tree.is_symmetric());
        assert_eq!(tree.finite_entries(), 6);
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        // Two components {0,1,2} and {3,4}, plus isolated node 5.
        let m = symmetric(6, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 0.5), (3, 4, 2.0)]);
        let forest = kruskal(&m).unwrap();
        assert_eq!(forest.num_edges(), 3);
        assert_eq!(forest.num_components(), 3);
        assert_eq!(forest.total_weight(), 3.5);
    }

    #[test]
    fn test_no_edges_is_valid() {
        let forest = kruskal(&DistanceMatrix::unconnected(3)).unwrap();
        assert_eq!(forest.num_edges(), 0);
        assert_eq!(forest.to_matrix(), DistanceMatrix::unconnected(3));
    }

    #[test]
    fn test_empty_matrix() {
        let forest = kruskal(&DistanceMatrix::unconnected(0)).unwrap();
        assert_eq!(forest.num_components(), 0);
    }

    #[test]
    fn test_ties_follow_matrix_order() {
        // Triangle with equal weights: (0,1) then (0,2) come first in row-major order.
        let m = symmetric(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]);
        let forest = kruskal(&m).unwrap();
        assert_eq!(forest.edges(), &[(0, 1, 1.0), (0, 2, 1.0)]);
    }

    #[test]
    fn test_lattice_mst_spans_all_nodes() {
        let mut rng = StdRng::seed_from_u64(5);
        let (nx, ny, dim) = (6, 5, 3);
        let data = (0..nx * ny * dim).map(|_| rng.gen::<f64>()).collect();
        let lat = Lattice::real(nx, ny, dim, data).unwrap();
        let adj = adjacency_matrix(&lat);
        let forest = kruskal(&adj).unwrap();
        assert_eq!(forest.num_edges(), nx * ny - 1);
        assert_eq!(forest.num_components(), 1);
        let tree = forest.to_matrix();
        assert_eq!(tree.finite_entries(), 2 * (nx * ny - 1));
        for (u, v, w) in logical_edges(&tree) {
            assert_eq!(adj.get(u, v), w);
        }
    }

    #[test]
    fn test_mst_not_heavier_than_random_spanning_trees() {
        // Any spanning tree found by Kruskal on shuffled weights is at least as heavy.
        let mut rng = StdRng::seed_from_u64(9);
        let n = 7;
        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                edges.push((u, v, rng.gen_range(1.0..10.0)));
            }
        }
        let m = symmetric(n, &edges);
        let best = kruskal(&m).unwrap().total_weight();
        for _ in 0..20 {
            let shuffled: Vec<_> = edges
                .iter()
                .map(|&(u, v, _)| (u, v, rng.gen_range(1.0..10.0)))
                .collect();
            let other = kruskal(&symmetric(n, &shuffled)).unwrap();
            let weight_in_m: f64 = other.edges().iter().map(|&(u, v, _)| m.get(u, v)).sum();
            assert!(best <= weight_in_m + 1e-9);
        }
    }
}
