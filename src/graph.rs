//! Sparse weighted graph extracted from a weight matrix.
//!
//! The graph is a mapping node → (neighbour → weight). Undirected edges are
//! stored in both directions explicitly, and maps are ordered so iteration
//! (and therefore serialization) is deterministic.

use std::collections::BTreeMap;

use crate::matrix::DistanceMatrix;

pub type NodeId = usize;

/// Weighted graph in mapping-of-mappings form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the undirected edge {u, v} with weight `w`, stored as u→v and v→u.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, w: f64) {
        self.add_arc(u, v, w);
        self.add_arc(v, u, w);
    }

    /// Insert the single direction u→v.
    pub fn add_arc(&mut self, u: NodeId, v: NodeId, w: f64) {
        self.adjacency.entry(u).or_default().insert(v, w);
    }

    /// Nodes that appear as a key of the mapping, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Outgoing (neighbour, weight) pairs of `u`, ascending by neighbour.
    pub fn neighbors(&self, u: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(&u)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&v, &w)| (v, w)))
    }

    /// Every stored (source, target, weight) record, grouped by source.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&u, m)| m.iter().map(move |(&v, &w)| (u, v, w)))
    }

    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(&u).and_then(|m| m.get(&v)).copied()
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored directed records.
    pub fn num_arcs(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum()
    }

    /// Number of logical undirected edges {u, v}, u ≠ v.
    pub fn num_edges(&self) -> usize {
        self.arcs()
            .filter(|&(u, v, _)| u < v || (u > v && self.weight(v, u).is_none()))
            .count()
    }

    /// Sum of weights over logical undirected edges.
    pub fn total_weight(&self) -> f64 {
        self.arcs()
            .filter(|&(u, v, _)| u < v || (u > v && self.weight(v, u).is_none()))
            .map(|(_, _, w)| w)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Graph of all finite entries (i, j), i < j, of `matrix`, stored in both directions.
///
/// The diagonal is never read, so the result has no self-loops.
pub fn extract_graph(matrix: &DistanceMatrix) -> Graph {
    let mut graph = Graph::new();
    let n = matrix.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix.has_edge(i, j) {
                graph.add_edge(i, j, matrix.get(i, j));
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::NO_EDGE;

    #[test]
    fn test_extract_stores_both_directions() {
        let inf = NO_EDGE;
        let m = DistanceMatrix::from_rows(&[
            vec![0.0, 2.0, inf],
            vec![2.0, 0.0, 1.5],
            vec![inf, 1.5, 0.0],
        ])
        .unwrap();
        let g = extract_graph(&m);
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.weight(0, 1), Some(2.0));
        assert_eq!(g.weight(1, 0), Some(2.0));
        assert_eq!(g.weight(0, 2), None);
        assert_eq!(g.total_weight(), 3.5);
    }

    #[test]
    fn test_no_self_loops() {
        let m = DistanceMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let g = extract_graph(&m);
        assert!(g.arcs().all(|(u, v, _)| u != v));
    }

    #[test]
    fn test_upper_triangle_wins_for_asymmetric_input() {
        let inf = NO_EDGE;
        let m = DistanceMatrix::from_rows(&[vec![inf, 4.0], vec![7.0, inf]]).unwrap();
        let g = extract_graph(&m);
        assert_eq!(g.weight(1, 0), Some(4.0));
    }

    #[test]
    fn test_isolated_nodes_absent() {
        let g = extract_graph(&DistanceMatrix::unconnected(4));
        assert!(g.is_empty());
    }

    #[test]
    fn test_arcs_and_neighbors_ordered() {
        let mut g = Graph::new();
        g.add_edge(2, 0, 1.0);
        g.add_edge(1, 2, 3.0);
        let arcs: Vec<_> = g.arcs().map(|(u, v, _)| (u, v)).collect();
        assert_eq!(arcs, vec![(0, 2), (1, 2), (2, 0), (2, 1)]);
        let nb: Vec<_> = g.neighbors(2).collect();
        assert_eq!(nb, vec![(0, 1.0), (1, 3.0)]);
        assert_eq!(g.neighbors(9).count(), 0);
    }

    #[test]
    fn test_single_direction_counts_as_edge() {
        let mut g = Graph::new();
        g.add_arc(3, 1, 2.0);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.num_nodes(), 1);
    }
}
