//! Adjacency matrix of a lattice under the toric Moore neighbourhood.
//!
//! Entry (p, q) is the metric distance between the vectors at nodes p and q
//! when q is one of p's 8 toric neighbours, and [`NO_EDGE`] otherwise.
//!
//! Writes happen node by node in row-major order, each node's neighbours in
//! the fixed [`toric_neighbors`] order, and every write is mirrored to (q, p).
//! On grids with an extent ≤ 2 several neighbours coincide and the last write
//! for a pair wins. With the `parallel` feature only the distance evaluation
//! runs on rayon; the writes are replayed in the same order, so the matrix is
//! identical either way.

use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::lattice::{Lattice, LatticeData};
use crate::matrix::{DistanceMatrix, NO_EDGE};
use crate::metric::{complex_euclidean, euclidean, MetricStrategy};
use crate::neighborhood::toric_neighbors;

/// Distances from one node to its 8 neighbours: (neighbour node, distance).
type NeighborRow = [(usize, f64); 8];

/// Derives an adjacency matrix from a lattice, or passes a pre-built one through.
#[derive(Debug, Clone)]
pub struct AdjacencyBuilder<'a> {
    lattice: Option<&'a Lattice>,
    matrix: Option<DistanceMatrix>,
}

impl<'a> AdjacencyBuilder<'a> {
    /// At least one of `lattice` and `matrix` must be given for [`build`](Self::build)
    /// to succeed. A supplied matrix takes precedence.
    pub fn new(lattice: Option<&'a Lattice>, matrix: Option<DistanceMatrix>) -> Self {
        Self { lattice, matrix }
    }

    pub fn from_lattice(lattice: &'a Lattice) -> Self {
        Self::new(Some(lattice), None)
    }

    pub fn from_matrix(matrix: DistanceMatrix) -> Self {
        Self::new(None, Some(matrix))
    }

    /// Metric that a lattice-based build would use.
    pub fn metric(&self) -> Option<MetricStrategy> {
        self.lattice.map(Lattice::metric)
    }

    /// Produce the adjacency matrix.
    pub fn build(self) -> Result<DistanceMatrix> {
        if let Some(matrix) = self.matrix {
            debug!("using supplied {}x{} adjacency matrix", matrix.len(), matrix.len());
            return Ok(matrix);
        }
        match self.lattice {
            Some(lattice) => Ok(adjacency_matrix(lattice)),
            None => Err(Error::Construction(
                "adjacency requires a lattice or a pre-built matrix".to_string(),
            )),
        }
    }
}

/// Toric Moore adjacency matrix of `lattice`.
pub fn adjacency_matrix(lattice: &Lattice) -> DistanceMatrix {
    let metric = lattice.metric();
    if metric == MetricStrategy::Complex {
        info!("complex vector space: using complex metric");
    }
    let rows = match lattice.data() {
        LatticeData::Real(cells) => neighbor_rows(lattice, cells, euclidean),
        LatticeData::Complex(cells) => neighbor_rows(lattice, cells, complex_euclidean),
    };

    let n = lattice.num_nodes();
    let mut matrix = DistanceMatrix::unconnected(n);
    for (p, row) in rows.iter().enumerate() {
        for &(q, d) in row {
            matrix.set(p, q, d);
            matrix.set(q, p, d);
        }
    }
    debug!(
        "built {n}x{n} adjacency ({} metric, {} finite entries)",
        metric.label(),
        matrix.finite_entries()
    );
    matrix
}

fn neighbor_rows<T, F>(lattice: &Lattice, cells: &[T], dist: F) -> Vec<NeighborRow>
where
    T: Sync,
    F: Fn(&[T], &[T]) -> f64 + Sync,
{
    let (nx, ny) = lattice.shape();
    let dim = lattice.dim();
    let cell = |p: usize| &cells[p * dim..(p + 1) * dim];
    let row = |p: usize| -> NeighborRow {
        let u = cell(p);
        toric_neighbors(lattice.coords(p), (nx, ny)).map(|(a, b)| {
            let q = lattice.flat_index(a, b);
            (q, dist(u, cell(q)))
        })
    };

    #[cfg(feature = "parallel")]
    {
        (0..lattice.num_nodes()).into_par_iter().map(row).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..lattice.num_nodes()).map(row).collect()
    }
}

/// True when `q` is a toric neighbour of `p` in `matrix`.
pub fn are_adjacent(matrix: &DistanceMatrix, p: usize, q: usize) -> bool {
    matrix.get(p, q) != NO_EDGE
}
