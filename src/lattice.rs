//! 2D vector lattice with periodic (toric) topology.
//!
//! The lattice is an nx × ny grid; every cell holds a vector of `dim` scalars,
//! all real or all complex. Cells are stored row-major in one buffer, and the
//! node index of cell (i, j) is `i * ny + j`. That flat index is the node
//! identifier used by the adjacency matrix, the MST and the GML output.

use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::metric::MetricStrategy;

/// Scalar storage of a lattice.
#[derive(Debug, Clone, PartialEq)]
pub enum LatticeData {
    Real(Vec<f64>),
    Complex(Vec<Complex64>),
}

impl LatticeData {
    fn len(&self) -> usize {
        match self {
            LatticeData::Real(v) => v.len(),
            LatticeData::Complex(v) => v.len(),
        }
    }
}

/// An immutable nx × ny grid of `dim`-length vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    nx: usize,
    ny: usize,
    dim: usize,
    data: LatticeData,
}

impl Lattice {
    /// Build a lattice from a row-major buffer of `nx * ny * dim` scalars.
    pub fn new(nx: usize, ny: usize, dim: usize, data: LatticeData) -> Result<Self> {
        if nx == 0 || ny == 0 || dim == 0 {
            return Err(Error::Construction(format!(
                "lattice extents must be non-zero, got {nx}x{ny}x{dim}"
            )));
        }
        let expected = nx * ny * dim;
        if data.len() != expected {
            return Err(Error::Shape {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { nx, ny, dim, data })
    }

    /// Real-valued lattice from a flat row-major buffer.
    pub fn real(nx: usize, ny: usize, dim: usize, data: Vec<f64>) -> Result<Self> {
        Self::new(nx, ny, dim, LatticeData::Real(data))
    }

    /// Complex-valued lattice from a flat row-major buffer.
    pub fn complex(nx: usize, ny: usize, dim: usize, data: Vec<Complex64>) -> Result<Self> {
        Self::new(nx, ny, dim, LatticeData::Complex(data))
    }

    /// Real-valued lattice from nested `[row][col][component]` vectors.
    pub fn from_real_cells(cells: Vec<Vec<Vec<f64>>>) -> Result<Self> {
        let (nx, ny, dim, flat) = flatten_cells(cells)?;
        Self::real(nx, ny, dim, flat)
    }

    /// Complex-valued lattice from nested `[row][col][component]` vectors.
    pub fn from_complex_cells(cells: Vec<Vec<Vec<Complex64>>>) -> Result<Self> {
        let (nx, ny, dim, flat) = flatten_cells(cells)?;
        Self::complex(nx, ny, dim, flat)
    }

    /// Grid extents (nx, ny).
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Vector length of each cell.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of nodes, nx * ny.
    pub fn num_nodes(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.data, LatticeData::Complex(_))
    }

    /// Raw scalar storage.
    pub fn data(&self) -> &LatticeData {
        &self.data
    }

    /// Metric implied by the scalar kind.
    pub fn metric(&self) -> MetricStrategy {
        match self.data {
            LatticeData::Real(_) => MetricStrategy::Real,
            LatticeData::Complex(_) => MetricStrategy::Complex,
        }
    }

    /// Row-major node index of cell (i, j).
    #[inline]
    pub fn flat_index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny);
        i * self.ny + j
    }

    /// Inverse of [`Lattice::flat_index`].
    #[inline]
    pub fn coords(&self, node: usize) -> (usize, usize) {
        (node / self.ny, node % self.ny)
    }

    /// Real vector stored at node `node`, or `None` for a complex lattice.
    pub fn real_cell(&self, node: usize) -> Option<&[f64]> {
        match &self.data {
            LatticeData::Real(v) => Some(&v[node * self.dim..(node + 1) * self.dim]),
            LatticeData::Complex(_) => None,
        }
    }

    /// Complex vector stored at node `node`, or `None` for a real lattice.
    pub fn complex_cell(&self, node: usize) -> Option<&[Complex64]> {
        match &self.data {
            LatticeData::Complex(v) => Some(&v[node * self.dim..(node + 1) * self.dim]),
            LatticeData::Real(_) => None,
        }
    }
}

fn flatten_cells<T: Copy>(cells: Vec<Vec<Vec<T>>>) -> Result<(usize, usize, usize, Vec<T>)> {
    let nx = cells.len();
    let ny = cells.first().map_or(0, Vec::len);
    let dim = cells
        .first()
        .and_then(|row| row.first())
        .map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(nx * ny * dim);
    for row in &cells {
        if row.len() != ny {
            return Err(Error::Shape {
                expected: ny,
                actual: row.len(),
            });
        }
        for cell in row {
            if cell.len() != dim {
                return Err(Error::Shape {
                    expected: dim,
                    actual: cell.len(),
                });
            }
            flat.extend_from_slice(cell);
        }
    }
    Ok((nx, ny, dim, flat))
}
