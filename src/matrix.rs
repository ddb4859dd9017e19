//! Dense square weight matrix.
//!
//! Used for both the adjacency matrix and the MST matrix. Entry (p, q) is the
//! edge weight between nodes p and q, or [`NO_EDGE`] (+∞) when there is none.

use crate::error::{Error, Result};

/// Sentinel weight for "no edge".
pub const NO_EDGE: f64 = f64::INFINITY;

/// Square n × n matrix of edge weights, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// An n × n matrix with every entry set to [`NO_EDGE`].
    pub fn unconnected(n: usize) -> Self {
        Self {
            n,
            data: vec![NO_EDGE; n * n],
        }
    }

    /// Wrap a row-major buffer; its length must be a perfect square.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != n * n {
            return Err(Error::Shape {
                expected: n * n,
                actual: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Build from nested rows. Every row must have as many entries as there are rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::NotSquare {
                    rows: n,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { n, data })
    }

    /// Number of nodes (rows).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, p: usize, q: usize) -> f64 {
        self.data[p * self.n + q]
    }

    #[inline]
    pub fn set(&mut self, p: usize, q: usize, w: f64) {
        self.data[p * self.n + q] = w;
    }

    /// True when (p, q) carries a finite weight.
    #[inline]
    pub fn has_edge(&self, p: usize, q: usize) -> bool {
        self.get(p, q) != NO_EDGE
    }

    /// Row-major view of all entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Row `p`.
    pub fn row(&self, p: usize) -> &[f64] {
        &self.data[p * self.n..(p + 1) * self.n]
    }

    /// Number of finite entries (each undirected edge counts twice when mirrored).
    pub fn finite_entries(&self) -> usize {
        self.data.iter().filter(|w| **w != NO_EDGE).count()
    }

    /// True when (p, q) and (q, p) hold bit-identical weights for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|p| {
            ((p + 1)..self.n).all(|q| self.get(p, q).to_bits() == self.get(q, p).to_bits())
        })
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.n.max(1)).map(<[f64]>::to_vec).collect()
    }
}
