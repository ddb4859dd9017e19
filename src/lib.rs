//! # toric-mst
//!
//! Minimum spanning trees of 2D vector lattices on a torus, exported as GML.
//!
//! A lattice of vectors (for instance the codebook of a trained
//! self-organising map) is turned into a weighted graph by connecting every
//! cell to its 8 toric Moore neighbours, weighted by the Euclidean distance
//! between their vectors (real or complex). Kruskal's algorithm then extracts
//! the minimum spanning forest, which is written in a GML-like text format for
//! downstream analysis and visualization tools.
//!
//! ```text
//! Lattice ──▶ adjacency (n×n, +∞ = no edge) ──▶ Kruskal ──▶ MST matrix
//!                      │                                        │
//!                      └──────────────▶ extract_graph ◀─────────┘
//!                                             │
//!                                             ▼
//!                                        GML writer
//! ```
//!
//! ## Usage
//!
//! ```
//! use toric_mst::prelude::*;
//!
//! let lattice = Lattice::real(3, 3, 2, (0..18).map(f64::from).collect())?;
//! let adjacency = adjacency_matrix(&lattice);
//! let forest = kruskal(&adjacency)?;
//! assert_eq!(forest.num_edges(), 8);
//!
//! let graph = extract_graph(&forest.to_matrix());
//! let mut out = Vec::new();
//! write_gml(&mut out, &graph, false, &NodeAttributes::new())?;
//! # Ok::<(), toric_mst::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): evaluate adjacency distances on rayon. Output is
//!   identical to the sequential build.

pub mod adjacency;
pub mod disjoint_set;
pub mod error;
pub mod gml;
pub mod graph;
pub mod lattice;
pub mod matrix;
pub mod metric;
pub mod mst;
pub mod neighborhood;
pub mod som_graph;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::adjacency::*;
    pub use crate::disjoint_set::*;
    pub use crate::error::{Error, Result};
    pub use crate::gml::*;
    pub use crate::graph::*;
    pub use crate::lattice::*;
    pub use crate::matrix::*;
    pub use crate::metric::*;
    pub use crate::mst::*;
    pub use crate::neighborhood::*;
    pub use crate::som_graph::*;
}
