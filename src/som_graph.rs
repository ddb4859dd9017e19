//! Pipeline façade: lattice → adjacency → minimum spanning tree → GML.
//!
//! ```no_run
//! use toric_mst::prelude::*;
//!
//! let cells = vec![vec![vec![0.0], vec![1.0]], vec![vec![10.0], vec![11.0]]];
//! let som = SomGraph::from_lattice(Lattice::from_real_cells(cells)?)?;
//! som.write_gml("umat_mst.gml", None, false, &NodeAttributes::new())?;
//! # Ok::<(), toric_mst::Error>(())
//! ```

use std::path::Path;

use crate::adjacency::AdjacencyBuilder;
use crate::error::Result;
use crate::gml::{GmlWriter, NodeAttributes};
use crate::graph::{extract_graph, Graph};
use crate::lattice::Lattice;
use crate::matrix::DistanceMatrix;
use crate::metric::MetricStrategy;
use crate::mst::{kruskal, SpanningForest};

/// A lattice (optional) together with its adjacency matrix.
#[derive(Debug, Clone)]
pub struct SomGraph {
    lattice: Option<Lattice>,
    adjacency: DistanceMatrix,
}

impl SomGraph {
    /// Build from whichever inputs are available. A supplied matrix is used
    /// as-is; otherwise it is derived from the lattice.
    pub fn new(lattice: Option<Lattice>, adjacency: Option<DistanceMatrix>) -> Result<Self> {
        let adjacency = AdjacencyBuilder::new(lattice.as_ref(), adjacency).build()?;
        Ok(Self { lattice, adjacency })
    }

    pub fn from_lattice(lattice: Lattice) -> Result<Self> {
        Self::new(Some(lattice), None)
    }

    pub fn from_adjacency(adjacency: DistanceMatrix) -> Self {
        Self {
            lattice: None,
            adjacency,
        }
    }

    pub fn lattice(&self) -> Option<&Lattice> {
        self.lattice.as_ref()
    }

    pub fn adjacency(&self) -> &DistanceMatrix {
        &self.adjacency
    }

    /// Metric used to derive the adjacency, `None` when it was supplied.
    pub fn metric(&self) -> Option<MetricStrategy> {
        self.lattice.as_ref().map(Lattice::metric)
    }

    pub fn spanning_forest(&self) -> Result<SpanningForest> {
        kruskal(&self.adjacency)
    }

    /// Minimum spanning forest as a matrix.
    pub fn minimum_spanning_tree(&self) -> Result<DistanceMatrix> {
        Ok(self.spanning_forest()?.to_matrix())
    }

    /// Graph of the full toric adjacency.
    pub fn graph(&self) -> Graph {
        extract_graph(&self.adjacency)
    }

    /// Graph of the minimum spanning forest.
    pub fn mst_graph(&self) -> Result<Graph> {
        Ok(extract_graph(&self.minimum_spanning_tree()?))
    }

    /// Write `graph` to `path`, or the minimum spanning forest when `graph` is `None`.
    pub fn write_gml<P: AsRef<Path>>(
        &self,
        path: P,
        graph: Option<&Graph>,
        directed: bool,
        attributes: &NodeAttributes,
    ) -> Result<()> {
        let writer = GmlWriter::new(directed);
        match graph {
            Some(graph) => writer.write_file(path, graph, attributes),
            None => writer.write_file(path, &self.mst_graph()?, attributes),
        }
    }
}
