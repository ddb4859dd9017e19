//! Error type shared by every stage of the lattice → MST → GML pipeline.

use thiserror::Error;

/// Root error type for toric-mst failures.
#[derive(Error, Debug)]
pub enum Error {
    /// Adjacency derivation was requested with neither a lattice nor a matrix.
    #[error("construction error: {0}")]
    Construction(String),

    /// A buffer did not have the length implied by its declared shape.
    #[error("shape error: expected {expected} elements, got {actual}")]
    Shape { expected: usize, actual: usize },

    /// A matrix operation received a non-square input.
    #[error("shape error: matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// `union` was called with invalid set identifiers.
    #[error("partition error: cannot union sets {a} and {b}: {reason}")]
    Partition { a: usize, b: usize, reason: String },

    /// Malformed graph document.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
