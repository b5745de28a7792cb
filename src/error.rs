//! Unified error types for railnet
//!
//! Contract violations (absent or duplicate vertices, bad weights) and
//! empty-structure misuse are returned as errors and propagate
//! synchronously to the caller. Absence of a result (no path, empty
//! filter) is never an error; those cases are encoded in return values.

use thiserror::Error;

/// Unified result type
pub type RailResult<T> = Result<T, RailError>;

/// Top-level error type wrapping every concern of the crate
#[derive(Error, Debug)]
pub enum RailError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("heap error: {0}")]
    Heap(#[from] HeapError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("unknown station code: {0}")]
    UnknownStation(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Graph construction and query errors
///
/// These indicate contract violations by the caller during graph
/// assembly or lookup, not recoverable query outcomes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex not present in the graph")]
    VertexNotFound,
    #[error("vertex already present in the graph")]
    DuplicateVertex,
    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}

/// Min-heap errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("cannot read from an empty heap")]
    Empty,
}

/// Model record validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("station id must be positive, got {0}")]
    InvalidId(i64),
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },
    #[error("country code '{0}' must be 1 to 3 letters")]
    InvalidCountry(String),
    #[error("latitude {0} is out of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}
