//! railnet: weighted-graph routing over geographic rail networks
//!
//! The crate loads station and track records, assembles an
//! adjacency-matrix weighted graph, and answers routing queries over it:
//! uninformed and informed shortest paths, minimum spanning trees, and
//! spanning trees restricted to a coordinate rectangle.
//!
//! Layers:
//! - `model`: validated station and track records plus the file loader
//! - `heap`: the comparator-generic binary min-heap the algorithms share
//! - `graph`: the matrix graph and the algorithms over it
//! - `network`: the assembled network and its code-addressed queries
//! - `config`: file locations and assembly options
//! - `error`: per-layer error types under one crate-level enum

pub mod config;
pub mod error;
pub mod graph;
pub mod heap;
pub mod model;
pub mod network;

pub use config::Config;
pub use error::{GraphError, HeapError, ModelError, RailError, RailResult};
pub use graph::{
    AStar, Dijkstra, MstPrim, RectangleMst, SpanningTree, StationsWithinRectangle,
    WeightedMatrixGraph,
};
pub use heap::MinHeap;
pub use model::{Station, Track};
pub use network::{RailNetwork, Route};
