//! Weighted-graph representation and the algorithms over it

pub mod astar;
pub mod dijkstra;
pub mod prim;
pub mod rectangle;
pub mod weighted_graph;

pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use prim::{MstPrim, SpanningTree};
pub use rectangle::{RectangleMst, StationsWithinRectangle};
pub use weighted_graph::WeightedMatrixGraph;
