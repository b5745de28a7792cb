//! Spatial subgraph extraction
//!
//! Composes breadth-first reachability, a closed bounding-box filter over
//! vertex coordinates, induced-subgraph construction, and a Prim spanning
//! tree over the survivors. Reachability starts from the first vertex in
//! construction order; the spanning tree is rooted at the first vertex
//! that survives the filter.

use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::prim::{MstPrim, SpanningTree};
use crate::graph::WeightedMatrixGraph;

/// Rectangle-bounded spanning-tree extraction
pub struct StationsWithinRectangle;

/// The vertices that fell inside the rectangle (in reachability order)
/// and the spanning tree grown over them
#[derive(Debug, Clone)]
pub struct RectangleMst<V> {
    pub vertices: Vec<V>,
    pub tree: SpanningTree<V>,
}

impl StationsWithinRectangle {
    /// Extracts the subgraph induced by the reachable vertices inside the
    /// rectangle and grows a spanning tree over it
    ///
    /// The two corners may be given in any order; bounds are inclusive.
    /// `Ok(None)` reports that no vertex fell inside the rectangle (or
    /// that the graph is empty); the spanning tree is never attempted in
    /// that case.
    pub fn spanning_tree<V, F>(
        graph: &WeightedMatrixGraph<V>,
        corner_a: (f64, f64),
        corner_b: (f64, f64),
        get_coordinates: F,
    ) -> Result<Option<RectangleMst<V>>, GraphError>
    where
        V: Clone + Eq + Hash,
        F: Fn(&V) -> (f64, f64),
    {
        let Some(start) = graph.vertices().first() else {
            return Ok(None);
        };

        let (lat_min, lat_max) = ordered(corner_a.0, corner_b.0);
        let (lng_min, lng_max) = ordered(corner_a.1, corner_b.1);

        let reachable = graph.breadth_first(start)?;
        let within: Vec<V> = reachable
            .into_iter()
            .filter(|vertex| {
                let (lat, lng) = get_coordinates(vertex);
                lat_min <= lat && lat <= lat_max && lng_min <= lng && lng <= lng_max
            })
            .collect();

        if within.is_empty() {
            log::info!("no vertices available within the given rectangle");
            return Ok(None);
        }

        let subgraph = graph.induced_subgraph(&within)?;
        let tree = MstPrim::spanning_tree(&subgraph, &within[0])?;

        Ok(Some(RectangleMst {
            vertices: within,
            tree,
        }))
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
