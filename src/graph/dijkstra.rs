//! Uninformed shortest path by Dijkstra relaxation
//!
//! The fringe is keyed by tentative distance; improvements re-insert the
//! vertex instead of decreasing a key in place, so stale fringe entries
//! can reappear and are skipped once the vertex has settled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::WeightedMatrixGraph;

/// Dijkstra shortest-path search
pub struct Dijkstra;

/// Fringe entry ordered as a min-heap by distance; ties settle in
/// ascending vertex-index order
#[derive(Debug, Clone)]
struct NodeDistance {
    index: usize,
    distance: f64,
}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeDistance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeDistance {}

impl Dijkstra {
    /// Finds the minimum-weight path from `source` to `target`
    ///
    /// Returns the vertex sequence from source to target inclusive; an
    /// empty vector means the target was never reached, and a singleton
    /// means source and target coincide. Absent endpoints are a contract
    /// violation.
    pub fn shortest_path<V: Clone + Eq + Hash>(
        graph: &WeightedMatrixGraph<V>,
        source: &V,
        target: &V,
    ) -> Result<Vec<V>, GraphError> {
        let source = graph.index_of(source)?;
        let target = graph.index_of(target)?;

        let count = graph.vertex_count();
        let mut distances = vec![f64::INFINITY; count];
        let mut predecessors: Vec<Option<usize>> = vec![None; count];
        let mut settled = vec![false; count];
        let mut fringe = BinaryHeap::new();

        distances[source] = 0.0;
        fringe.push(NodeDistance {
            index: source,
            distance: 0.0,
        });

        while let Some(NodeDistance { index, distance }) = fringe.pop() {
            if settled[index] {
                continue; // stale entry for an already settled vertex
            }
            settled[index] = true;

            for (neighbour, weight) in graph.neighbour_indices(index) {
                let new_distance = distance + weight;
                if new_distance < distances[neighbour] {
                    distances[neighbour] = new_distance;
                    predecessors[neighbour] = Some(index);
                    fringe.push(NodeDistance {
                        index: neighbour,
                        distance: new_distance,
                    });
                }
            }
        }

        if distances[target].is_infinite() {
            return Ok(Vec::new());
        }

        log::debug!("dijkstra settled target at distance {}", distances[target]);
        Ok(reconstruct(graph, &predecessors, target))
    }
}

fn reconstruct<V: Clone + Eq + Hash>(
    graph: &WeightedMatrixGraph<V>,
    predecessors: &[Option<usize>],
    target: usize,
) -> Vec<V> {
    let mut path = vec![graph.vertices()[target].clone()];
    let mut current = target;
    while let Some(predecessor) = predecessors[current] {
        path.push(graph.vertices()[predecessor].clone());
        current = predecessor;
    }
    path.reverse();
    path
}
