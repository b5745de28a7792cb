//! Informed shortest path (A*)
//!
//! Search state lives in a per-call arena indexed by vertex index, so
//! repeated queries over the same graph are independent by construction
//! and no reset step exists. The fringe is ordered by f = g + h; when a
//! node improves it is pushed again and the stale entry is skipped through
//! the closed set.
//!
//! The supplied heuristic must be admissible (never overstate the true
//! remaining cost) for the returned path to be minimal. For geographic
//! networks whose edge weights are at least the straight-line distance,
//! the Euclidean heuristic over the vertex coordinates qualifies.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::GraphError;
use crate::graph::WeightedMatrixGraph;

/// A* shortest-path search
pub struct AStar;

/// Per-vertex search state, reset-free because a fresh arena is allocated
/// for every query
#[derive(Debug, Clone)]
struct SearchNode {
    g: f64,
    h: f64,
    f: f64,
    parent: Option<usize>,
}

impl SearchNode {
    fn unvisited() -> Self {
        Self {
            g: f64::INFINITY,
            h: 0.0,
            f: 0.0,
            parent: None,
        }
    }
}

/// Fringe entry ordered as a min-heap by f; ties open in ascending
/// vertex-index order
#[derive(Debug, Clone)]
struct OpenEntry {
    index: usize,
    f: f64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl AStar {
    /// Finds the minimum-weight path from `start` to `goal` guided by
    /// `heuristic`
    ///
    /// Returns the vertex sequence and its total weight, or `None` when
    /// the fringe is exhausted without reaching the goal. Absent
    /// endpoints are a contract violation.
    pub fn shortest_path<V, F>(
        graph: &WeightedMatrixGraph<V>,
        start: &V,
        goal: &V,
        heuristic: F,
    ) -> Result<Option<(Vec<V>, f64)>, GraphError>
    where
        V: Clone + Eq + Hash,
        F: Fn(&V, &V) -> f64,
    {
        let start_index = graph.index_of(start)?;
        let goal_index = graph.index_of(goal)?;

        if start_index == goal_index {
            return Ok(Some((vec![start.clone()], 0.0)));
        }

        let vertices = graph.vertices();
        let goal_vertex = &vertices[goal_index];

        let mut nodes = vec![SearchNode::unvisited(); graph.vertex_count()];
        let mut closed = vec![false; graph.vertex_count()];
        let mut open = BinaryHeap::new();

        nodes[start_index].g = 0.0;
        nodes[start_index].h = heuristic(&vertices[start_index], goal_vertex);
        nodes[start_index].f = nodes[start_index].g + nodes[start_index].h;
        open.push(OpenEntry {
            index: start_index,
            f: nodes[start_index].f,
        });

        while let Some(OpenEntry { index, .. }) = open.pop() {
            if index == goal_index {
                let path = reconstruct(graph, &nodes, goal_index);
                let total = nodes[goal_index].g;
                log::debug!("astar reached goal with cost {}", total);
                return Ok(Some((path, total)));
            }

            if closed[index] {
                continue; // stale entry superseded by a later improvement
            }
            closed[index] = true;

            for (neighbour, weight) in graph.neighbour_indices(index) {
                if closed[neighbour] {
                    continue;
                }

                let tentative_g = nodes[index].g + weight;
                if tentative_g < nodes[neighbour].g {
                    nodes[neighbour].parent = Some(index);
                    nodes[neighbour].g = tentative_g;
                    nodes[neighbour].h = heuristic(&vertices[neighbour], goal_vertex);
                    nodes[neighbour].f = tentative_g + nodes[neighbour].h;
                    open.push(OpenEntry {
                        index: neighbour,
                        f: nodes[neighbour].f,
                    });
                }
            }
        }

        Ok(None)
    }

    /// A* with a straight-line heuristic over the vertex coordinates
    pub fn shortest_path_euclidean<V, F>(
        graph: &WeightedMatrixGraph<V>,
        start: &V,
        goal: &V,
        get_coordinates: F,
    ) -> Result<Option<(Vec<V>, f64)>, GraphError>
    where
        V: Clone + Eq + Hash,
        F: Fn(&V) -> (f64, f64),
    {
        let heuristic = |from: &V, to: &V| {
            let (x1, y1) = get_coordinates(from);
            let (x2, y2) = get_coordinates(to);
            let dx = x1 - x2;
            let dy = y1 - y2;
            (dx * dx + dy * dy).sqrt()
        };

        Self::shortest_path(graph, start, goal, heuristic)
    }
}

fn reconstruct<V: Clone + Eq + Hash>(
    graph: &WeightedMatrixGraph<V>,
    nodes: &[SearchNode],
    goal: usize,
) -> Vec<V> {
    let mut path = vec![graph.vertices()[goal].clone()];
    let mut current = goal;
    while let Some(parent) = nodes[current].parent {
        path.push(graph.vertices()[parent].clone());
        current = parent;
    }
    path.reverse();
    path
}
