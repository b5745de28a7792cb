//! Adjacency-matrix weighted graph
//!
//! The matrix gives O(1) edge lookup and weight update at O(V^2) space,
//! which suits the target networks (hundreds of vertices) and the
//! edge-weight-query-heavy algorithms built on top. Vertex indices are
//! assigned in first-insertion order and never change.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::fmt::Write as _;
use std::hash::Hash;

use crate::error::GraphError;

/// A weighted graph over a fixed vertex universe with dynamic vertex
/// addition; cell (i, j) of the matrix holds `Some(weight)` or `None` for
/// "no edge"
#[derive(Debug, Clone)]
pub struct WeightedMatrixGraph<V> {
    directed: bool,
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    weights: Vec<Vec<Option<f64>>>,
}

impl<V: Clone + Eq + Hash> WeightedMatrixGraph<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: Vec::new(),
            index: HashMap::new(),
            weights: Vec::new(),
        }
    }

    /// Creates a graph pre-seeded with a vertex set
    pub fn with_vertices<I>(directed: bool, vertices: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = V>,
    {
        let mut graph = Self::new(directed);
        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in first-insertion order; a vertex's position is its index
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// The index assigned to a vertex at insertion
    pub fn index_of(&self, vertex: &V) -> Result<usize, GraphError> {
        self.index
            .get(vertex)
            .copied()
            .ok_or(GraphError::VertexNotFound)
    }

    /// Appends a vertex, growing the matrix while preserving all existing
    /// weights; the new row and column start fully unset
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), GraphError> {
        if self.contains(&vertex) {
            return Err(GraphError::DuplicateVertex);
        }

        for row in &mut self.weights {
            row.push(None);
        }
        self.weights.push(vec![None; self.vertices.len() + 1]);

        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        Ok(())
    }

    /// Stores an edge weight; symmetric when the graph is undirected
    pub fn connect(&mut self, from: &V, to: &V, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;

        self.weights[i][j] = Some(weight);
        if !self.directed {
            self.weights[j][i] = Some(weight);
        }
        Ok(())
    }

    pub fn are_connected(&self, from: &V, to: &V) -> Result<bool, GraphError> {
        Ok(self.weight(from, to)?.is_some())
    }

    /// The stored weight, or `None` when the vertices are unconnected
    pub fn weight(&self, from: &V, to: &V) -> Result<Option<f64>, GraphError> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Ok(self.weights[i][j])
    }

    /// Every vertex with a finite weight from `vertex`, in ascending
    /// vertex-index order
    pub fn connected_neighbours(&self, vertex: &V) -> Result<Vec<&V>, GraphError> {
        let i = self.index_of(vertex)?;
        Ok(self
            .neighbour_indices(i)
            .map(|(j, _)| &self.vertices[j])
            .collect())
    }

    /// Outgoing (index, weight) pairs of row `i`, in ascending index order
    pub(crate) fn neighbour_indices(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights[i]
            .iter()
            .enumerate()
            .filter_map(|(j, w)| w.map(|weight| (j, weight)))
    }

    /// The set reachable from `start` in breadth-first visitation order,
    /// siblings in ascending vertex-index order
    pub fn breadth_first(&self, start: &V) -> Result<Vec<V>, GraphError> {
        let start = self.index_of(start)?;
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        queue.push_back(start);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            result.push(self.vertices[current].clone());

            for (neighbour, _) in self.neighbour_indices(current) {
                if visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }

        Ok(result)
    }

    /// The set reachable from `start` in depth-first visitation order
    ///
    /// Neighbours are pushed in reverse so the LIFO frontier pops siblings
    /// in ascending vertex-index order.
    pub fn depth_first(&self, start: &V) -> Result<Vec<V>, GraphError> {
        let start = self.index_of(start)?;
        let mut visited = HashSet::new();
        let mut stack = Vec::new();
        let mut result = Vec::new();

        stack.push(start);

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            result.push(self.vertices[current].clone());

            let neighbours: Vec<usize> =
                self.neighbour_indices(current).map(|(j, _)| j).collect();
            for neighbour in neighbours.into_iter().rev() {
                if !visited.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }

        Ok(result)
    }

    /// The subgraph over `keep` containing exactly the original edges
    /// whose both endpoints survive, preserving the given vertex order
    pub fn induced_subgraph(&self, keep: &[V]) -> Result<WeightedMatrixGraph<V>, GraphError> {
        let mut subgraph = Self::new(self.directed);
        for vertex in keep {
            // Membership in the source graph is part of the contract.
            self.index_of(vertex)?;
            subgraph.add_vertex(vertex.clone())?;
        }

        for from in keep {
            for to in keep {
                if let Some(weight) = self.weight(from, to)? {
                    subgraph.connect(from, to, weight)?;
                }
            }
        }

        Ok(subgraph)
    }

    /// Sum of hop weights along `path`, or `None` when a hop is
    /// unconnected
    pub fn total_weight(&self, path: &[V]) -> Result<Option<f64>, GraphError> {
        let mut total = 0.0;
        for pair in path.windows(2) {
            match self.weight(&pair[0], &pair[1])? {
                Some(weight) => total += weight,
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }
}

impl<V: Clone + Eq + Hash + Display> WeightedMatrixGraph<V> {
    /// Edge list in DOT format, a non-critical display convenience
    pub fn to_web_graph(&self) -> String {
        let mut out = String::from("digraph G {\n");
        for (i, row) in self.weights.iter().enumerate() {
            for (j, weight) in row.iter().enumerate() {
                if let Some(weight) = weight {
                    let _ = writeln!(
                        out,
                        "\t{} -> {}[label=\"{}\"];",
                        self.vertices[i], self.vertices[j], weight
                    );
                }
            }
        }
        out.push('}');
        out
    }
}
