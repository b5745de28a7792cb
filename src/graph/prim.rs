//! Minimum spanning tree by Prim growth
//!
//! Every vertex enters the min-heap keyed by a mutable key vector that
//! the heap's comparator reads live, so lowering a key and calling
//! `update` re-sifts the vertex against its current value. Working state
//! is created per invocation; nothing persists between runs.

use std::cell::RefCell;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::GraphError;
use crate::graph::WeightedMatrixGraph;
use crate::heap::MinHeap;

/// Prim minimum-spanning-tree search
pub struct MstPrim;

/// The spanning structure produced by one Prim invocation
///
/// `key` holds, per vertex index, the weight of the tree edge that
/// attached the vertex (infinity when it was never reached); `parent`
/// holds the tree-edge predecessor (`None` for the root and for
/// unreached vertices).
#[derive(Debug, Clone)]
pub struct SpanningTree<V> {
    vertices: Vec<V>,
    key: Vec<f64>,
    parent: Vec<Option<usize>>,
}

impl MstPrim {
    /// Grows a minimum spanning tree rooted at `start`
    ///
    /// An absent start vertex is reported as `VertexNotFound`. Vertices
    /// unreachable from the growing tree keep an infinite key and are
    /// silently excluded from the total length.
    pub fn spanning_tree<V: Clone + Eq + Hash>(
        graph: &WeightedMatrixGraph<V>,
        start: &V,
    ) -> Result<SpanningTree<V>, GraphError> {
        let start = graph.index_of(start)?;
        let count = graph.vertex_count();

        let keys = Rc::new(RefCell::new(vec![f64::INFINITY; count]));
        let mut parent: Vec<Option<usize>> = vec![None; count];

        let cmp_keys = Rc::clone(&keys);
        let mut heap = MinHeap::with_capacity_and_comparator(count, move |a: &usize, b: &usize| {
            let keys = cmp_keys.borrow();
            keys[*a].total_cmp(&keys[*b])
        });

        for index in 0..count {
            heap.push(index);
        }
        keys.borrow_mut()[start] = 0.0;
        heap.update(&start);

        while let Ok(current) = heap.pop() {
            for (neighbour, weight) in graph.neighbour_indices(current) {
                // Only fringe vertices still in the heap may be re-keyed.
                if !heap.contains(&neighbour) {
                    continue;
                }
                let neighbour_key = keys.borrow()[neighbour];
                if weight < neighbour_key {
                    parent[neighbour] = Some(current);
                    keys.borrow_mut()[neighbour] = weight;
                    heap.update(&neighbour);
                }
            }
        }

        let key = keys.borrow().clone();
        Ok(SpanningTree {
            vertices: graph.vertices().to_vec(),
            key,
            parent,
        })
    }
}

impl<V: Clone + Eq + Hash> SpanningTree<V> {
    /// Vertices in the order of the source graph
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Per-vertex attachment weights, indexed like `vertices()`
    pub fn keys(&self) -> &[f64] {
        &self.key
    }

    /// Per-vertex tree predecessors, indexed like `vertices()`
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parent
    }

    /// The attachment weight of a vertex, infinite when unreached
    pub fn key_of(&self, vertex: &V) -> Option<f64> {
        self.position(vertex).map(|i| self.key[i])
    }

    /// The tree-edge predecessor, `None` for the root and for unreached
    /// vertices
    pub fn parent_of(&self, vertex: &V) -> Option<&V> {
        self.position(vertex)
            .and_then(|i| self.parent[i])
            .map(|p| &self.vertices[p])
    }

    /// Whether the vertex was attached to the tree
    pub fn reached(&self, vertex: &V) -> bool {
        self.position(vertex)
            .map(|i| self.key[i].is_finite())
            .unwrap_or(false)
    }

    /// Total spanning length: the sum of all finite keys; unreached
    /// vertices contribute nothing
    pub fn total_length(&self) -> f64 {
        self.key.iter().filter(|k| k.is_finite()).sum()
    }

    fn position(&self, vertex: &V) -> Option<usize> {
        self.vertices.iter().position(|v| v == vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven_vertex_graph() -> WeightedMatrixGraph<char> {
        let mut graph =
            WeightedMatrixGraph::with_vertices(false, ['a', 'b', 'c', 'd', 'e', 'f', 'g'])
                .expect("Graph should build in test");
        for (from, to, weight) in [
            ('a', 'b', 1.0),
            ('a', 'c', 4.0),
            ('b', 'd', 3.0),
            ('b', 'c', 2.0),
            ('b', 'e', 10.0),
            ('e', 'd', 5.0),
            ('e', 'g', 2.0),
            ('e', 'f', 7.0),
            ('f', 'g', 5.0),
            ('g', 'd', 1.0),
            ('g', 'c', 3.0),
            ('c', 'd', 6.0),
        ] {
            graph
                .connect(&from, &to, weight)
                .expect("Connect should succeed in test");
        }
        graph
    }

    #[test]
    fn test_total_length_on_connected_graph() {
        let graph = seven_vertex_graph();
        let tree =
            MstPrim::spanning_tree(&graph, &'a').expect("Spanning tree should build in test");

        // MST edges: a-b(1), b-c(2), b-d(3), d-g(1), g-e(2), g-f(5).
        assert!((tree.total_length() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_root_has_zero_key_and_no_parent() {
        let graph = seven_vertex_graph();
        let tree =
            MstPrim::spanning_tree(&graph, &'a').expect("Spanning tree should build in test");

        assert_eq!(tree.key_of(&'a'), Some(0.0));
        assert!(tree.parent_of(&'a').is_none());
    }

    #[test]
    fn test_parent_map_forms_a_tree() {
        let graph = seven_vertex_graph();
        let tree =
            MstPrim::spanning_tree(&graph, &'a').expect("Spanning tree should build in test");

        let mut roots = 0;
        for (index, parent) in tree.parents().iter().enumerate() {
            if parent.is_none() {
                roots += 1;
                continue;
            }

            // Walking parent links must terminate at the root well within
            // vertex-count steps; a longer walk means a cycle.
            let mut current = index;
            let mut steps = 0;
            while let Some(next) = tree.parents()[current] {
                current = next;
                steps += 1;
                assert!(steps <= tree.vertices().len(), "cycle in parent map");
            }
            assert_eq!(tree.vertices()[current], 'a');
        }
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_total_matches_sum_of_non_root_keys() {
        let graph = seven_vertex_graph();
        let tree =
            MstPrim::spanning_tree(&graph, &'a').expect("Spanning tree should build in test");

        let non_root_sum: f64 = tree
            .vertices()
            .iter()
            .filter(|v| **v != 'a')
            .map(|v| tree.key_of(v).expect("Key should exist in test"))
            .sum();
        assert!((tree.total_length() - non_root_sum).abs() < 1e-9);
    }

    #[test]
    fn test_unreachable_vertex_is_excluded() {
        let mut graph = seven_vertex_graph();
        graph.add_vertex('z').expect("Add should succeed in test");

        let tree =
            MstPrim::spanning_tree(&graph, &'a').expect("Spanning tree should build in test");
        assert!(!tree.reached(&'z'));
        assert!(tree.parent_of(&'z').is_none());
        assert!((tree.total_length() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_absent_start_is_reported() {
        let graph = seven_vertex_graph();
        let result = MstPrim::spanning_tree(&graph, &'q');
        assert!(matches!(result, Err(GraphError::VertexNotFound)));
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut graph = WeightedMatrixGraph::new(false);
        graph.add_vertex('a').expect("Add should succeed in test");

        let tree =
            MstPrim::spanning_tree(&graph, &'a').expect("Spanning tree should build in test");
        assert_eq!(tree.total_length(), 0.0);
        assert!(tree.reached(&'a'));
    }
}
