//! Undirected adjacency-list graph with breadth-first traversal.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Undirected graph over vertex ids `0..vertex_count`.
///
/// Edges are stored symmetrically: [`Graph::connect`] appends `w` to `v`'s
/// adjacency list and `v` to `w`'s. Nothing deduplicates insertions or
/// rejects self-loops; callers that need a simple graph must not connect
/// the same pair twice. The vertex set is fixed at construction and never
/// resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    /// Side length when this graph was built as a square lattice.
    pub(crate) grid_side: Option<usize>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// `degree_hint` reserves that much adjacency capacity per vertex.
    pub fn new(vertex_count: usize, degree_hint: usize) -> Self {
        Self {
            adjacency: (0..vertex_count)
                .map(|_| Vec::with_capacity(degree_hint))
                .collect(),
            grid_side: None,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Side length of the lattice this graph was generated as, if any.
    pub fn grid_side(&self) -> Option<usize> {
        self.grid_side
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Number of adjacency entries for `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Create an undirected edge between `v` and `w`.
    pub fn connect(&mut self, v: usize, w: usize) {
        self.adjacency[v].push(w);
        self.adjacency[w].push(v);
    }

    /// Remove the undirected edge between `v` and `w`.
    ///
    /// Removes the first occurrence from each adjacency list; no-op when
    /// the edge does not exist.
    pub fn disconnect(&mut self, v: usize, w: usize) {
        if let Some(i) = self.adjacency[v].iter().position(|&x| x == w) {
            self.adjacency[v].remove(i);
        }
        if let Some(i) = self.adjacency[w].iter().position(|&x| x == v) {
            self.adjacency[w].remove(i);
        }
    }

    /// Whether an edge between `v` and `w` exists.
    pub fn is_edge(&self, v: usize, w: usize) -> bool {
        self.adjacency[v].contains(&w)
    }

    /// Breadth-first search from `root` for `target`.
    ///
    /// Returns the visit history in traversal order and whether the target
    /// was dequeued. Pass `None` to visit every vertex reachable from
    /// `root`; the flag is then always `false` and callers read the
    /// history instead.
    pub fn bfs(&self, root: usize, target: Option<usize>) -> (Vec<usize>, bool) {
        let mut visited = vec![false; self.adjacency.len()];
        visited[root] = true;

        let mut history = Vec::with_capacity(self.adjacency.len());
        history.push(root);

        let mut queue = VecDeque::with_capacity(self.adjacency.len());
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            if Some(v) == target {
                return (history, true);
            }
            for &w in &self.adjacency[v] {
                if !visited[w] {
                    visited[w] = true;
                    history.push(w);
                    queue.push_back(w);
                }
            }
        }

        (history, false)
    }

    /// Whether every vertex is reachable from vertex 0.
    ///
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        if self.adjacency.is_empty() {
            return true;
        }
        let (history, _) = self.bfs(0, None);
        history.len() == self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_is_empty() {
        let g = Graph::new(9, 4);
        assert_eq!(g.vertex_count(), 9);
        for v in 0..9 {
            assert_eq!(g.degree(v), 0);
        }
        assert_eq!(g.grid_side(), None);
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut g = Graph::new(4, 4);
        g.connect(0, 3);
        assert!(g.is_edge(0, 3));
        assert!(g.is_edge(3, 0));
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(3), 1);
        assert!(!g.is_edge(0, 1));
    }

    #[test]
    fn test_disconnect_inverts_connect() {
        let mut g = Graph::new(5, 4);
        g.connect(1, 2);
        g.connect(2, 3);

        let before = (g.degree(1), g.degree(4));
        g.connect(1, 4);
        g.disconnect(1, 4);

        assert!(!g.is_edge(1, 4));
        assert_eq!((g.degree(1), g.degree(4)), before);
        // Untouched edges survive
        assert!(g.is_edge(1, 2));
        assert!(g.is_edge(2, 3));
    }

    #[test]
    fn test_disconnect_missing_edge_is_noop() {
        let mut g = Graph::new(3, 4);
        g.connect(0, 1);
        g.disconnect(0, 2);
        assert!(g.is_edge(0, 1));
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(2), 0);
    }

    #[test]
    fn test_bfs_visits_everything() {
        // Path-ish graph over 9 vertices
        let mut g = Graph::new(9, 4);
        g.connect(0, 1);
        g.connect(1, 2);
        g.connect(2, 5);
        g.connect(5, 8);
        g.connect(5, 4);
        g.connect(4, 3);
        g.connect(3, 6);
        g.connect(6, 7);

        let (mut history, found) = g.bfs(0, None);
        assert!(!found, "exhaustive scan must not report a find");
        assert_eq!(history.len(), g.vertex_count());
        history.sort_unstable();
        for (i, v) in history.into_iter().enumerate() {
            assert_eq!(i, v, "each vertex visited exactly once");
        }

        let (_, found) = g.bfs(0, Some(8));
        assert!(found);
        assert!(g.is_connected());

        g.disconnect(2, 5);
        let (_, found) = g.bfs(0, Some(8));
        assert!(!found, "vertex 8 unreachable after cut");
        assert!(!g.is_connected());
    }

    #[test]
    fn test_bfs_root_is_target() {
        let mut g = Graph::new(2, 1);
        g.connect(0, 1);
        let (history, found) = g.bfs(1, Some(1));
        assert!(found);
        assert_eq!(history, vec![1]);
    }

    #[test]
    fn test_connectivity_edge_cases() {
        assert!(Graph::new(0, 0).is_connected());
        assert!(Graph::new(1, 0).is_connected());
        assert!(!Graph::new(2, 0).is_connected());
    }
}
