//! delve-graph: graph utilities for dungeon layout generation.
//!
//! Provides a small undirected adjacency-list graph with breadth-first
//! traversal, plus a randomized generator for 4-connected lattice graphs
//! that are guaranteed to come out as a single connected component. The
//! crate is pure: callers supply the random generator, nothing here reads
//! ambient random state.

mod graph;
mod grid;

pub use graph::Graph;
pub use grid::{Direction, random_connected_grid};
