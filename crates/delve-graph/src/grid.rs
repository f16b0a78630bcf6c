//! Randomized connected lattice generation.
//!
//! A lattice graph lives on an n x n grid of cells indexed row-major; the
//! only permitted edges join 4-neighboring cells. [`random_connected_grid`]
//! samples such a lattice from an edge-keep probability and then repairs it
//! so the result is always a single connected component.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

use crate::Graph;

/// Compass direction on the room lattice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// Number of lattice directions.
    pub const COUNT: usize = 4;

    /// The facing direction: North<->South, East<->West.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl Graph {
    /// Which direction `w` lies in relative to `v`, by index arithmetic.
    ///
    /// `None` for non-lattice graphs and for non-adjacent pairs. Row
    /// wraparound is not checked: the last cell of a row reports the first
    /// cell of the next row as East. Generation only ever asks about pairs
    /// it connected along the lattice, which cannot straddle rows.
    pub fn relative_grid_direction(&self, v: usize, w: usize) -> Option<Direction> {
        let side = self.grid_side? as isize;
        match w as isize - v as isize {
            d if d == -side => Some(Direction::North),
            1 => Some(Direction::East),
            d if d == side => Some(Direction::South),
            -1 => Some(Direction::West),
            _ => None,
        }
    }

    /// Whether `(v, w)` is a permitted lattice edge.
    pub fn is_valid_grid_connection(&self, v: usize, w: usize) -> bool {
        self.relative_grid_direction(v, w).is_some()
    }
}

/// In-bounds lattice neighbors of `v`, in North, East, South, West order.
fn lattice_neighbors(v: usize, n: usize) -> Vec<usize> {
    let (row, col) = (v / n, v % n);
    let mut out = Vec::with_capacity(Direction::COUNT);
    if row > 0 {
        out.push(v - n);
    }
    if col + 1 < n {
        out.push(v + 1);
    }
    if row + 1 < n {
        out.push(v + n);
    }
    if col > 0 {
        out.push(v - 1);
    }
    out
}

/// Randomly generate a connected n x n lattice graph.
///
/// Every in-bounds lattice edge is proposed once from each endpoint with
/// probability `p`, so interior edges appear with a higher effective
/// probability than `p` itself and may be inserted twice. Afterwards two
/// repair passes run: isolated vertices are joined to one randomly chosen
/// lattice neighbor, then remaining components are spliced together along
/// lattice-adjacent pairs until one is left. Both passes draw only from
/// `rng`, so a fixed seed reproduces the graph exactly.
///
/// For `n < 2` the result is an edgeless graph of `n * n` vertices without
/// lattice metadata.
pub fn random_connected_grid<R: Rng>(rng: &mut R, n: usize, p: f32) -> Graph {
    let mut graph = Graph::new(n * n, Direction::COUNT);
    if n < 2 {
        return graph;
    }
    graph.grid_side = Some(n);

    // Probabilistic sampling: per vertex, one draw per in-bounds neighbor
    // in fixed N, E, S, W order.
    for row in 0..n {
        for col in 0..n {
            let v = row * n + col;
            if row > 0 && rng.gen_range(0.0f32..1.0) < p {
                graph.connect(v, v - n);
            }
            if col + 1 < n && rng.gen_range(0.0f32..1.0) < p {
                graph.connect(v, v + 1);
            }
            if row + 1 < n && rng.gen_range(0.0f32..1.0) < p {
                graph.connect(v, v + n);
            }
            if col > 0 && rng.gen_range(0.0f32..1.0) < p {
                graph.connect(v, v - 1);
            }
        }
    }

    // Minimum-degree repair: every isolated vertex gets exactly one
    // randomly chosen lattice neighbor (2 at corners, 3 on borders,
    // 4 in the interior).
    for v in 0..n * n {
        if graph.degree(v) == 0 {
            let neighbors = lattice_neighbors(v, n);
            let w = neighbors[rng.gen_range(0..neighbors.len())];
            graph.connect(v, w);
        }
    }

    // Component discovery by repeated breadth-first sweeps.
    let mut visited = vec![false; n * n];
    let mut queue = std::collections::VecDeque::with_capacity(n * n);
    let mut components: Vec<Vec<usize>> = Vec::new();
    for root in 0..n * n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        let mut members = vec![root];
        queue.push_back(root);
        while let Some(v) = queue.pop_front() {
            for &w in graph.neighbors(v) {
                if !visited[w] {
                    visited[w] = true;
                    members.push(w);
                    queue.push_back(w);
                }
            }
        }
        components.push(members);
    }

    // Merge: connect the first component to some other along the first
    // lattice-adjacent pair found, splice the other in, repeat. The full
    // lattice is connected, so such a pair always exists while more than
    // one component remains.
    while components.len() > 1 {
        let mut merged = None;
        'scan: for i in 0..components[0].len() {
            let v = components[0][i];
            for c in 1..components.len() {
                for &w in &components[c] {
                    if graph.is_valid_grid_connection(v, w) {
                        graph.connect(v, w);
                        merged = Some(c);
                        break 'scan;
                    }
                }
            }
        }
        match merged {
            Some(c) => {
                let other = components.remove(c);
                components[0].extend(other);
            }
            None => break,
        }
    }

    graph
}

impl fmt::Display for Graph {
    /// Lattice graphs render as grid art; everything else as adjacency
    /// lists, one vertex per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(side) = self.grid_side else {
            for v in 0..self.vertex_count() {
                writeln!(f, "{}: {:?}", v, self.neighbors(v))?;
            }
            return Ok(());
        };

        for y in 0..side {
            write!(f, "o")?;
            for x in 0..side - 1 {
                let v = y * side + x;
                write!(f, "{}o", if self.is_edge(v, v + 1) { '-' } else { ' ' })?;
            }
            writeln!(f)?;
            if y + 1 < side {
                for x in 0..side {
                    let v = y * side + x;
                    write!(f, "{}", if self.is_edge(v, v + side) { '|' } else { ' ' })?;
                    if x + 1 < side {
                        write!(f, " ")?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
