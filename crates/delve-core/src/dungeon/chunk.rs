//! Chunk layout and deterministic regeneration.

use delve_graph::random_connected_grid;
use serde::{Deserialize, Serialize};

use crate::dungeon::distribution::{CumulativeDistribution, DistributionError};
use crate::dungeon::position::Position;
use crate::dungeon::room::{DoorState, Room, StairState};
use crate::rng::DelveRng;

/// Rooms per chunk side.
pub const CHUNK_SIDE: usize = 4;
/// Rooms per chunk; always `CHUNK_SIDE` squared.
pub const CHUNK_SIZE: usize = CHUNK_SIDE * CHUNK_SIDE;

/// Domain-separation constant mixed into seed derivation so dungeon
/// streams do not correlate with other uses of the same world seed.
const SEED_DOMAIN: u64 = 0x9e37_79b9_7f4a_7c15;

/// Default edge-keep probability for the chunk connectivity lattice.
const DEFAULT_CONNECT_PROBABILITY: f32 = 0.35;

/// Default stair thresholds: mostly nothing, a small chance of stairs.
const STAIR_TABLE: [f32; 3] = [0.90, 0.95, 1.0];
const STAIR_STATES: [StairState; 3] = [StairState::None, StairState::Down, StairState::Up];

/// Default door thresholds over None/Open/Closed/Stuck/Locked.
const DOOR_TABLE: [f32; 5] = [0.15, 0.55, 0.85, 0.93, 1.0];
const DOOR_STATES: [DoorState; 5] = [
    DoorState::None,
    DoorState::Open,
    DoorState::Closed,
    DoorState::Stuck,
    DoorState::Locked,
];

/// Chunk-local seed for a chunk coordinate under a world seed.
pub fn derive_seed(base: u64, position: Position) -> u64 {
    position.hash() ^ base
}

/// A square block of rooms generated and held resident as one unit.
///
/// Rooms are stored row-major: `x + CHUNK_SIDE * y`, with (0, 0) the top
/// left. Contents are a pure function of (world seed, chunk coordinate,
/// generation parameters); nothing mutates a chunk after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    rooms: [Room; CHUNK_SIZE],
}

impl Default for Chunk {
    fn default() -> Self {
        Self {
            rooms: [Room::default(); CHUNK_SIZE],
        }
    }
}

impl Chunk {
    /// All rooms in storage order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room at (x, y). Panics when either coordinate is out of bounds;
    /// an oversized `x` would otherwise alias into the next row.
    pub fn room(&self, x: usize, y: usize) -> &Room {
        assert!(x < CHUNK_SIDE && y < CHUNK_SIDE, "room ({x}, {y}) out of bounds");
        &self.rooms[x + CHUNK_SIDE * y]
    }
}

/// Tunable generation inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    connect_probability: f32,
    door_states: CumulativeDistribution,
    stair_states: CumulativeDistribution,
}

impl GenerationParams {
    /// Validated construction from custom tables. Thresholds are
    /// cumulative and must end at exactly 1.0; door thresholds map onto
    /// None/Open/Closed/Stuck/Locked, stair thresholds onto None/Down/Up.
    pub fn new(
        connect_probability: f32,
        door_thresholds: [f32; 5],
        stair_thresholds: [f32; 3],
    ) -> Result<Self, DistributionError> {
        Ok(Self {
            connect_probability: connect_probability.clamp(0.0, 1.0),
            door_states: CumulativeDistribution::new(&door_thresholds)?,
            stair_states: CumulativeDistribution::new(&stair_thresholds)?,
        })
    }

    pub fn connect_probability(&self) -> f32 {
        self.connect_probability
    }

    pub fn set_connect_probability(&mut self, p: f32) {
        self.connect_probability = p.clamp(0.0, 1.0);
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            connect_probability: DEFAULT_CONNECT_PROBABILITY,
            door_states: CumulativeDistribution::from_table(&DOOR_TABLE),
            stair_states: CumulativeDistribution::from_table(&STAIR_TABLE),
        }
    }
}

/// Owns the generator and the single resident chunk.
///
/// The resident chunk is fully regenerated, never patched, whenever the
/// chunk coordinate changes. Because the generator is reseeded from the
/// coordinate-derived seed before each regeneration, chunk contents depend
/// only on (world seed, chunk coordinate, parameters) and revisiting a
/// coordinate reproduces the chunk bit for bit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    seed: u64,
    rng: DelveRng,
    room_pos: Position,
    chunk_pos: Position,
    level: u32,
    params: GenerationParams,
    chunk: Chunk,
}

impl Dungeon {
    /// Create a dungeon for `seed` with default parameters and generate
    /// the chunk at the origin.
    pub fn new(seed: u64) -> Self {
        Self::with_params(seed, GenerationParams::default())
    }

    /// Create a dungeon with custom generation parameters.
    pub fn with_params(seed: u64, params: GenerationParams) -> Self {
        let mut dungeon = Self {
            seed,
            rng: DelveRng::from_pair(seed, SEED_DOMAIN ^ seed),
            room_pos: Position::new(CHUNK_SIDE as i32 / 2, CHUNK_SIDE as i32 / 2),
            chunk_pos: Position::default(),
            level: 1,
            params,
            chunk: Chunk::default(),
        };
        dungeon.update_chunk();
        dungeon
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current dungeon depth, starting at 1. Informational only: chunk
    /// contents derive from the seed and chunk coordinate, not the level.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn descend(&mut self) {
        self.level += 1;
    }

    pub fn ascend(&mut self) {
        self.level = self.level.saturating_sub(1).max(1);
    }

    /// The resident chunk.
    pub fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    /// Current chunk coordinate in chunk space.
    pub fn chunk_position(&self) -> Position {
        self.chunk_pos
    }

    /// Party position within the resident chunk. Generation ignores it.
    pub fn room_position(&self) -> Position {
        self.room_pos
    }

    pub fn set_room_position(&mut self, pos: Position) {
        self.room_pos = pos;
    }

    /// Move to `pos`, regenerating the resident chunk if it changed.
    pub fn move_to_chunk(&mut self, pos: Position) {
        if pos != self.chunk_pos {
            self.chunk_pos = pos;
            self.update_chunk();
        }
    }

    /// Regenerate the resident chunk from the current chunk coordinate.
    ///
    /// Reseeds the owned generator from the coordinate-derived seed first,
    /// so the result never depends on how many draws earlier chunks
    /// consumed. Door states are sampled once per connectivity edge and
    /// mirrored onto the neighboring room's opposite-facing slot, keeping
    /// the two sides of every passage consistent.
    pub fn update_chunk(&mut self) {
        let chunk_seed = derive_seed(self.seed, self.chunk_pos);
        self.rng.reseed_pair(chunk_seed, SEED_DOMAIN ^ chunk_seed);

        let graph = random_connected_grid(
            &mut self.rng,
            CHUNK_SIDE,
            self.params.connect_probability,
        );

        let mut chunk = Chunk::default();
        for room in chunk.rooms.iter_mut() {
            room.stairs = STAIR_STATES[self.params.stair_states.sample(&mut self.rng)];
        }

        for v in 0..CHUNK_SIZE {
            for &w in graph.neighbors(v) {
                // Each undirected edge is handled from its lower endpoint.
                if w <= v {
                    continue;
                }
                let Some(dir) = graph.relative_grid_direction(v, w) else {
                    continue;
                };
                let state = DOOR_STATES[self.params.door_states.sample(&mut self.rng)];
                chunk.rooms[v].set_door(dir, state);
                chunk.rooms[w].set_door(dir.opposite(), state);
            }
        }

        self.chunk = chunk;
    }
}
