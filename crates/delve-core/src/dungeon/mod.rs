//! Dungeon model
//!
//! Rooms, chunks, coordinate hashing, weighted state sampling, and the
//! dungeon driver that regenerates the resident chunk deterministically.

mod chunk;
mod distribution;
mod position;
mod room;

pub use chunk::{CHUNK_SIDE, CHUNK_SIZE, Chunk, Dungeon, GenerationParams, derive_seed};
pub use distribution::{CumulativeDistribution, DistributionError};
pub use position::Position;
pub use room::{DoorState, Room, StairState};
