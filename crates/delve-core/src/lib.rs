//! delve-core: deterministic dungeon chunk generation.
//!
//! A [`dungeon::Dungeon`] owns a seeded random generator and one resident
//! chunk of rooms. Chunk contents are a pure function of the world seed,
//! the chunk coordinate, and the generation parameters: moving to a chunk
//! reseeds the generator from a coordinate-derived seed before anything is
//! sampled, so nothing about a chunk needs to be stored to be revisited.
//!
//! Each dungeon draws only from its own generator. Generating chunks in
//! parallel means one [`Dungeon`](dungeon::Dungeon) per worker, never a
//! shared generator.

pub mod dungeon;
mod rng;

pub use delve_graph::{Direction, Graph};
pub use rng::DelveRng;
