//! Integer coordinates and coordinate hashing.

use serde::{Deserialize, Serialize};

/// Integer coordinate pair, used both for chunk coordinates in chunk space
/// and for room coordinates inside a chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pack both coordinates into a single 64-bit value: X in the high 32
    /// bits, Y in the low 32 bits. Injective over all i32 pairs, so every
    /// chunk coordinate derives a distinct seed.
    pub const fn hash(self) -> u64 {
        ((self.x as u32 as u64) << 32) | (self.y as u32 as u64)
    }
}
