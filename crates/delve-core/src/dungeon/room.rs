//! Room state: stairs and four compass-indexed doors.

use delve_graph::Direction;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Door state for one side of a room.
///
/// `None` means the side connects nowhere; a generated passage with no
/// door in it is `Open`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum DoorState {
    #[default]
    None = 0,
    Open = 1,
    Closed = 2,
    Stuck = 3,
    Locked = 4,
}

impl DoorState {
    /// Whether this side connects to a neighboring room at all.
    pub const fn is_doorway(self) -> bool {
        !matches!(self, DoorState::None)
    }

    /// Whether a body can pass without further interaction.
    pub const fn is_passable(self) -> bool {
        matches!(self, DoorState::Open)
    }
}

/// Stair state of a room.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum StairState {
    #[default]
    None = 0,
    Down = 1,
    Up = 2,
}

impl StairState {
    /// Display character for maps.
    pub const fn symbol(self) -> char {
        match self {
            StairState::None => '.',
            StairState::Down => '>',
            StairState::Up => '<',
        }
    }
}

/// One room of a chunk.
///
/// Default state everywhere; mutated only during chunk generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub(crate) stairs: StairState,
    /// Indexed by `Direction as usize`.
    pub(crate) doors: [DoorState; Direction::COUNT],
}

impl Room {
    pub fn stairs(&self) -> StairState {
        self.stairs
    }

    pub fn door(&self, dir: Direction) -> DoorState {
        self.doors[dir as usize]
    }

    pub fn doors(&self) -> &[DoorState; Direction::COUNT] {
        &self.doors
    }

    pub(crate) fn set_door(&mut self, dir: Direction, state: DoorState) {
        self.doors[dir as usize] = state;
    }

    /// True when at least one side has a doorway.
    pub fn has_exit(&self) -> bool {
        self.doors.iter().any(|d| d.is_doorway())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_room_is_sealed() {
        let room = Room::default();
        assert_eq!(room.stairs(), StairState::None);
        assert!(!room.has_exit());
        for dir in Direction::iter() {
            assert_eq!(room.door(dir), DoorState::None);
        }
    }

    #[test]
    fn test_set_door() {
        let mut room = Room::default();
        room.set_door(Direction::East, DoorState::Locked);
        assert_eq!(room.door(Direction::East), DoorState::Locked);
        assert_eq!(room.door(Direction::West), DoorState::None);
        assert!(room.has_exit());
    }

    #[test]
    fn test_door_state_predicates() {
        assert!(!DoorState::None.is_doorway());
        assert!(DoorState::Open.is_passable());
        for state in [DoorState::Closed, DoorState::Stuck, DoorState::Locked] {
            assert!(state.is_doorway());
            assert!(!state.is_passable());
        }
    }

    #[test]
    fn test_stair_symbols() {
        assert_eq!(StairState::None.symbol(), '.');
        assert_eq!(StairState::Down.symbol(), '>');
        assert_eq!(StairState::Up.symbol(), '<');
    }
}
