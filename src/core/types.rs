//! Strongly-typed wrappers for board and player concepts
//!
//! Player identity is passed explicitly through every engine call instead of
//! being cached on the board, so these types carry the index arithmetic that
//! ties players to their pits and stores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the two players in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player number as used in the external API (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// External pit numbers on this player's side of the board
    pub fn pit_range(self) -> RangeInclusive<u8> {
        match self {
            PlayerId::One => 1..=6,
            PlayerId::Two => 7..=12,
        }
    }

    /// Whether `pit` is one of this player's six pits
    pub fn owns_pit(self, pit: u8) -> bool {
        self.pit_range().contains(&pit)
    }

    /// The player whose side contains `pit`, if the pit number is in range
    pub fn side_of_pit(pit: u8) -> Option<PlayerId> {
        match pit {
            1..=6 => Some(PlayerId::One),
            7..=12 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Circular position of this player's store
    pub fn store_position(self) -> Position {
        match self {
            PlayerId::One => Position::new(6),
            PlayerId::Two => Position::new(13),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Player name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: impl Into<String>) -> Self {
        PlayerName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerName {
    fn from(s: String) -> Self {
        PlayerName(s)
    }
}

impl From<&str> for PlayerName {
    fn from(s: &str) -> Self {
        PlayerName(s.to_string())
    }
}

/// A position on the circular 14-slot board
///
/// Positions 0-5 hold pits 1-6, position 6 is Player One's store, positions
/// 7-12 hold pits 7-12, and position 13 is Player Two's store. External pit
/// numbering (1-12) appears only at the API boundary; everything inside the
/// sowing loop works on positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position(u8);

/// Number of slots on the board (12 pits + 2 stores)
pub const SLOT_COUNT: u8 = 14;

impl Position {
    pub fn new(index: u8) -> Self {
        debug_assert!(index < SLOT_COUNT);
        Position(index)
    }

    /// Circular position holding the given external pit number (1-12)
    pub fn from_pit(pit: u8) -> Self {
        debug_assert!((1..=12).contains(&pit));
        if pit <= 6 {
            Position(pit - 1)
        } else {
            Position(pit)
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// External pit number at this position, or `None` for a store
    pub fn pit_number(self) -> Option<u8> {
        match self.0 {
            0..=5 => Some(self.0 + 1),
            7..=12 => Some(self.0),
            _ => None,
        }
    }

    /// Owner of the store at this position, or `None` for a pit
    pub fn store_owner(self) -> Option<PlayerId> {
        match self.0 {
            6 => Some(PlayerId::One),
            13 => Some(PlayerId::Two),
            _ => None,
        }
    }

    pub fn is_store(self) -> bool {
        self.store_owner().is_some()
    }

    /// Next position in sowing order, wrapping 13 back to 0
    pub fn next(self) -> Position {
        Position((self.0 + 1) % SLOT_COUNT)
    }

    /// Position of the directly-opposite pit (pit `n` faces pit `13 - n`)
    ///
    /// Returns `None` for stores, which have no opposite.
    pub fn opposite(self) -> Option<Position> {
        self.pit_number().map(|pit| Position::from_pit(13 - pit))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
