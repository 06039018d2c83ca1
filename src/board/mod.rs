//! Board storage: 12 pits and 2 stores on one circular sequence
//!
//! External callers address pits by number (1-12) and stores by player; the
//! sowing loop addresses slots by circular [`Position`]. The board is plain
//! state with read/add/take primitives, and every rule decision lives in the
//! rules layer.

pub mod cursor;
pub mod slot;

pub use cursor::Cursor;
pub use slot::{Countable, Pit, Store};

use crate::core::{PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stones placed in each pit at the start of a game
pub const STARTING_STONES: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pits: [Pit; 12],
    stores: [Store; 2],
}

impl Board {
    /// A board in the canonical starting position (4 stones per pit,
    /// both stores empty)
    pub fn new() -> Self {
        let mut board = Board {
            pits: [Pit::new(); 12],
            stores: [Store::new(PlayerId::One), Store::new(PlayerId::Two)],
        };
        board.set_up_pits();
        board
    }

    /// Reset every pit to the starting count; stores are left untouched
    pub fn set_up_pits(&mut self) {
        for pit in &mut self.pits {
            pit.take_all();
            pit.add_stones(STARTING_STONES);
        }
    }

    /// Empty both stores (used when starting a new game)
    pub fn empty_stores(&mut self) {
        for store in &mut self.stores {
            store.take_all();
        }
    }

    /// Stones currently in a pit (external numbering, 1-12)
    pub fn stones_in(&self, pit: u8) -> u32 {
        self.pit(pit).stone_count()
    }

    /// Empty a pit and return how many stones it held
    pub fn remove_stones(&mut self, pit: u8) -> u32 {
        self.pit_mut(pit).take_all()
    }

    /// Overwrite a pit's count (scenario setup for callers and tests)
    pub fn set_stones(&mut self, pit: u8, count: u32) {
        let slot = self.pit_mut(pit);
        slot.take_all();
        slot.add_stones(count);
    }

    pub fn store_count(&self, player: PlayerId) -> u32 {
        self.store(player).stone_count()
    }

    pub fn add_to_store(&mut self, player: PlayerId, amount: u32) {
        self.store_mut(player).add_stones(amount);
    }

    /// Stones in the slot at a circular position
    pub fn count_at(&self, pos: Position) -> u32 {
        self.slot(pos).stone_count()
    }

    /// Drop one stone into the slot at a circular position
    pub fn add_stone_at(&mut self, pos: Position) {
        self.slot_mut(pos).add_stone();
    }

    /// Empty the slot at a circular position and return its count
    pub fn take_all_at(&mut self, pos: Position) -> u32 {
        self.slot_mut(pos).take_all()
    }

    /// Total stones across all 14 slots
    ///
    /// Conserved by every operation except `set_up_pits`, `empty_stores`,
    /// and `set_stones`.
    pub fn total_stones(&self) -> u32 {
        let pits: u32 = self.pits.iter().map(|p| p.stone_count()).sum();
        let stores: u32 = self.stores.iter().map(|s| s.stone_count()).sum();
        pits + stores
    }

    fn pit(&self, pit: u8) -> &Pit {
        debug_assert!((1..=12).contains(&pit));
        &self.pits[(pit - 1) as usize]
    }

    fn pit_mut(&mut self, pit: u8) -> &mut Pit {
        debug_assert!((1..=12).contains(&pit));
        &mut self.pits[(pit - 1) as usize]
    }

    fn store(&self, player: PlayerId) -> &Store {
        &self.stores[(player.number() - 1) as usize]
    }

    fn store_mut(&mut self, player: PlayerId) -> &mut Store {
        &mut self.stores[(player.number() - 1) as usize]
    }

    fn slot(&self, pos: Position) -> &dyn Countable {
        if let Some(player) = pos.store_owner() {
            self.store(player)
        } else if let Some(pit) = pos.pit_number() {
            self.pit(pit)
        } else {
            unreachable!("every board position is a pit or a store")
        }
    }

    fn slot_mut(&mut self, pos: Position) -> &mut dyn Countable {
        if let Some(player) = pos.store_owner() {
            self.store_mut(player)
        } else if let Some(pit) = pos.pit_number() {
            self.pit_mut(pit)
        } else {
            unreachable!("every board position is a pit or a store")
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Two-row rendering with Player Two's pits on top, read right to left
    /// as the sowing direction flows
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "      ")?;
        for pit in (7..=12).rev() {
            write!(f, " {:>3}", self.stones_in(pit))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "[{:>3}]                         [{:>3}]",
            self.store_count(PlayerId::Two),
            self.store_count(PlayerId::One)
        )?;
        write!(f, "      ")?;
        for pit in 1..=6 {
            write!(f, " {:>3}", self.stones_in(pit))?;
        }
        writeln!(f)
    }
}
