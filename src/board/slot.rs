//! Stone-holding slots: pits and stores
//!
//! Pits and stores expose the same counting capability through `Countable`;
//! the sowing loop adds stones through that trait without caring which kind
//! of slot the cursor landed on. A store additionally knows its owner, which
//! is how captured and swept stones find the right player.

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Uniform capability shared by pits and stores
pub trait Countable {
    /// Drop a single stone into the slot
    fn add_stone(&mut self);

    /// Drop `amount` stones into the slot
    fn add_stones(&mut self, amount: u32);

    fn stone_count(&self) -> u32;

    /// Empty the slot and return how many stones it held
    fn take_all(&mut self) -> u32;
}

/// A plain stone counter, one of the 12 playable slots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pit {
    stones: u32,
}

impl Pit {
    pub fn new() -> Self {
        Pit { stones: 0 }
    }
}

impl Countable for Pit {
    fn add_stone(&mut self) {
        self.stones += 1;
    }

    fn add_stones(&mut self, amount: u32) {
        self.stones += amount;
    }

    fn stone_count(&self) -> u32 {
        self.stones
    }

    fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stones)
    }
}

/// A player's scoring slot; stones here never re-enter play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    owner: PlayerId,
    stones: u32,
}

impl Store {
    pub fn new(owner: PlayerId) -> Self {
        Store { owner, stones: 0 }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }
}

impl Countable for Store {
    fn add_stone(&mut self) {
        self.stones += 1;
    }

    fn add_stones(&mut self, amount: u32) {
        self.stones += amount;
    }

    fn stone_count(&self) -> u32 {
        self.stones
    }

    fn take_all(&mut self) -> u32 {
        std::mem::take(&mut self.stones)
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.stones)
    }
}
