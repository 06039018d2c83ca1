//! Player representation
//!
//! A player is identity plus statistics. Store counts live on the board,
//! keyed by `PlayerId`, so the player itself carries no board state and can
//! be persisted independently of any game.

use crate::core::{PlayerName, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    profile: UserProfile,
}

impl Player {
    pub fn new(name: impl Into<PlayerName>) -> Self {
        let name = name.into();
        let profile = UserProfile::new(name.clone());
        Player { name, profile }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<PlayerName>) {
        self.name = name.into();
        self.profile.set_name(self.name.clone());
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
