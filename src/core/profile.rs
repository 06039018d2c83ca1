//! Per-player win/loss records, kept separately for each rules variant

use crate::core::PlayerName;
use crate::rules::RulesKind;
use serde::{Deserialize, Serialize};

/// Game/win counters for one rules variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub games: u32,
    pub wins: u32,
}

impl VariantRecord {
    /// Games that were not won (losses and ties)
    pub fn losses(&self) -> u32 {
        self.games - self.wins
    }
}

/// Lifetime statistics for one player, persisted alongside the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    name: PlayerName,
    kalah: VariantRecord,
    ayo: VariantRecord,
}

impl UserProfile {
    pub fn new(name: impl Into<PlayerName>) -> Self {
        UserProfile {
            name: name.into(),
            kalah: VariantRecord::default(),
            ayo: VariantRecord::default(),
        }
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<PlayerName>) {
        self.name = name.into();
    }

    /// Record a finished game of the given variant
    pub fn record_game(&mut self, kind: RulesKind, won: bool) {
        let record = self.record_mut(kind);
        record.games += 1;
        if won {
            record.wins += 1;
        }
    }

    pub fn record(&self, kind: RulesKind) -> &VariantRecord {
        match kind {
            RulesKind::Kalah => &self.kalah,
            RulesKind::Ayo => &self.ayo,
        }
    }

    fn record_mut(&mut self, kind: RulesKind) -> &mut VariantRecord {
        match kind {
            RulesKind::Kalah => &mut self.kalah,
            RulesKind::Ayo => &mut self.ayo,
        }
    }
}
