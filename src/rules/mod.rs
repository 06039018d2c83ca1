//! Variant-polymorphic rules engine
//!
//! One [`GameRules`] drives both rulesets. The variant is a [`RulesKind`]
//! chosen at construction and dispatched as a set of sowing switches, so the
//! divergence between Kalah and Ayo stays explicit and exhaustively
//! enumerable instead of hiding behind virtual dispatch.

mod sowing;

use crate::board::Board;
use crate::core::PlayerId;
use crate::error::MancalaError;
use crate::Result;
use serde::{Deserialize, Serialize};
use sowing::{sow, SowingProfile};
use std::fmt;

/// Which ruleset a game is played under; immutable after creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RulesKind {
    Kalah,
    Ayo,
}

impl RulesKind {
    fn sowing_profile(self) -> SowingProfile {
        match self {
            RulesKind::Kalah => SowingProfile {
                bonus_on_own_store: true,
                multi_lap: false,
                exclude_source_pit: false,
                capture_folds_landing_stone: true,
            },
            RulesKind::Ayo => SowingProfile {
                bonus_on_own_store: false,
                multi_lap: true,
                exclude_source_pit: true,
                capture_folds_landing_stone: false,
            },
        }
    }
}

impl fmt::Display for RulesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesKind::Kalah => write!(f, "Kalah"),
            RulesKind::Ayo => write!(f, "Ayo"),
        }
    }
}

/// The rules engine: board plus active mover and the transient bonus flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    kind: RulesKind,
    board: Board,
    current_player: PlayerId,
    bonus: bool,
}

impl GameRules {
    pub fn new(kind: RulesKind) -> Self {
        GameRules {
            kind,
            board: Board::new(),
            current_player: PlayerId::One,
            bonus: false,
        }
    }

    pub fn kind(&self) -> RulesKind {
        self.kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup; rule decisions never go
    /// through this
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn set_player(&mut self, player: PlayerId) {
        self.current_player = player;
    }

    /// Whether the last move earned the mover another turn
    pub fn is_bonus(&self) -> bool {
        self.bonus
    }

    pub fn stones_in(&self, pit: u8) -> u32 {
        self.board.stones_in(pit)
    }

    /// Whether `start_pit` is a legal move for `player`: on the player's own
    /// side and non-empty
    pub fn is_valid_move(&self, start_pit: u8, player: PlayerId) -> bool {
        player.owns_pit(start_pit) && self.board.stones_in(start_pit) != 0
    }

    /// Perform one full move and return the net gain to the mover's store
    /// (may be 0)
    ///
    /// Fails with `InvalidMove` before touching the board when the pit is
    /// outside the mover's range or empty; a validated move always runs to
    /// completion.
    pub fn move_stones(&mut self, start_pit: u8, player: PlayerId) -> Result<u32> {
        if !self.is_valid_move(start_pit, player) {
            return Err(MancalaError::InvalidMove {
                pit: start_pit,
                player,
            });
        }

        self.current_player = player;
        let before = self.board.store_count(player);

        let outcome = sow(&mut self.board, start_pit, player, self.kind.sowing_profile());
        self.bonus = outcome.bonus;

        let gained = self.board.store_count(player) - before;
        tracing::debug!(
            variant = %self.kind,
            pit = start_pit,
            player = %player,
            gained,
            bonus = outcome.bonus,
            landing = %outcome.landing,
            "move resolved"
        );
        Ok(gained)
    }

    /// Whether all six pits on the side containing `pit` are empty
    ///
    /// Out-of-range pit numbers answer `false` rather than failing.
    pub fn is_side_empty(&self, pit: u8) -> bool {
        match PlayerId::side_of_pit(pit) {
            Some(owner) => owner.pit_range().all(|p| self.board.stones_in(p) == 0),
            None => false,
        }
    }

    /// Sweep every pit on the side containing `pit` into that side's owner's
    /// store (end-of-game awarding of leftover stones)
    ///
    /// Out-of-range pit numbers are ignored.
    pub fn capture_side(&mut self, pit: u8) {
        let Some(owner) = PlayerId::side_of_pit(pit) else {
            return;
        };
        let swept: u32 = owner
            .pit_range()
            .map(|p| self.board.remove_stones(p))
            .sum();
        self.board.add_to_store(owner, swept);
        if swept > 0 {
            tracing::debug!(player = %owner, swept, "side swept into store");
        }
    }

    /// Pits back to 4 stones each, both stores emptied, bonus cleared
    pub fn reset_board(&mut self) {
        self.board.set_up_pits();
        self.board.empty_stores();
        self.bonus = false;
    }
}
