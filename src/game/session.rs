//! A full game session: two players, a ruleset, and whose-turn state
//!
//! The session forwards moves to the rules engine and owns everything the
//! engine deliberately does not: turn order, the end-of-game sweep, winner
//! determination, and profile bookkeeping.

use crate::core::{Player, PlayerId};
use crate::error::MancalaError;
use crate::rules::{GameRules, RulesKind};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MancalaGame {
    rules: GameRules,
    players: [Player; 2],
    current: PlayerId,
}

impl MancalaGame {
    /// Start a game of the given variant between two registered players
    pub fn new(kind: RulesKind, player_one: Player, player_two: Player) -> Self {
        MancalaGame {
            rules: GameRules::new(kind),
            players: [player_one, player_two],
            current: PlayerId::One,
        }
    }

    pub fn variant(&self) -> RulesKind {
        self.rules.kind()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut GameRules {
        &mut self.rules
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[(id.number() - 1) as usize]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[(id.number() - 1) as usize]
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn set_current_player(&mut self, id: PlayerId) {
        self.current = id;
    }

    pub fn stones_in(&self, pit: u8) -> u32 {
        self.rules.stones_in(pit)
    }

    pub fn store_count(&self, player: PlayerId) -> u32 {
        self.rules.board().store_count(player)
    }

    pub fn is_bonus(&self) -> bool {
        self.rules.is_bonus()
    }

    /// Make a move for the player whose turn it is
    ///
    /// Returns the total stones remaining on the mover's side afterwards
    /// (UI feedback, and the signal that a side has run dry).
    pub fn make_move(&mut self, start_pit: u8) -> Result<u32> {
        let mover = self.current;
        self.rules.move_stones(start_pit, mover)?;
        Ok(self.side_total(mover))
    }

    /// Hand the turn to the other player unless the last move earned a bonus
    pub fn advance_turn(&mut self) {
        if !self.rules.is_bonus() {
            self.current = self.current.opponent();
        }
    }

    /// Whether either side of the board is entirely empty
    pub fn is_game_over(&self) -> bool {
        self.rules.is_side_empty(1) || self.rules.is_side_empty(12)
    }

    /// The player with the fuller store, or `None` on a tie
    ///
    /// Fails with `GameNotOver` while both sides still hold stones.
    pub fn winner(&self) -> Result<Option<PlayerId>> {
        if !self.is_game_over() {
            return Err(MancalaError::GameNotOver);
        }

        let one = self.store_count(PlayerId::One);
        let two = self.store_count(PlayerId::Two);
        Ok(match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        })
    }

    /// Close out a finished game: sweep each side's leftovers into its
    /// owner's store, record the result in both profiles, and return the
    /// winner (`None` on a tie)
    pub fn finish(&mut self) -> Result<Option<PlayerId>> {
        if !self.is_game_over() {
            return Err(MancalaError::GameNotOver);
        }

        self.rules.capture_side(1);
        self.rules.capture_side(12);

        let winner = self.winner()?;
        let kind = self.variant();
        for id in [PlayerId::One, PlayerId::Two] {
            self.player_mut(id)
                .profile_mut()
                .record_game(kind, winner == Some(id));
        }

        match winner {
            Some(id) => tracing::info!(variant = %kind, winner = %self.player(id), "game over"),
            None => tracing::info!(variant = %kind, "game over in a tie"),
        }
        Ok(winner)
    }

    /// Reset the board to the starting position for a fresh game; profiles
    /// and names carry over, Player One moves first
    pub fn start_new_game(&mut self) {
        self.rules.reset_board();
        self.current = PlayerId::One;
    }

    fn side_total(&self, player: PlayerId) -> u32 {
        player.pit_range().map(|p| self.rules.stones_in(p)).sum()
    }
}
