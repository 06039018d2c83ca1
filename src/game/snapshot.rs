//! Named JSON snapshots of games and players
//!
//! A snapshot is a whole-value serialization taken at a turn boundary; the
//! sowing cursor exists only inside a single move, so there is never partial
//! state to capture. Files live under a caller-chosen save directory and are
//! addressed by bare names (`"friday"` becomes `friday.game.json`).

use crate::core::Player;
use crate::error::MancalaError;
use crate::game::MancalaGame;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory holding saved games and player profiles
#[derive(Debug, Clone)]
pub struct SaveDir {
    root: PathBuf,
}

impl SaveDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        SaveDir { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save a full game session under `name`
    pub fn save_game(&self, name: &str, game: &MancalaGame) -> Result<()> {
        self.write_json(self.game_path(name), game)
    }

    /// Load the game session saved under `name`
    pub fn load_game(&self, name: &str) -> Result<MancalaGame> {
        let json = fs::read_to_string(self.game_path(name))?;
        serde_json::from_str(&json).map_err(|e| MancalaError::Serialization(e.to_string()))
    }

    /// Save a single player, profile counters included, under `name`
    pub fn save_player(&self, name: &str, player: &Player) -> Result<()> {
        self.write_json(self.player_path(name), player)
    }

    /// Load the player saved under `name`
    pub fn load_player(&self, name: &str) -> Result<Player> {
        let json = fs::read_to_string(self.player_path(name))?;
        serde_json::from_str(&json).map_err(|e| MancalaError::Serialization(e.to_string()))
    }

    fn write_json<T: serde::Serialize>(&self, path: PathBuf, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| MancalaError::Serialization(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    fn game_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.game.json"))
    }

    fn player_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.player.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::RulesKind;

    #[test]
    fn test_game_json_roundtrip_in_memory() {
        let mut game = MancalaGame::new(RulesKind::Ayo, Player::new("Alice"), Player::new("Bob"));
        game.make_move(5).unwrap();
        game.advance_turn();

        let json = serde_json::to_string(&game).unwrap();
        let restored: MancalaGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.current_player(), PlayerId::Two);
        assert_eq!(restored.variant(), RulesKind::Ayo);
    }

    #[test]
    fn test_player_json_roundtrip_in_memory() {
        let mut player = Player::new("Carol");
        player.profile_mut().record_game(RulesKind::Kalah, true);

        let json = serde_json::to_string(&player).unwrap();
        let restored: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, player);
        assert_eq!(restored.profile().record(RulesKind::Kalah).wins, 1);
    }
}
