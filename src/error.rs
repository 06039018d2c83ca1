//! Error types for the Mancala engine

use crate::core::PlayerId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MancalaError {
    #[error("invalid move: pit {pit} is not a legal choice for player {player}")]
    InvalidMove { pit: u8, player: PlayerId },

    #[error("the game is not over yet")]
    GameNotOver,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, MancalaError>;
