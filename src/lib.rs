//! Mancala rule engine for the Kalah and Ayo variants
//!
//! Both variants share a 14-slot circular board (12 pits plus 2 stores) and
//! the same sowing mechanics; they diverge in bonus turns, multi-lap
//! re-sowing, and what a capture sweeps into the store. The engine owns
//! board state, stone movement, captures, and end-of-game resolution;
//! rendering and persistence callers sit on top of the public session API.

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

pub use error::{MancalaError, Result};
