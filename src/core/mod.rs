//! Core identity types: players, names, board positions, profiles

pub mod player;
pub mod profile;
pub mod types;

pub use player::Player;
pub use profile::{UserProfile, VariantRecord};
pub use types::{PlayerId, PlayerName, Position, SLOT_COUNT};
