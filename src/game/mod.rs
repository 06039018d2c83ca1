//! Game session orchestration and persistence

pub mod session;
pub mod snapshot;

pub use session::MancalaGame;
pub use snapshot::SaveDir;
