//! The sowing loop shared by both variants
//!
//! Kalah and Ayo distribute stones identically; they differ only in whether
//! a final stone in the mover's store grants a bonus, whether an occupied
//! landing pit relays the hand into another lap, and whether a capture
//! sweeps the landing stone along with the opposite pit. Those three switches
//! are a [`SowingProfile`], so each variant is one row of flags instead of a
//! subclass.

use crate::board::{Board, Cursor};
use crate::core::{PlayerId, Position};

/// Variant-specific switches applied by [`sow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SowingProfile {
    /// Ending in the mover's own store grants another turn (Kalah)
    pub bonus_on_own_store: bool,

    /// Landing on an occupied pit picks it up and keeps sowing (Ayo)
    pub multi_lap: bool,

    /// The source pit never receives a stone during this move (Ayo)
    pub exclude_source_pit: bool,

    /// A capture also moves the mover's landing stone to the store (Kalah)
    pub capture_folds_landing_stone: bool,
}

/// What one full sowing pass did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SowOutcome {
    /// Where the final stone landed
    pub landing: Position,

    /// Whether the mover earned another turn
    pub bonus: bool,

    /// Stones moved to the mover's store by a capture (0 if none fired)
    pub captured: u32,
}

/// Empty `start_pit` and distribute its stones for `mover`
///
/// The caller has already validated that the pit belongs to the mover and is
/// non-empty. Stones are placed one per `advance`; the opponent's store is
/// always passed over.
pub(crate) fn sow(
    board: &mut Board,
    start_pit: u8,
    mover: PlayerId,
    profile: SowingProfile,
) -> SowOutcome {
    let mut hand = board.remove_stones(start_pit);
    debug_assert!(hand > 0, "sowing from an empty pit");

    let mut cursor = Cursor::seed(start_pit, mover, true, profile.exclude_source_pit);
    let mut landing = cursor.position();

    while hand > 0 {
        landing = cursor.advance();
        board.add_stone_at(landing);
        hand -= 1;

        // Relay lap: an occupied landing pit is picked up and the hand
        // continues from the next slot
        if profile.multi_lap && hand == 0 && !landing.is_store() && board.count_at(landing) != 1 {
            hand = board.take_all_at(landing);
            tracing::debug!(position = %landing, picked_up = hand, "relay lap");
        }
    }

    let bonus = profile.bonus_on_own_store && landing == mover.store_position();

    let mut captured = 0;
    if let (Some(pit), Some(opposite)) = (landing.pit_number(), landing.opposite()) {
        if mover.owns_pit(pit) && board.count_at(landing) == 1 {
            captured = capture(
                board,
                landing,
                opposite,
                mover,
                profile.capture_folds_landing_stone,
            );
        }
    }

    SowOutcome {
        landing,
        bonus,
        captured,
    }
}

/// Try the opposite-pit capture after a final stone landed in `landing`,
/// an empty-before pit on the mover's own side
///
/// Nothing happens when the opposite pit is empty. Otherwise its stones (and
/// the landing stone too, when folding) move to the mover's store. Returns
/// the store's gain.
fn capture(
    board: &mut Board,
    landing: Position,
    opposite: Position,
    mover: PlayerId,
    fold_landing_stone: bool,
) -> u32 {
    let mut captured = board.take_all_at(opposite);
    if captured == 0 {
        return 0;
    }
    if fold_landing_stone {
        captured += board.take_all_at(landing);
    }
    board.add_to_store(mover, captured);
    tracing::debug!(landing = %landing, opposite = %opposite, captured, "capture");
    captured
}
