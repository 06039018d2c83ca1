//! Forward-stepping sowing cursor
//!
//! The cursor is a plain value seeded at the start of each sowing pass and
//! threaded through the loop; it is never stored on the board, so an aborted
//! move cannot leak iterator state into the next one.

use crate::core::{PlayerId, Position};

/// Circular cursor over the 14 board positions
///
/// Skipped positions never receive a stone and do not count as a stop: the
/// opponent's store when `skip_store` is set, and the seeded source pit when
/// `skip_source` is set (the Ayo multi-lap rule never re-enters the pit a
/// move started from).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pos: Position,
    start: Position,
    skip_store: Option<PlayerId>,
    skip_source: bool,
}

impl Cursor {
    /// Seed a cursor at `start_pit` for one sowing pass by `mover`
    ///
    /// The first `advance` lands one slot past the source pit. When
    /// `skip_opponent_store` is set the non-mover's store is passed over
    /// silently; `skip_source_pit` additionally excludes the source pit on
    /// every later lap.
    pub fn seed(
        start_pit: u8,
        mover: PlayerId,
        skip_opponent_store: bool,
        skip_source_pit: bool,
    ) -> Self {
        let start = Position::from_pit(start_pit);
        Cursor {
            pos: start,
            start,
            skip_store: skip_opponent_store.then(|| mover.opponent()),
            skip_source: skip_source_pit,
        }
    }

    /// Step one position forward (wrapping 13 to 0) and return the new
    /// position, passing over any skipped slots
    pub fn advance(&mut self) -> Position {
        loop {
            self.pos = self.pos.next();
            if let Some(skipped) = self.skip_store {
                if self.pos == skipped.store_position() {
                    continue;
                }
            }
            if self.skip_source && self.pos == self.start {
                continue;
            }
            return self.pos;
        }
    }

    /// Position reached by the last `advance`
    pub fn position(&self) -> Position {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(cursor: &mut Cursor, steps: usize) -> Vec<u8> {
        (0..steps).map(|_| cursor.advance().index()).collect()
    }

    #[test]
    fn test_first_advance_lands_past_source() {
        let mut cursor = Cursor::seed(3, PlayerId::One, true, false);
        assert_eq!(cursor.advance().index(), 3);
    }

    #[test]
    fn test_skips_opponent_store() {
        // Player One sowing from pit 6 (position 5): own store at 6 is
        // entered, the opponent's store at 13 is passed over
        let mut cursor = Cursor::seed(6, PlayerId::One, true, false);
        assert_eq!(walk(&mut cursor, 9), vec![6, 7, 8, 9, 10, 11, 12, 0, 1]);
    }

    #[test]
    fn test_skips_own_store_for_player_two() {
        let mut cursor = Cursor::seed(12, PlayerId::Two, true, false);
        assert_eq!(walk(&mut cursor, 3), vec![13, 0, 1]);
    }

    #[test]
    fn test_skips_source_pit_on_later_laps() {
        // A full lap from pit 1 (position 0) with the source excluded visits
        // 12 slots, then resumes at position 1 rather than 0
        let mut cursor = Cursor::seed(1, PlayerId::One, true, true);
        let lap = walk(&mut cursor, 13);
        assert_eq!(lap, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1]);
    }

    #[test]
    fn test_wraps_around() {
        let mut cursor = Cursor::seed(12, PlayerId::One, false, false);
        assert_eq!(walk(&mut cursor, 2), vec![13, 0]);
    }
}
