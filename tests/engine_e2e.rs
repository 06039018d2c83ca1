//! End-to-end tests for the rules engine through the session API
//!
//! Each test drives the engine the way a UI client would: construct a
//! session, make moves, and observe counts. Board shaping for specific
//! scenarios goes through the public board accessors.

use mancala_rs::{
    core::{Player, PlayerId},
    game::MancalaGame,
    rules::RulesKind,
    MancalaError,
};

fn new_game(kind: RulesKind) -> MancalaGame {
    MancalaGame::new(kind, Player::new("Alice"), Player::new("Bob"))
}

fn clear_pits(game: &mut MancalaGame) {
    for pit in 1..=12 {
        game.rules_mut().board_mut().set_stones(pit, 0);
    }
}

/// Kalah opening from the worked scenario: player 1 plays pit 3 from the
/// starting board, stones land in pits 4, 5, 6 and the store
#[test]
fn test_kalah_opening_scenario() {
    let mut game = new_game(RulesKind::Kalah);

    let gained = game.rules_mut().move_stones(3, PlayerId::One).unwrap();

    assert_eq!(gained, 1);
    assert!(game.is_bonus());
    assert_eq!(game.stones_in(4), 5);
    assert_eq!(game.stones_in(5), 5);
    assert_eq!(game.stones_in(3), 0);
    assert_eq!(game.store_count(PlayerId::One), 1);
    assert_eq!(game.store_count(PlayerId::Two), 0);
    assert_eq!(game.rules().board().total_stones(), 48);
}

/// A move ending on the mover's own previously-empty pit with a non-empty
/// opposite transfers exactly opposite + 1 stones and zeroes both pits
#[test]
fn test_kalah_capture_transfers_opposite_plus_one() {
    let mut game = new_game(RulesKind::Kalah);
    game.rules_mut().board_mut().set_stones(2, 2);
    game.rules_mut().board_mut().set_stones(4, 0);
    game.rules_mut().board_mut().set_stones(9, 6);

    let gained = game.rules_mut().move_stones(2, PlayerId::One).unwrap();

    assert_eq!(gained, 7);
    assert_eq!(game.stones_in(4), 0);
    assert_eq!(game.stones_in(9), 0);
    assert_eq!(game.store_count(PlayerId::One), 7);
}

/// A single-stone move into the mover's own empty pit still captures
/// (the capture check looks only at the landing count)
#[test]
fn test_kalah_single_stone_self_capture() {
    let mut game = new_game(RulesKind::Kalah);
    game.rules_mut().board_mut().set_stones(1, 1);
    game.rules_mut().board_mut().set_stones(2, 0);
    // Pit 2 faces pit 11
    game.rules_mut().board_mut().set_stones(11, 3);

    let gained = game.rules_mut().move_stones(1, PlayerId::One).unwrap();

    assert_eq!(gained, 4);
    assert_eq!(game.stones_in(2), 0);
    assert_eq!(game.stones_in(11), 0);
    assert_eq!(game.store_count(PlayerId::One), 4);
}

/// Ayo capture from the worked scenario: a single stone relayed into an
/// empty own pit captures only the opposite pit's 5 stones; the landing
/// stone stays put
#[test]
fn test_ayo_capture_scenario() {
    let mut game = new_game(RulesKind::Ayo);
    clear_pits(&mut game);
    game.rules_mut().board_mut().set_stones(3, 1);
    game.rules_mut().board_mut().set_stones(9, 5);

    let gained = game.rules_mut().move_stones(3, PlayerId::One).unwrap();

    assert_eq!(gained, 5);
    assert_eq!(game.stones_in(4), 1);
    assert_eq!(game.stones_in(9), 0);
    assert_eq!(game.store_count(PlayerId::One), 5);
    assert!(!game.is_bonus());
}

/// Player 2's moves mirror player 1's: captures land in player 2's store
#[test]
fn test_player_two_capture() {
    let mut game = new_game(RulesKind::Kalah);
    game.rules_mut().board_mut().set_stones(8, 2);
    game.rules_mut().board_mut().set_stones(10, 0);
    // Pit 10 faces pit 3
    game.rules_mut().board_mut().set_stones(3, 4);

    let gained = game.rules_mut().move_stones(8, PlayerId::Two).unwrap();

    assert_eq!(gained, 5);
    assert_eq!(game.stones_in(10), 0);
    assert_eq!(game.stones_in(3), 0);
    assert_eq!(game.store_count(PlayerId::Two), 5);
}

/// Bonus turns exist only in Kalah and only for a final stone in the
/// mover's own store
#[test]
fn test_bonus_turn_law() {
    // Kalah: pit 6 with 1 stone ends in the store
    let mut kalah = new_game(RulesKind::Kalah);
    kalah.rules_mut().board_mut().set_stones(6, 1);
    kalah.rules_mut().move_stones(6, PlayerId::One).unwrap();
    assert!(kalah.is_bonus());

    // Kalah: a move ending in a pit grants nothing
    kalah.rules_mut().move_stones(1, PlayerId::One).unwrap();
    assert!(!kalah.is_bonus());

    // Ayo: the same store-ending move grants nothing
    let mut ayo = new_game(RulesKind::Ayo);
    ayo.rules_mut().board_mut().set_stones(6, 1);
    ayo.rules_mut().move_stones(6, PlayerId::One).unwrap();
    assert!(!ayo.is_bonus());
}

/// Out-of-range and empty-pit moves fail with InvalidMove and leave the
/// board untouched
#[test]
fn test_invalid_move_rejection() {
    let mut game = new_game(RulesKind::Kalah);
    let before = game.rules().clone();

    // Pit 7 belongs to player 2
    let err = game.rules_mut().move_stones(7, PlayerId::One).unwrap_err();
    assert!(matches!(
        err,
        MancalaError::InvalidMove {
            pit: 7,
            player: PlayerId::One
        }
    ));
    assert_eq!(game.rules(), &before);

    // Pit 1 emptied, then played
    game.rules_mut().board_mut().set_stones(1, 0);
    let err = game.rules_mut().move_stones(1, PlayerId::One).unwrap_err();
    assert!(matches!(err, MancalaError::InvalidMove { pit: 1, .. }));
    assert_eq!(game.stones_in(1), 0);
    assert_eq!(game.rules().board().total_stones(), 44);
}

/// Endgame flow: the last stone on a side leaves it empty, the session
/// reports game over, and finish sweeps the rest into the right store
#[test]
fn test_endgame_sweep_and_winner() {
    let mut game = new_game(RulesKind::Kalah);
    clear_pits(&mut game);
    game.rules_mut().board_mut().set_stones(6, 1);
    game.rules_mut().board_mut().set_stones(8, 7);
    game.rules_mut().board_mut().add_to_store(PlayerId::One, 30);
    game.rules_mut().board_mut().add_to_store(PlayerId::Two, 10);

    // Pit 6's lone stone lands in the store, emptying side one
    let remaining = game.make_move(6).unwrap();
    assert_eq!(remaining, 0);
    assert!(game.is_game_over());

    let winner = game.finish().unwrap();
    assert_eq!(winner, Some(PlayerId::One));
    assert_eq!(game.store_count(PlayerId::One), 31);
    assert_eq!(game.store_count(PlayerId::Two), 17);
    assert_eq!(game.rules().board().total_stones(), 48);
}

/// Play both variants forward with a first-legal-pit policy, checking the
/// conservation and per-variant invariants after every single move
#[test]
fn test_stone_conservation_over_play() {
    for kind in [RulesKind::Kalah, RulesKind::Ayo] {
        let mut game = new_game(kind);

        for _ in 0..10_000 {
            if game.is_game_over() {
                break;
            }
            let mover = game.current_player();
            let pit = mover
                .pit_range()
                .find(|&p| game.stones_in(p) > 0)
                .expect("a live game has a non-empty pit on the mover's side");

            game.make_move(pit).unwrap();

            assert_eq!(game.rules().board().total_stones(), 48, "variant {kind}");
            if kind == RulesKind::Ayo {
                // Source pit exclusion and the no-bonus rule hold after
                // every Ayo move
                assert_eq!(game.stones_in(pit), 0);
                assert!(!game.is_bonus());
            }
            game.advance_turn();
        }

        if game.is_game_over() {
            game.finish().unwrap();
            let totals =
                game.store_count(PlayerId::One) + game.store_count(PlayerId::Two);
            assert_eq!(totals, 48, "variant {kind}");
        }
    }
}
