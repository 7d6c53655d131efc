//! Property tests over random tap sequences.
//!
//! Each generated sequence is a list of cell indices, some of them repeated
//! or out of range, fed straight into `place_marker` the way a pointer
//! handler would.

use proptest::prelude::*;
use tap_tac_toe_rules::invariants::{GameInvariants, InvariantSet};
use tap_tac_toe_rules::{Coord, GameState, GameStatus, Ignored, Placement, Player, rules};

fn tap(game: &mut GameState, index: usize) -> Placement {
    game.place_marker(index / 3, index % 3)
}

proptest! {
    #[test]
    fn invariants_hold_for_any_tap_sequence(taps in prop::collection::vec(0usize..12, 0..40)) {
        let mut game = GameState::new();
        for index in taps {
            tap(&mut game, index);
            prop_assert!(GameInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn ignored_taps_change_nothing(taps in prop::collection::vec(0usize..12, 0..40)) {
        let mut game = GameState::new();
        for index in taps {
            let before = game.clone();
            if let Placement::Ignored(reason) = tap(&mut game, index) {
                prop_assert_eq!(&game, &before);
                match reason {
                    Ignored::GameOver => prop_assert!(before.status().is_terminal()),
                    Ignored::OutOfRange { .. } => prop_assert!(index >= 9),
                    Ignored::Occupied(coord) => prop_assert!(!before.board().is_empty(coord)),
                }
            }
        }
    }

    #[test]
    fn terminal_status_is_sticky(taps in prop::collection::vec(0usize..9, 0..40)) {
        let mut game = GameState::new();
        let mut ended: Option<GameStatus> = None;
        for index in taps {
            tap(&mut game, index);
            if let Some(status) = ended {
                prop_assert_eq!(game.status(), status);
            } else if game.status().is_terminal() {
                ended = Some(game.status());
            }
        }
    }

    #[test]
    fn win_is_reported_on_the_completing_move(order in Just((0usize..9).collect::<Vec<_>>()).prop_shuffle()) {
        let mut game = GameState::new();
        for index in order {
            let mover = game.current_player();
            let Placement::Placed(placed) = tap(&mut game, index) else { break };
            prop_assert_eq!(*placed.player(), mover);

            match placed.status() {
                GameStatus::Won { player, line } => {
                    prop_assert_eq!(*player, mover);
                    prop_assert!(line.cells().contains(placed.coord()));
                    break;
                }
                GameStatus::Draw => {
                    prop_assert!(rules::is_draw(game.board()));
                    break;
                }
                GameStatus::InProgress => {
                    prop_assert_eq!(rules::winner(game.board()), None);
                    prop_assert_eq!(game.current_player(), mover.opponent());
                }
            }
        }
        prop_assert!(game.status().is_terminal());
    }

    #[test]
    fn reset_always_yields_a_fresh_game(taps in prop::collection::vec(0usize..9, 0..20)) {
        let mut game = GameState::new();
        for index in taps {
            tap(&mut game, index);
        }
        game.reset();
        prop_assert_eq!(game.current_player(), Player::X);
        prop_assert_eq!(game.status(), GameStatus::InProgress);
        prop_assert!(Coord::ALL.iter().all(|coord| game.board().is_empty(*coord)));
    }
}
