//! Status consistency: the status agrees with what is on the board.

use super::Invariant;
use crate::GameState;
use crate::rules;
use crate::status::GameStatus;
use crate::types::Cell;

/// Invariant: `Won` names a line the winner actually holds, `Draw` means a
/// full board without a line, `InProgress` means neither.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::Won { player, line } => line
                .cells()
                .iter()
                .all(|coord| board.get(*coord) == Cell::Occupied(player)),
            GameStatus::Draw => rules::is_draw(board),
            GameStatus::InProgress => !board.is_full() && rules::winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game status matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coord;
    use crate::types::Player;

    #[test]
    fn test_won_status_holds() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.place_marker(row, col);
        }
        assert!(game.status().is_terminal());
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unreported_line_violates() {
        let mut game = GameState::new();
        for coord in [Coord::TOP_LEFT, Coord::CENTER, Coord::BOTTOM_RIGHT] {
            game.board.set(coord, Cell::Occupied(Player::X));
        }
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
