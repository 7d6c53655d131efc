//! Marker balance: X moves first, so X has as many markers as O or one more.

use super::Invariant;
use crate::GameState;
use crate::types::Player;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
pub struct MarkerBalanceInvariant;

impl Invariant<GameState> for MarkerBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many markers as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Coord;
    use crate::types::Cell;

    #[test]
    fn test_holds_through_play() {
        let mut game = GameState::new();
        for coord in Coord::ALL {
            game.place_marker(coord.row(), coord.col());
            assert!(MarkerBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_extra_o_violates() {
        let mut game = GameState::new();
        game.board.set(Coord::CENTER, Cell::Occupied(Player::O));
        assert!(!MarkerBalanceInvariant::holds(&game));
    }
}
