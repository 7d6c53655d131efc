//! Turn consistency: the player to move follows from the marker counts.

use super::Invariant;
use crate::GameState;
use crate::types::Player;

/// Invariant: while the game is in progress, X is to move exactly when both
/// players have the same number of markers.
///
/// After a terminal move the current player is the one who moved last, so
/// the check only applies to in-progress games.
pub struct TurnConsistentInvariant;

impl Invariant<GameState> for TurnConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        if game.status().is_terminal() {
            return true;
        }
        let balanced = game.board().count(Player::X) == game.board().count(Player::O);
        balanced == (game.current_player() == Player::X)
    }

    fn description() -> &'static str {
        "Player to move matches the marker counts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_holds() {
        let mut game = GameState::new();
        assert!(TurnConsistentInvariant::holds(&game));
        game.place_marker(0, 0);
        assert!(TurnConsistentInvariant::holds(&game));
        game.place_marker(2, 2);
        assert!(TurnConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut game = GameState::new();
        game.current_player = Player::O;
        assert!(!TurnConsistentInvariant::holds(&game));
    }
}
