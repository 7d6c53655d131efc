//! Headless play: apply a fixed list of moves and report the result.

use tap_tac_toe_rules::{Coord, GameState, Placement};
use tracing::{info, instrument, warn};

/// Plays `moves` in order, X first, and renders the final board and status.
///
/// Moves the game ignores (occupied cells, moves after the game ended) are
/// reported inline and skipped.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn run_script(moves: &[Coord]) -> String {
    let mut game = GameState::new();
    let mut report = String::new();

    for (turn, coord) in moves.iter().enumerate() {
        match game.place_marker(coord.row(), coord.col()) {
            Placement::Placed(placed) => {
                info!(turn, %coord, player = %placed.player(), "Move applied");
            }
            Placement::Ignored(reason) => {
                warn!(turn, %coord, %reason, "Move ignored");
                report.push_str(&format!("move {} {}: {}\n", turn + 1, coord, reason));
            }
        }
    }

    report.push_str(&game.board().display());
    report.push_str("\n\n");
    report.push_str(&game.status_message());
    report
}
