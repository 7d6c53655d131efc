//! Game status and the status line shown to players.

use serde::{Deserialize, Serialize};

use crate::rules::WinLine;
use crate::types::Player;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// The winner.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board filled with no winner.
    Draw,
}

impl GameStatus {
    /// Won and Draw are terminal: no moves are accepted until reset.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Status line text, given the player whose turn it is.
    pub fn message(&self, to_move: Player) -> String {
        match self {
            GameStatus::InProgress => format!("Player {}'s turn", to_move),
            GameStatus::Won { player, .. } => format!("Player {} wins! Tap to restart", player),
            GameStatus::Draw => "It's a draw! Tap to restart".to_string(),
        }
    }
}
