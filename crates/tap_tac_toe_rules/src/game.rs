//! The game state and its transitions.
//!
//! [`GameState`] is the single owner of the board, the player to move and the
//! status. The only mutations are [`GameState::place_marker`] and
//! [`GameState::reset`]; both are synchronous and return everything a renderer
//! needs, so the logic is testable without a drawing surface.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Coord;
use crate::rules;
use crate::status::GameStatus;
use crate::types::{Board, Cell, Player};

/// Why a placement was ignored.
///
/// These are guard conditions, not failures: a pointer handler sees repeated
/// taps and must be able to drop them without ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Ignored {
    /// The game already ended.
    #[display("Game is already over")]
    GameOver,
    /// The requested cell does not exist.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The requested cell already holds a marker.
    #[display("Cell {_0} is already occupied")]
    Occupied(Coord),
}

/// A marker that was placed, with the status it produced.
///
/// Only [`GameState::place_marker`] produces one:
///
/// ```compile_fail
/// use tap_tac_toe_rules::{Coord, GameStatus, MarkerPlaced, Player};
///
/// let forged = MarkerPlaced::new(Coord::CENTER, Player::X, GameStatus::InProgress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct MarkerPlaced {
    /// Where the marker went.
    coord: Coord,
    /// Who placed it.
    player: Player,
    /// Status after the placement.
    status: GameStatus,
}

impl MarkerPlaced {
    pub(crate) fn new(coord: Coord, player: Player, status: GameStatus) -> Self {
        Self {
            coord,
            player,
            status,
        }
    }
}

/// Result of [`GameState::place_marker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The marker was placed.
    Placed(MarkerPlaced),
    /// A guard rejected the placement; the state is unchanged.
    Ignored(Ignored),
}

impl Placement {
    /// Returns the placed marker, if any.
    pub fn placed(&self) -> Option<&MarkerPlaced> {
        match self {
            Placement::Placed(placed) => Some(placed),
            Placement::Ignored(_) => None,
        }
    }
}

/// A deserialized game whose parts contradict each other.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Inconsistent game state: {}", description)]
pub struct InvalidGameState {
    /// The violated invariants, joined.
    pub description: String,
}

/// Complete game state.
///
/// Deserialized snapshots must satisfy [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self), fields(previous = ?self.status))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Places the current player's marker at `(row, col)`.
    ///
    /// Ignored without touching the state when the game is over, the cell is
    /// off the board, or the cell is occupied. Otherwise the marker is placed
    /// and the status re-evaluated: a completed line wins, a full board draws,
    /// anything else passes the turn.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_marker(&mut self, row: usize, col: usize) -> Placement {
        if self.status.is_terminal() {
            debug!("Ignoring placement after game end");
            return Placement::Ignored(Ignored::GameOver);
        }

        let Some(coord) = Coord::new(row, col) else {
            debug!("Ignoring placement off the board");
            return Placement::Ignored(Ignored::OutOfRange { row, col });
        };

        if !self.board.is_empty(coord) {
            debug!(%coord, "Ignoring placement on occupied cell");
            return Placement::Ignored(Ignored::Occupied(coord));
        }

        let player = self.current_player;
        self.board.set(coord, Cell::Occupied(player));

        if let Some(line) = self.find_winning_line(player) {
            info!(%line, "Player completed a line");
            self.status = GameStatus::Won { player, line };
        } else if rules::is_full(&self.board) {
            info!("Board full, game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.opponent();
        }

        self.check_invariants();

        Placement::Placed(MarkerPlaced::new(coord, player, self.status))
    }

    /// Finds the first complete line held by `player`.
    ///
    /// See [`rules::find_winning_line`] for the scan order.
    pub fn find_winning_line(&self, player: Player) -> Option<rules::WinLine> {
        rules::find_winning_line(&self.board, player)
    }

    /// Status line text for the current state.
    pub fn status_message(&self) -> String {
        self.status.message(self.current_player)
    }

    fn check_invariants(&self) {
        if let Err(violations) = GameInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Game invariant violated");
            }
            debug_assert!(violations.is_empty(), "Game invariants violated: {:?}", violations);
        }
    }
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct GameSnapshot {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = InvalidGameState;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let state = Self {
            board: snapshot.board,
            current_player: snapshot.current_player,
            status: snapshot.status,
        };
        GameInvariants::check_all(&state).map_err(|violations| InvalidGameState {
            description: violations
                .iter()
                .map(|violation| violation.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        })?;
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
