//! Win detection logic for tic-tac-toe.

use std::fmt;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::position::Coord;
use crate::types::{Board, Cell, Player};

/// Which kind of line three aligned cells form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LineKind {
    /// A full row, by row index.
    #[display("row {_0}")]
    Row(usize),
    /// A full column, by column index.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// All 8 lines in scan order: rows, columns, main diagonal, anti-diagonal.
    pub const SCAN_ORDER: [LineKind; 8] = [
        LineKind::Row(0),
        LineKind::Row(1),
        LineKind::Row(2),
        LineKind::Column(0),
        LineKind::Column(1),
        LineKind::Column(2),
        LineKind::MainDiagonal,
        LineKind::AntiDiagonal,
    ];

    /// The three cells of this line, from start to end.
    ///
    /// `None` when a row or column index is off the board.
    pub fn cells(self) -> Option<[Coord; 3]> {
        let cells = match self {
            LineKind::Row(i) => [Coord::new(i, 0)?, Coord::new(i, 1)?, Coord::new(i, 2)?],
            LineKind::Column(j) => [Coord::new(0, j)?, Coord::new(1, j)?, Coord::new(2, j)?],
            LineKind::MainDiagonal => [Coord::TOP_LEFT, Coord::CENTER, Coord::BOTTOM_RIGHT],
            LineKind::AntiDiagonal => [Coord::TOP_RIGHT, Coord::CENTER, Coord::BOTTOM_LEFT],
        };
        Some(cells)
    }
}

/// A [`LineKind`] whose index is off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("{kind} is not a line on the board")]
pub struct InvalidLine {
    /// The rejected line.
    pub kind: LineKind,
}

/// A complete line on the board: its kind and the three cells it covers.
///
/// Only built from a [`LineKind`] that lies on the board; serialized as the
/// kind alone and re-validated when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LineKind", into = "LineKind")]
pub struct WinLine {
    kind: LineKind,
    cells: [Coord; 3],
}

impl WinLine {
    /// Builds the line for the given kind, or `None` if it is off the board.
    pub fn from_kind(kind: LineKind) -> Option<Self> {
        kind.cells().map(|cells| Self { kind, cells })
    }

    /// First cell of the line.
    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    /// Last cell of the line.
    pub fn end(&self) -> Coord {
        self.cells[2]
    }

    /// Kind of line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three aligned cells.
    pub fn cells(&self) -> [Coord; 3] {
        self.cells
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.start(), self.end())
    }
}

impl TryFrom<LineKind> for WinLine {
    type Error = InvalidLine;

    fn try_from(kind: LineKind) -> Result<Self, Self::Error> {
        Self::from_kind(kind).ok_or(InvalidLine { kind })
    }
}

impl From<WinLine> for LineKind {
    fn from(line: WinLine) -> Self {
        line.kind
    }
}

/// Finds the first line fully held by `player`.
///
/// Lines are scanned rows first, then columns, then the main diagonal,
/// then the anti-diagonal. Returns `None` if no line matches.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinLine> {
    LineKind::SCAN_ORDER
        .into_iter()
        .filter_map(WinLine::from_kind)
        .find(|line| {
            line.cells()
                .iter()
                .all(|coord| board.get(*coord) == Cell::Occupied(player))
        })
}

/// Checks if either player holds a complete line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<(Player, WinLine)> {
    Player::iter().find_map(|player| find_winning_line(board, player).map(|line| (player, line)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, coords: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in coords {
            board.set(Coord::new(row, col).unwrap(), Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(find_winning_line(&board, Player::X), None);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(Player::X, &[(0, 0), (0, 1), (0, 2)]);
        let line = find_winning_line(&board, Player::X).unwrap();
        assert_eq!(line.start(), Coord::TOP_LEFT);
        assert_eq!(line.end(), Coord::TOP_RIGHT);
        assert_eq!(line.kind(), LineKind::Row(0));
        assert_eq!(find_winning_line(&board, Player::O), None);
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(Player::O, &[(0, 1), (1, 1), (2, 1)]);
        let line = find_winning_line(&board, Player::O).unwrap();
        assert_eq!(line.start(), Coord::new(0, 1).unwrap());
        assert_eq!(line.end(), Coord::new(2, 1).unwrap());
    }

    #[test]
    fn test_winner_diagonals() {
        let main = board_with(Player::O, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(
            find_winning_line(&main, Player::O).map(|l| (l.start(), l.end())),
            Some((Coord::TOP_LEFT, Coord::BOTTOM_RIGHT))
        );

        let anti = board_with(Player::X, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(
            find_winning_line(&anti, Player::X).map(|l| (l.start(), l.end())),
            Some((Coord::TOP_RIGHT, Coord::BOTTOM_LEFT))
        );
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Top row and left column both complete.
        let board = board_with(Player::X, &[(0, 0), (0, 1), (0, 2), (1, 0), (2, 0)]);
        let line = find_winning_line(&board, Player::X).unwrap();
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_columns_scanned_before_diagonals() {
        let board = board_with(Player::X, &[(0, 0), (1, 0), (2, 0), (1, 1), (2, 2)]);
        let line = find_winning_line(&board, Player::X).unwrap();
        assert_eq!(line.kind(), LineKind::Column(0));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[(0, 0), (0, 1)]);
        assert_eq!(find_winning_line(&board, Player::X), None);
    }

    #[test]
    fn test_line_display() {
        let line = WinLine::from_kind(LineKind::Column(2)).unwrap();
        assert_eq!(line.to_string(), "column 2 (0, 2) -> (2, 2)");
    }

    #[test]
    fn test_off_board_lines_rejected() {
        assert_eq!(LineKind::Row(5).cells(), None);
        assert_eq!(LineKind::Column(3).cells(), None);
        assert_eq!(WinLine::from_kind(LineKind::Row(5)), None);
        assert_eq!(
            WinLine::try_from(LineKind::Column(3)),
            Err(InvalidLine {
                kind: LineKind::Column(3)
            })
        );
        assert!(
            LineKind::SCAN_ORDER
                .iter()
                .all(|kind| WinLine::from_kind(*kind).is_some())
        );
    }

    #[test]
    fn test_line_serializes_as_kind() {
        let line = WinLine::from_kind(LineKind::AntiDiagonal).unwrap();
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#""AntiDiagonal""#);
        assert_eq!(serde_json::from_str::<WinLine>(&json).unwrap(), line);
    }

    #[test]
    fn test_off_board_line_does_not_deserialize() {
        assert!(serde_json::from_str::<WinLine>(r#"{"Row":5}"#).is_err());
        assert!(serde_json::from_str::<WinLine>(r#"{"Column":3}"#).is_err());
        assert_eq!(
            serde_json::from_str::<WinLine>(r#"{"Row":2}"#).unwrap().end(),
            Coord::BOTTOM_RIGHT
        );
    }
}
