//! Board coordinates.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell coordinate on the board, `row` and `col` both in `0..3`.
///
/// Construction is checked, so a `Coord` always addresses a real cell.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "CoordRepr")]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Top-left cell.
    pub const TOP_LEFT: Coord = Coord { row: 0, col: 0 };
    /// Top-right cell.
    pub const TOP_RIGHT: Coord = Coord { row: 0, col: 2 };
    /// Center cell.
    pub const CENTER: Coord = Coord { row: 1, col: 1 };
    /// Bottom-left cell.
    pub const BOTTOM_LEFT: Coord = Coord { row: 2, col: 0 };
    /// Bottom-right cell.
    pub const BOTTOM_RIGHT: Coord = Coord { row: 2, col: 2 };

    /// All 9 cells in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` when either axis is outside `0..3`.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index.
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub const fn col(self) -> usize {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub const fn to_index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates a coordinate from a row-major board index.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                row: index / 3,
                col: index % 3,
            })
        } else {
            None
        }
    }

    /// Maps a keypad digit `1`-`9` (reading order) to a coordinate.
    pub const fn from_keypad(digit: u32) -> Option<Self> {
        if digit == 0 {
            return None;
        }
        Self::from_index(digit as usize - 1)
    }
}

/// Failure to parse a coordinate from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid cell '{}': expected 'row,col' with values 0-2 or a keypad digit 1-9", input)]
pub struct ParseCoordError {
    /// The rejected input.
    pub input: String,
}

/// Unchecked wire form of a [`Coord`].
#[derive(Deserialize)]
struct CoordRepr {
    row: usize,
    col: usize,
}

impl TryFrom<CoordRepr> for Coord {
    type Error = ParseCoordError;

    fn try_from(repr: CoordRepr) -> Result<Self, Self::Error> {
        Coord::new(repr.row, repr.col).ok_or_else(|| ParseCoordError {
            input: format!("{},{}", repr.row, repr.col),
        })
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Accepts `"row,col"` or a single keypad digit.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some((row, col)) = trimmed.split_once(',') {
            let row = row.trim().parse::<usize>().map_err(|_| err())?;
            let col = col.trim().parse::<usize>().map_err(|_| err())?;
            return Coord::new(row, col).ok_or_else(err);
        }

        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Coord::from_keypad)
            .ok_or_else(err)
    }
}
