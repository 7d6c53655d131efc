//! Scene geometry: where the grid sits on the drawing surface.
//!
//! The board is a square of side `min(width, height - status_band)` anchored
//! at the surface origin, split into three equal cells per axis. The band
//! below the board holds the status line.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::position::Coord;
use crate::rules::WinLine;

/// Height reserved below the board for the status line, in surface pixels.
pub const DEFAULT_STATUS_BAND: f32 = 60.0;
/// Grid stroke width.
pub const GRID_STROKE: f32 = 4.0;
/// Strike-through stroke width.
pub const STRIKE_STROKE: f32 = 6.0;
/// Marker size as a fraction of the cell size.
pub const MARKER_SCALE: f32 = 0.8;
/// Gap between the board and the status line.
pub const STATUS_GAP: f32 = 10.0;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Point {
    /// Horizontal offset from the surface origin.
    pub x: f32,
    /// Vertical offset from the surface origin, growing downwards.
    pub y: f32,
}

/// A straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct Segment {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
}

/// Layout of the board on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct SceneGeometry {
    /// Surface width.
    width: f32,
    /// Surface height.
    height: f32,
    /// Side of the square board.
    size: f32,
    /// Side of one cell.
    cell_size: f32,
}

impl SceneGeometry {
    /// Fits the board into a `width` x `height` surface, leaving
    /// `status_band` below it for the status line.
    #[instrument]
    pub fn fit(width: f32, height: f32, status_band: f32) -> Self {
        let size = width.min(height - status_band).max(0.0);
        let cell_size = size / 3.0;
        debug!(size, cell_size, "Fitted board to surface");
        Self {
            width,
            height,
            size,
            cell_size,
        }
    }

    /// Translates a pointer position into a board cell.
    ///
    /// Coordinates are divided by the cell size and floored; anything that
    /// lands outside the 3x3 area yields `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Coord> {
        if self.cell_size <= 0.0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let col = (x / self.cell_size).floor();
        let row = (y / self.cell_size).floor();
        if !(0.0..3.0).contains(&col) || !(0.0..3.0).contains(&row) {
            return None;
        }
        Coord::new(row as usize, col as usize)
    }

    /// Centre of a cell.
    pub fn cell_center(&self, coord: Coord) -> Point {
        let half = self.cell_size / 2.0;
        Point::new(
            coord.col() as f32 * self.cell_size + half,
            coord.row() as f32 * self.cell_size + half,
        )
    }

    /// The four inner grid lines: two vertical, then two horizontal.
    pub fn grid_lines(&self) -> [Segment; 4] {
        let at = |i: f32| i * self.cell_size;
        [
            Segment::new(Point::new(at(1.0), 0.0), Point::new(at(1.0), self.size)),
            Segment::new(Point::new(at(2.0), 0.0), Point::new(at(2.0), self.size)),
            Segment::new(Point::new(0.0, at(1.0)), Point::new(self.size, at(1.0))),
            Segment::new(Point::new(0.0, at(2.0)), Point::new(self.size, at(2.0))),
        ]
    }

    /// Stroke through the centres of a winning line's end cells.
    pub fn strike_through(&self, line: &WinLine) -> Segment {
        Segment::new(self.cell_center(line.start()), self.cell_center(line.end()))
    }

    /// Marker glyph size.
    pub fn marker_size(&self) -> f32 {
        self.cell_size * MARKER_SCALE
    }

    /// Top-centre anchor of the status line.
    pub fn status_anchor(&self) -> Point {
        Point::new(self.width / 2.0, self.size + STATUS_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LineKind;

    #[test]
    fn test_fit_uses_smaller_axis() {
        let wide = SceneGeometry::fit(800.0, 660.0, DEFAULT_STATUS_BAND);
        assert_eq!(*wide.size(), 600.0);
        assert_eq!(*wide.cell_size(), 200.0);

        let tall = SceneGeometry::fit(300.0, 900.0, DEFAULT_STATUS_BAND);
        assert_eq!(*tall.size(), 300.0);
        assert_eq!(*tall.cell_size(), 100.0);
    }

    #[test]
    fn test_fit_never_negative() {
        let tiny = SceneGeometry::fit(100.0, 20.0, DEFAULT_STATUS_BAND);
        assert_eq!(*tiny.size(), 0.0);
        assert_eq!(tiny.cell_at(0.0, 0.0), None);
    }

    #[test]
    fn test_cell_at_floors() {
        let geometry = SceneGeometry::fit(300.0, 360.0, DEFAULT_STATUS_BAND);
        assert_eq!(geometry.cell_at(0.0, 0.0), Some(Coord::TOP_LEFT));
        assert_eq!(geometry.cell_at(99.9, 99.9), Some(Coord::TOP_LEFT));
        assert_eq!(geometry.cell_at(100.0, 150.0), Some(Coord::CENTER));
        assert_eq!(geometry.cell_at(299.0, 299.0), Some(Coord::BOTTOM_RIGHT));
    }

    #[test]
    fn test_cell_at_rejects_outside() {
        let geometry = SceneGeometry::fit(300.0, 360.0, DEFAULT_STATUS_BAND);
        assert_eq!(geometry.cell_at(-1.0, 10.0), None);
        assert_eq!(geometry.cell_at(10.0, -0.5), None);
        assert_eq!(geometry.cell_at(300.0, 10.0), None);
        // The status band is not part of the board.
        assert_eq!(geometry.cell_at(150.0, 320.0), None);
        assert_eq!(geometry.cell_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn test_centers_and_strike() {
        let geometry = SceneGeometry::fit(300.0, 360.0, DEFAULT_STATUS_BAND);
        assert_eq!(geometry.cell_center(Coord::CENTER), Point::new(150.0, 150.0));

        let line = WinLine::from_kind(LineKind::AntiDiagonal).unwrap();
        let strike = geometry.strike_through(&line);
        assert_eq!(strike.from, Point::new(250.0, 50.0));
        assert_eq!(strike.to, Point::new(50.0, 250.0));
    }

    #[test]
    fn test_grid_lines() {
        let geometry = SceneGeometry::fit(300.0, 360.0, DEFAULT_STATUS_BAND);
        let lines = geometry.grid_lines();
        assert_eq!(lines[0], Segment::new(Point::new(100.0, 0.0), Point::new(100.0, 300.0)));
        assert_eq!(lines[3], Segment::new(Point::new(0.0, 200.0), Point::new(300.0, 200.0)));
        assert_eq!(geometry.marker_size(), 80.0);
        assert_eq!(geometry.status_anchor(), Point::new(150.0, 310.0));
    }
}
