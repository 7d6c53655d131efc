//! Terminal events to game input.
//!
//! A terminal cell is one surface pixel tall and half a pixel wide, so two
//! columns make one pixel and the grid comes out roughly square.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tap_tac_toe_rules::Coord;
use tracing::trace;

/// Terminal columns per surface pixel.
pub const COLUMNS_PER_PIXEL: u16 = 2;

/// Input understood by the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Pointer tap in surface pixels relative to the board origin.
    Tap {
        /// Horizontal offset.
        x: f32,
        /// Vertical offset.
        y: f32,
    },
    /// Keypad selection of a cell.
    Select(Coord),
    /// Terminal resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// Leave the game.
    Quit,
}

/// Converts a terminal cell to surface pixels relative to `board`.
///
/// Points at the middle of the terminal cell so flooring lands in the cell
/// the user clicked.
pub fn to_surface(board: Rect, column: u16, row: u16) -> (f32, f32) {
    let x = (f32::from(column) - f32::from(board.x) + 0.5) / f32::from(COLUMNS_PER_PIXEL);
    let y = f32::from(row) - f32::from(board.y) + 0.5;
    (x, y)
}

/// Maps a crossterm event, given where the board is drawn.
pub fn map_event(event: &Event, board: Rect) -> Option<Input> {
    let input = match event {
        Event::Mouse(mouse) => map_mouse(mouse, board),
        Event::Key(key) => map_key(key),
        Event::Resize(width, height) => Some(Input::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    };
    trace!(?event, ?input, "Mapped terminal event");
    input
}

fn map_mouse(mouse: &MouseEvent, board: Rect) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let (x, y) = to_surface(board, mouse.column, mouse.row);
            Some(Input::Tap { x, y })
        }
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Input> {
    // crossterm reports both press and release on some platforms.
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
        KeyCode::Char(c) => c.to_digit(10).and_then(Coord::from_keypad).map(Input::Select),
        _ => None,
    }
}
