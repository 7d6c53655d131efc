//! Pure tic-tac-toe logic for a tap-driven scene.
//!
//! # Architecture
//!
//! - **Game**: [`GameState`] owns the board and applies placements and resets
//! - **Rules**: win and draw detection as pure functions over a [`Board`]
//! - **Invariants**: properties checked after every placement
//! - **Geometry**: fitting the 3x3 grid onto a drawing surface
//! - **Scene**: pointer taps in, [`RenderCommand`]s out
//!
//! Nothing here draws or reads input; front ends implement [`Renderer`].
//!
//! # Example
//!
//! ```
//! use tap_tac_toe_rules::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.place_marker(row, col);
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//! assert_eq!(game.status_message(), "Player X wins! Tap to restart");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod geometry;
mod position;
mod render;
mod scene;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use game::{GameState, Ignored, InvalidGameState, MarkerPlaced, Placement};
pub use geometry::{
    DEFAULT_STATUS_BAND, GRID_STROKE, MARKER_SCALE, Point, STATUS_GAP, STRIKE_STROKE,
    SceneGeometry, Segment,
};
pub use position::{Coord, ParseCoordError};
pub use render::{DisplayList, MarkerShape, RenderCommand, Renderer};
pub use rules::{InvalidLine, LineKind, WinLine};
pub use scene::{Scene, TapOutcome};
pub use status::GameStatus;
pub use types::{Board, Cell, Player};
