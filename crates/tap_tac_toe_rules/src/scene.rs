//! The tic-tac-toe scene: pointer taps in, render instructions out.
//!
//! A [`Scene`] owns the one [`GameState`] and the [`SceneGeometry`] it is
//! drawn with. Each tap is handled start to finish (guards, mutation,
//! evaluation, render dispatch) before the call returns.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::game::{GameState, Ignored, MarkerPlaced, Placement};
use crate::geometry::SceneGeometry;
use crate::position::Coord;
use crate::render::{RenderCommand, Renderer};
use crate::status::GameStatus;
use crate::types::Player;

/// What a tap did to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// A marker was placed.
    Placed(MarkerPlaced),
    /// The game was over, so the tap restarted it.
    Restarted,
    /// The tap missed the board.
    OutsideBoard,
    /// The tap hit the board but the game ignored it.
    Ignored(Ignored),
}

impl fmt::Display for TapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TapOutcome::Placed(placed) => {
                write!(f, "placed {} at {}", placed.player(), placed.coord())
            }
            TapOutcome::Restarted => write!(f, "restarted"),
            TapOutcome::OutsideBoard => write!(f, "outside board"),
            TapOutcome::Ignored(reason) => write!(f, "ignored: {}", reason),
        }
    }
}

/// Scene controller for a single game.
#[derive(Debug, Clone)]
pub struct Scene {
    game: GameState,
    geometry: SceneGeometry,
}

impl Scene {
    /// Creates a scene with a fresh game laid out on `geometry`.
    #[instrument]
    pub fn new(geometry: SceneGeometry) -> Self {
        Self {
            game: GameState::new(),
            geometry,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Current layout.
    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    /// Draws the empty scene: clears markers, draws the grid, shows whose turn it is.
    #[instrument(skip_all)]
    pub fn start(&self, renderer: &mut impl Renderer) {
        renderer.apply(&RenderCommand::Clear);
        renderer.apply(&RenderCommand::Grid(self.geometry.grid_lines().to_vec()));
        renderer.apply(&RenderCommand::Status(self.game.status_message()));
    }

    /// Handles a pointer tap at surface coordinates `(x, y)`.
    ///
    /// Any tap on a finished game restarts it. Otherwise the tap is mapped to
    /// a cell and the current player's marker placed there; taps that miss
    /// the board or hit an occupied cell draw nothing.
    #[instrument(skip(self, renderer))]
    pub fn tap(&mut self, x: f32, y: f32, renderer: &mut impl Renderer) -> TapOutcome {
        if self.game.status().is_terminal() {
            return self.restart(renderer);
        }
        let Some(coord) = self.geometry.cell_at(x, y) else {
            debug!("Tap outside board");
            return TapOutcome::OutsideBoard;
        };
        self.place(coord, renderer)
    }

    /// Handles a direct cell selection, equivalent to tapping its centre.
    #[instrument(skip(self, renderer))]
    pub fn select(&mut self, coord: Coord, renderer: &mut impl Renderer) -> TapOutcome {
        if self.game.status().is_terminal() {
            return self.restart(renderer);
        }
        self.place(coord, renderer)
    }

    /// Re-fits the scene to a new surface and redraws everything on it.
    ///
    /// The game itself is untouched.
    #[instrument(skip(self, renderer))]
    pub fn resize(&mut self, width: f32, height: f32, status_band: f32, renderer: &mut impl Renderer) {
        self.geometry = SceneGeometry::fit(width, height, status_band);
        self.start(renderer);
        for (coord, cell) in self.game.board().iter() {
            if let Some(player) = cell.player() {
                renderer.apply(&self.marker_command(coord, player));
            }
        }
        if let Some(line) = self.game.status().win_line() {
            renderer.apply(&RenderCommand::StrikeThrough(self.geometry.strike_through(&line)));
        }
    }

    fn restart(&mut self, renderer: &mut impl Renderer) -> TapOutcome {
        info!("Restarting after game end");
        self.game.reset();
        self.start(renderer);
        TapOutcome::Restarted
    }

    fn place(&mut self, coord: Coord, renderer: &mut impl Renderer) -> TapOutcome {
        match self.game.place_marker(coord.row(), coord.col()) {
            Placement::Ignored(reason) => {
                debug!(%reason, "Tap ignored");
                TapOutcome::Ignored(reason)
            }
            Placement::Placed(placed) => {
                renderer.apply(&self.marker_command(*placed.coord(), *placed.player()));
                if let GameStatus::Won { line, .. } = placed.status() {
                    renderer.apply(&RenderCommand::StrikeThrough(
                        self.geometry.strike_through(line),
                    ));
                }
                renderer.apply(&RenderCommand::Status(self.game.status_message()));
                TapOutcome::Placed(placed)
            }
        }
    }

    fn marker_command(&self, coord: Coord, player: Player) -> RenderCommand {
        RenderCommand::Marker {
            coord,
            player,
            center: self.geometry.cell_center(coord),
            size: self.geometry.marker_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::DEFAULT_STATUS_BAND;

    fn scene() -> Scene {
        Scene::new(SceneGeometry::fit(300.0, 360.0, DEFAULT_STATUS_BAND))
    }

    #[test]
    fn test_start_draws_grid_and_status() {
        let mut commands: Vec<RenderCommand> = Vec::new();
        scene().start(&mut commands);
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], RenderCommand::Clear);
        assert!(matches!(&commands[1], RenderCommand::Grid(lines) if lines.len() == 4));
        assert_eq!(commands[2], RenderCommand::Status("Player X's turn".to_string()));
    }

    #[test]
    fn test_tap_places_marker_and_updates_status() {
        let mut scene = scene();
        let mut commands: Vec<RenderCommand> = Vec::new();
        let outcome = scene.tap(150.0, 150.0, &mut commands);

        assert!(matches!(outcome, TapOutcome::Placed(p) if *p.coord() == Coord::CENTER));
        assert_eq!(
            commands,
            vec![
                RenderCommand::Marker {
                    coord: Coord::CENTER,
                    player: Player::X,
                    center: crate::geometry::Point::new(150.0, 150.0),
                    size: 80.0,
                },
                RenderCommand::Status("Player O's turn".to_string()),
            ]
        );
    }

    #[test]
    fn test_tap_outside_board_draws_nothing() {
        let mut scene = scene();
        let mut commands: Vec<RenderCommand> = Vec::new();
        assert_eq!(scene.tap(150.0, 330.0, &mut commands), TapOutcome::OutsideBoard);
        assert!(commands.is_empty());
        assert_eq!(scene.game(), &GameState::new());
    }

    #[test]
    fn test_repeated_tap_is_ignored() {
        let mut scene = scene();
        let mut commands: Vec<RenderCommand> = Vec::new();
        scene.tap(10.0, 10.0, &mut commands);
        commands.clear();
        assert_eq!(
            scene.tap(20.0, 20.0, &mut commands),
            TapOutcome::Ignored(Ignored::Occupied(Coord::TOP_LEFT))
        );
        assert!(commands.is_empty());
    }

    #[test]
    fn test_outcome_display() {
        let mut scene = scene();
        let outcome = scene.select(Coord::CENTER, &mut Vec::<RenderCommand>::new());
        assert_eq!(outcome.to_string(), "placed X at (1, 1)");
    }
}
