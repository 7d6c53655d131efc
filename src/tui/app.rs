//! Application state for the terminal front end.

use derive_getters::Getters;
use ratatui::layout::Rect;
use tap_tac_toe_rules::{DisplayList, Scene, SceneGeometry, TapOutcome};
use tracing::{debug, info, instrument};

use super::input::{COLUMNS_PER_PIXEL, Input};
use crate::config::Palette;

/// Where each part of the screen goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Area covered by the board surface.
    pub board: Rect,
    /// Status line below the board.
    pub status: Rect,
    /// Key help on the last row.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the play area and the help row.
    fn split(area: Rect) -> (Rect, Rect) {
        let help_rows = area.height.min(1);
        let play = Rect::new(area.x, area.y, area.width, area.height - help_rows);
        let help = Rect::new(area.x, area.y + play.height, area.width, help_rows);
        (play, help)
    }

    /// Places the fitted board, centred horizontally, with the status band under it.
    fn place(play: Rect, help: Rect, geometry: &SceneGeometry, status_rows: u16) -> Self {
        let board_rows = (geometry.size().floor() as u16).min(play.height);
        let board_cols = board_rows
            .saturating_mul(COLUMNS_PER_PIXEL)
            .min(play.width);
        let board = Rect::new(
            play.x + (play.width - board_cols) / 2,
            play.y,
            board_cols,
            board_rows,
        );
        let status = Rect::new(
            play.x,
            play.y + board_rows,
            play.width,
            status_rows.min(play.height - board_rows),
        );
        Self {
            board,
            status,
            help,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    scene: Scene,
    display: DisplayList,
    palette: Palette,
    status_rows: u16,
    layout: ScreenLayout,
    should_quit: bool,
}

impl App {
    /// Creates the application for a terminal of size `area`.
    #[instrument(skip(palette))]
    pub fn new(area: Rect, palette: Palette, status_rows: u16) -> Self {
        let mut app = Self {
            scene: Scene::new(SceneGeometry::fit(0.0, 0.0, f32::from(status_rows))),
            display: DisplayList::new(),
            palette,
            status_rows,
            layout: ScreenLayout::default(),
            should_quit: false,
        };
        app.resize(area);
        app
    }

    /// Re-fits the scene to a terminal of size `area`.
    #[instrument(skip(self))]
    pub fn resize(&mut self, area: Rect) {
        let (play, help) = ScreenLayout::split(area);
        // Surface dimensions are whole pixels.
        self.scene.resize(
            f32::from(play.width / COLUMNS_PER_PIXEL),
            f32::from(play.height),
            f32::from(self.status_rows),
            &mut self.display,
        );
        self.layout = ScreenLayout::place(play, help, self.scene.geometry(), self.status_rows);
        debug!(layout = ?self.layout, "Screen layout updated");
    }

    /// Handles one input; returns what it did to the game, if anything.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Option<TapOutcome> {
        match input {
            Input::Tap { x, y } => Some(self.scene.tap(x, y, &mut self.display)),
            Input::Select(coord) => Some(self.scene.select(coord, &mut self.display)),
            Input::Resize { width, height } => {
                self.resize(Rect::new(0, 0, width, height));
                None
            }
            Input::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                None
            }
        }
    }
}
