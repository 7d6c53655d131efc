//! Render instructions and the renderer seam.
//!
//! The scene never draws. It emits [`RenderCommand`]s to a [`Renderer`];
//! front ends decide how strokes and glyphs reach the screen.

use derive_getters::Getters;
use tracing::trace;

use crate::geometry::{Point, Segment};
use crate::position::Coord;
use crate::types::Player;

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Remove all markers and any strike-through.
    Clear,
    /// Draw the grid lines.
    Grid(Vec<Segment>),
    /// Draw a player's marker centred in a cell.
    Marker {
        /// The cell that changed.
        coord: Coord,
        /// The marker placed there.
        player: Player,
        /// Centre of the cell on the surface.
        center: Point,
        /// Glyph size.
        size: f32,
    },
    /// Strike through a winning line.
    StrikeThrough(Segment),
    /// Replace the status line.
    Status(String),
}

/// Consumer of render instructions.
pub trait Renderer {
    /// Applies one instruction.
    fn apply(&mut self, command: &RenderCommand);
}

impl Renderer for Vec<RenderCommand> {
    fn apply(&mut self, command: &RenderCommand) {
        self.push(command.clone());
    }
}

/// A placed marker as retained by [`DisplayList`].
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct MarkerShape {
    /// Board cell.
    coord: Coord,
    /// Marker owner.
    player: Player,
    /// Centre on the surface.
    center: Point,
    /// Glyph size.
    size: f32,
}

/// Retained display: everything currently on screen.
///
/// Front ends that redraw every frame apply commands here and paint from it.
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct DisplayList {
    grid: Vec<Segment>,
    markers: Vec<MarkerShape>,
    strike: Option<Segment>,
    status: String,
}

impl DisplayList {
    /// Creates an empty display.
    pub fn new() -> Self {
        Self::default()
    }

    /// The marker shown in a cell, if any.
    pub fn marker_at(&self, coord: Coord) -> Option<&MarkerShape> {
        self.markers.iter().find(|marker| marker.coord == coord)
    }
}

impl Renderer for DisplayList {
    fn apply(&mut self, command: &RenderCommand) {
        trace!(?command, "Applying render command");
        match command {
            RenderCommand::Clear => {
                self.markers.clear();
                self.strike = None;
            }
            RenderCommand::Grid(lines) => self.grid = lines.clone(),
            RenderCommand::Marker {
                coord,
                player,
                center,
                size,
            } => {
                self.markers.retain(|marker| marker.coord != *coord);
                self.markers.push(MarkerShape {
                    coord: *coord,
                    player: *player,
                    center: *center,
                    size: *size,
                });
            }
            RenderCommand::StrikeThrough(segment) => self.strike = Some(*segment),
            RenderCommand::Status(text) => self.status.clone_from(text),
        }
    }
}
