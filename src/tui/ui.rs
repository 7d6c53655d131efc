//! Stateless rendering of the retained display.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line},
    },
};
use tap_tac_toe_rules::{DisplayList, MarkerShape, Player, Point, Segment};

use super::app::App;
use crate::config::Palette;

const HELP: &str = "Click a cell or press 1-9 | Click after the game to restart | Q: Quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();
    let size = f64::from(*app.scene().geometry().size());

    if layout.board.area() > 0 {
        draw_board(frame, layout.board, size, app.display(), app.palette());
    }

    if layout.status.height > 0 {
        let block = if layout.status.height >= 3 {
            Block::default().borders(Borders::ALL)
        } else {
            Block::default()
        };
        let status = Paragraph::new(app.display().status().as_str())
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(status, layout.status);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, area: Rect, size: f64, display: &DisplayList, palette: &Palette) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, size])
        .y_bounds([0.0, size])
        .paint(|ctx| {
            for segment in display.grid() {
                stroke(ctx, size, segment, palette.grid);
            }
            for marker in display.markers() {
                draw_marker(ctx, size, marker, palette);
            }
            if let Some(strike) = display.strike() {
                ctx.layer();
                stroke(ctx, size, strike, palette.strike);
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_marker(ctx: &mut Context<'_>, size: f64, marker: &MarkerShape, palette: &Palette) {
    let Point { x, y } = *marker.center();
    let half = *marker.size() / 2.0;
    match marker.player() {
        Player::X => {
            let color = palette.x;
            let a = Segment::new(Point::new(x - half, y - half), Point::new(x + half, y + half));
            let b = Segment::new(Point::new(x + half, y - half), Point::new(x - half, y + half));
            stroke(ctx, size, &a, color);
            stroke(ctx, size, &b, color);
        }
        Player::O => ctx.draw(&Circle {
            x: f64::from(x),
            y: size - f64::from(y),
            radius: f64::from(half),
            color: palette.o,
        }),
    }
}

/// Canvas y grows upwards; surface y grows downwards.
fn stroke(ctx: &mut Context<'_>, size: f64, segment: &Segment, color: Color) {
    ctx.draw(&Line::new(
        f64::from(segment.from.x),
        size - f64::from(segment.from.y),
        f64::from(segment.to.x),
        size - f64::from(segment.to.y),
        color,
    ));
}
