//! Terminal front end: mouse and keypad input, ratatui drawing.

mod app;
pub mod input;
mod ui;

pub use app::{App, ScreenLayout};
pub use input::{Input, map_event};

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, error, info, instrument};

use crate::config::AppConfig;

/// How long to wait for an event before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Runs the game in the current terminal until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all)]
pub fn run(config: &AppConfig) -> Result<()> {
    let palette = config.display().palette()?;

    info!("Starting terminal UI");
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = terminal
        .size()
        .map_err(anyhow::Error::from)
        .and_then(|size| {
            let area = Rect::new(0, 0, size.width, size.height);
            let mut app = App::new(area, palette, *config.display().status_rows());
            run_loop(&mut terminal, &mut app)
        });

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draw, wait for one event, apply it; repeat.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if *app.should_quit() {
            info!("Leaving terminal UI");
            return Ok(());
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let event = event::read()?;
        if let Some(input) = map_event(&event, app.layout().board)
            && let Some(outcome) = app.handle(input)
        {
            debug!(%outcome, "Input handled");
        }
    }
}
