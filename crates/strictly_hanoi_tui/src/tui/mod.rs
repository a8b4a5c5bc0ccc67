//! Terminal UI for Strictly Hanoi.

mod app;
mod ui;
mod viewport;

pub use app::App;
pub use viewport::Viewport;

use crate::config::AppConfig;
use crate::logging;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive puzzle until the user quits.
pub fn run(config: &AppConfig) -> Result<()> {
    // Log to a file so tracing output does not tear the screen
    logging::init_file(config.log())?;
    info!("Starting Strictly Hanoi TUI");

    let mut app = App::new(config.tower().clone()).context("Invalid starting tower")?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "TUI loop error");
        return Err(err);
    }

    info!("TUI exited");
    Ok(())
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !app.handle_key(key.code) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let field = ui::field_area(Rect::new(0, 0, size.width, size.height));
                app.handle_mouse(mouse, field);
            }
            _ => {}
        }
    }
}
