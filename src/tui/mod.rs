//! Terminal UI: event loop, raw-event translation, and painting.

mod input;
mod ui;
mod view;

pub use view::TuiRenderer;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::{error, info, instrument};

use crate::cli::Cli;
use crate::flow::GameFlow;
use input::KeyAction;

/// Runs the game in the terminal until the user quits.
///
/// Sets up raw mode, the alternate screen, and mouse capture, drives
/// the event loop, and restores the terminal on the way out, including
/// the error path.
pub fn run(cli: &Cli) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, Duration::from_millis(cli.tick_rate));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

/// Drives the flow machine from terminal input.
///
/// One event is translated and processed to completion per iteration;
/// the renderer is only ever painted between events.
#[instrument(skip(terminal))]
fn run_event_loop<B: Backend>(terminal: &mut Terminal<B>, poll_timeout: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut flow = GameFlow::new();
    let mut renderer = TuiRenderer::new();
    flow.start(&mut renderer);

    loop {
        terminal.draw(|frame| renderer.draw(frame))?;

        if !event::poll(poll_timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                match input::translate_key(&mut renderer, key) {
                    KeyAction::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyAction::Flow(flow_event) => flow.handle_event(flow_event, &mut renderer),
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => {
                if let Some(flow_event) = input::translate_mouse(&renderer, mouse) {
                    flow.handle_event(flow_event, &mut renderer);
                }
            }
            _ => {}
        }
    }
}
