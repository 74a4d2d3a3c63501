//! Interactive full-screen renderer.
//!
//! Owns the terminal and the event loop. Each key goes to the [`App`] router,
//! which returns an engine action; actions run to completion on the caller's
//! runtime before the next frame is drawn.

mod app;

use anyhow::Result;
use blogdeck_client::PostsApi;
use blogdeck_engine::ViewController;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::runtime::Runtime;

use app::{hits_network, App, Signal};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
        }
    }

    pub fn run<A: PostsApi>(&self, runtime: &Runtime, controller: &mut ViewController<A>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, runtime, controller);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<A: PostsApi>(
        &self,
        terminal: &mut Term,
        runtime: &Runtime,
        controller: &mut ViewController<A>,
    ) -> Result<()> {
        let mut app = App::new();

        loop {
            terminal.draw(|f| app.draw(f, controller, false))?;

            if !event::poll(self.tick_rate)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.handle_key(key, controller) {
                Some(Signal::Quit) => return Ok(()),
                Some(Signal::Dispatch(action)) => {
                    tracing::debug!(?action, mode = controller.mode().as_str(), "dispatch");
                    controller.clear_notice();
                    if hits_network(&action) {
                        terminal.draw(|f| app.draw(f, controller, true))?;
                    }
                    runtime.block_on(controller.dispatch(action));
                }
                None => {}
            }
        }
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}
