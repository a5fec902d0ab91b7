//! Application module
//!
//! Owns the wizard state and runs the event loop: poll keys, apply them,
//! expire toasts, redraw.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, LocationFocus)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, LocationFocus};

use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::draft::ListingDraft;
use crate::error::Result;
use crate::input::{InputHandler, KeyOutcome};
use crate::ui::UiRenderer;

/// How long the loop waits for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main application
pub struct App {
    state: AppState,
    input_handler: InputHandler,
    renderer: UiRenderer,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            input_handler: InputHandler::new(),
            renderer: UiRenderer::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run until the user quits; returns the draft as left
    pub fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<ListingDraft> {
        info!("Starting main application loop");

        loop {
            self.state.toasts.prune(Instant::now());

            terminal.draw(|f| {
                self.renderer
                    .render(f, &self.state, self.input_handler.keybindings())
            })?;

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        if self.input_handler.handle_key(&mut self.state, key_event)
                            == KeyOutcome::Quit
                        {
                            break;
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                    }
                    _ => {}
                }
            }
        }

        info!(step = %self.state.wizard.step(), "Main loop finished");
        Ok(self.state.wizard.into_draft())
    }
}
