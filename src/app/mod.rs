//! Application event loop and state.
//!
//! `App` owns the terminal loop; all keyboard handling lives on
//! [`AppState`] in the `state` submodule so it can be driven in tests
//! without a terminal.

mod state;

// Re-export state types for external use
pub use state::{AppState, StatusKind, StatusLine};

use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;
use tracing::info;

use crate::error::Result;
use crate::mapping_file::Descriptions;
use crate::predictor::Predictor;
use crate::session::QuestionnaireMode;
use crate::ui::UiRenderer;

/// How long one event poll waits before redrawing
const TICK_RATE: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance
    pub fn new(mode: QuestionnaireMode, predictor: Predictor, descriptions: Descriptions) -> Self {
        info!(
            %mode,
            classifier = predictor.classifier_name(),
            "Creating new App instance"
        );
        Self {
            state: AppState::new(mode, predictor, descriptions),
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Get reference to the application state
    #[allow(dead_code)] // API method available for future use
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        info!("Starting main application loop");

        loop {
            // Handle input events
            if event::poll(TICK_RATE)? {
                if let Event::Key(key_event) = event::read()? {
                    if self.state.handle_key_event(key_event)? {
                        break; // Exit requested
                    }
                }
            }

            // Render UI
            terminal.draw(|f| {
                self.ui_renderer.render(f, &self.state);
            })?;
        }

        info!("Application loop ended");
        Ok(())
    }
}
