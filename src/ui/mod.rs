//! Terminal rendering.
//!
//! Split into `header` (banner and titles) and `screens` (one render
//! function per wizard phase). [`UiRenderer`] picks the screen for the
//! current phase.

mod header;
pub mod screens;

use ratatui::Frame;

use crate::app::AppState;
use crate::wizard::WizardPhase;

// Re-export for external use
pub use header::HeaderRenderer;

/// Entry point for drawing a frame; delegates to the screen function
/// for the active wizard phase.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Draw the whole frame for the current state.
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let area = f.area();
        match state.wizard.phase() {
            WizardPhase::Intro => screens::render_intro_screen(f, state, area, &self.header),
            WizardPhase::Collecting(step) => {
                screens::render_step_screen(f, state, step, area, &self.header)
            }
            WizardPhase::Result => screens::render_result_screen(f, state, area, &self.header),
        }
    }
}
