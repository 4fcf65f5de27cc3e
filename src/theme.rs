//! Shared palette and styling for the questionnaire screens.
//!
//! Every color and reusable style lives here so the intro, question, and
//! result screens stay visually consistent. Screens compose these instead of
//! building `Style` values inline.
//!
//! # Usage
//! ```rust
//! use personatui::theme::{Styles, Theme};
//!
//! // Pre-built styles
//! let focused = Styles::focused();
//!
//! // Semantic lookups
//! let marker = Theme::step_marker(true, false);
//! assert_eq!(marker, "✓");
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette. Components pull from here, never hardcode.
pub struct Colors;

impl Colors {
    // Text
    pub const FG_PRIMARY: Color = Color::White;
    pub const FG_SECONDARY: Color = Color::Gray;
    pub const FG_MUTED: Color = Color::DarkGray;

    // Accents
    /// Borders, titles, focused inputs
    pub const PRIMARY: Color = Color::Cyan;
    /// Panel titles, emphasis
    pub const SECONDARY: Color = Color::Yellow;
    /// The predicted four-letter type
    pub const RESULT: Color = Color::Magenta;

    // Status feedback
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // Controls
    pub const BORDER_ACTIVE: Color = Color::Cyan;
    /// Highlighted list row
    pub const SELECTED_BG: Color = Color::Yellow;
    /// Row text on the yellow highlight
    pub const SELECTED_FG: Color = Color::Black;
    pub const UNSELECTED: Color = Color::Gray;
    /// Gauge and slider fill
    pub const PROGRESS: Color = Color::Green;
    /// Gauge and slider track
    pub const BG_GAUGE: Color = Color::Rgb(38, 40, 52);

    // Step tracker
    /// The step currently on screen
    pub const STEP_ACTIVE: Color = Color::Yellow;
    /// Step whose answer has been recorded
    pub const STEP_COMPLETE: Color = Color::Green;
    /// Step not yet answered
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Reusable styles for the screen widgets.
pub struct Styles;

impl Styles {
    /// Body text
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Question prompts
    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// The input currently receiving keys
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Highlighted choice row
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::UNSELECTED)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn info() -> Style {
        Style::default().fg(Colors::INFO)
    }

    /// Gauge and slider fill over the dark track
    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Key names in the hint bar and gauge labels
    pub fn progress_text() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// The predicted type on the result screen
    pub fn result_type() -> Style {
        Style::default()
            .fg(Colors::RESULT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }
}

// =============================================================================
// SEMANTIC LOOKUPS
// =============================================================================

/// State-dependent styling for the step tracker.
pub struct Theme;

impl Theme {
    pub fn step_style(recorded: bool, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else if recorded {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }

    /// Marker glyph for a step tracker entry
    pub fn step_marker(recorded: bool, active: bool) -> &'static str {
        if active {
            "▶"
        } else if recorded {
            "✓"
        } else {
            "·"
        }
    }
}

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Fixed dimensions shared across screens.
pub struct UiConstants;

impl UiConstants {
    /// ASCII art banner height
    pub const HEADER_HEIGHT: u16 = 6;

    /// Question panel width as a percentage of the frame
    pub const PANEL_WIDTH_PCT: u16 = 70;

    /// Question panel width cap on wide terminals
    pub const PANEL_MAX_WIDTH: u16 = 84;

    /// Slider bar width in cells
    pub const SLIDER_WIDTH: u16 = 42;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// User-facing strings shared between screens and key handling.
pub struct UiText;

impl UiText {
    /// Shown when predict is requested with unanswered steps
    pub const INCOMPLETE: &'static str = "Please complete all steps.";

    /// Closing line on the result screen
    pub const THANKS: &'static str = "Thank you for completing the test!";
}
