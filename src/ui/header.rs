//! Banner and title rendering shared by every screen.

use crate::theme::Colors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the banner block at the top of each screen.
pub struct HeaderRenderer {
    /// Pre-built banner lines, rendered on every frame
    header_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            header_lines: Self::create_header(),
        }
    }

    /// Draw the banner into the given area.
    pub fn render_header(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(self.header_lines.clone())
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }

    /// Draw a bordered screen title below the banner.
    pub fn render_title(&self, f: &mut Frame, area: Rect, title: &str) {
        let title_widget = Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    fn create_header() -> Vec<Line<'static>> {
        vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "╔═╗┌─┐┬─┐┌─┐┌─┐┌┐┌┌─┐ ╔╦╗╦ ╦╦",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "╠═╝├┤ ├┬┘└─┐│ ││││├─┤  ║ ║ ║║",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(vec![Span::styled(
                "╩  └─┘┴└─└─┘└─┘┘└┘┴ ┴  ╩ ╚═╝╩",
                Style::default().fg(Colors::PRIMARY),
            )]),
            Line::from(""),
            Line::from(vec![Span::styled(
                "Myers-Briggs personality questionnaire for the terminal",
                Style::default().fg(Colors::FG_SECONDARY),
            )]),
        ]
    }
}
