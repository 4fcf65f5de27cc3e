//! Questionnaire wizard screens.
//!
//! This module provides the individual screens for the questionnaire flow:
//! - `render_intro_screen` - introduction text and start hint
//! - `render_step_screen` - the current question with its input control
//! - `render_result_screen` - predicted type, description, answer summary
//!
//! Screens are pure views over [`AppState`]; all keyboard handling lives in
//! the app module.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, StatusKind};
use crate::labels::{Education, Gender, Interest};
use crate::session::{QuestionnaireMode, SubQuestion, TraitKind, AGE_MAX, AGE_MIN, SCORE_MAX};
use crate::theme::{Colors, Styles, Theme, UiConstants, UiText};
use crate::ui::HeaderRenderer;
use crate::wizard::WizardStep;

// ============================================================================
// Shared Layout Helpers
// ============================================================================

/// Center a question panel horizontally within the given area.
fn question_panel(area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(UiConstants::PANEL_WIDTH_PCT) / 100) as u16;
    let width = width
        .min(UiConstants::PANEL_MAX_WIDTH)
        .min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Render the key hints line at the bottom of a screen area.
fn render_hints(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!(" [{}] ", key), Styles::progress_text()));
        spans.push(Span::styled((*action).to_string(), Styles::text_secondary()));
    }

    let hints_widget = Paragraph::new(vec![Line::from(spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(hints_widget, area);
}

/// Render the status line (feedback message) if one is set.
fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let Some(ref status) = state.status else {
        return;
    };
    let style = match status.kind {
        StatusKind::Info => Styles::info(),
        StatusKind::Success => Styles::success(),
        StatusKind::Error => Styles::error(),
    };
    let status_widget = Paragraph::new(status.text.as_str())
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(status_widget, area);
}

// ============================================================================
// Introduction Screen
// ============================================================================

/// Render the introduction screen shown before the first question.
pub fn render_intro_screen(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(UiConstants::HEADER_HEIGHT), // ASCII art header
            Constraint::Length(3),                          // Title
            Constraint::Min(8),                             // Introduction text
            Constraint::Length(3),                          // Instructions
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "MBTI Personality Type Predictor");

    let intro_lines = vec![
        Line::from(""),
        Line::from(
            "The MBTI (Myers-Briggs Type Indicator) is a self-report questionnaire indicating",
        ),
        Line::from(
            "differing psychological preferences in how people perceive the world and make",
        ),
        Line::from(
            "decisions. The MBTI personality test classifies individuals into 16 distinct",
        ),
        Line::from("personality types based on their tendencies toward Introversion vs."),
        Line::from("Extraversion, Sensing vs. Intuition, Thinking vs. Feeling, and Judging vs."),
        Line::from("Perceiving."),
        Line::from(""),
        Line::from("This app will predict your MBTI personality type based on your inputs."),
        Line::from(""),
        Line::from(vec![Span::styled(
            mode_note(state.wizard.mode()),
            Styles::text_secondary(),
        )]),
    ];
    let intro = Paragraph::new(intro_lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(intro, question_panel(chunks[2]));

    render_hints(
        f,
        chunks[3],
        &[("Enter", "Start the test"), ("q", "Quit")],
    );
}

fn mode_note(mode: QuestionnaireMode) -> &'static str {
    match mode {
        QuestionnaireMode::Quick => "Quick questionnaire: one slider per trait.",
        QuestionnaireMode::Detailed => {
            "Detailed questionnaire: three short questions per trait."
        }
    }
}

// ============================================================================
// Question Step Screen
// ============================================================================

/// Render the screen for the current questionnaire step.
pub fn render_step_screen(
    f: &mut Frame,
    state: &AppState,
    step: WizardStep,
    area: Rect,
    header: &HeaderRenderer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(UiConstants::HEADER_HEIGHT), // ASCII art header
            Constraint::Length(3),                          // Progress gauge
            Constraint::Length(1),                          // Step tracker
            Constraint::Min(8),                             // Question panel
            Constraint::Length(1),                          // Status line
            Constraint::Length(3),                          // Instructions
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    render_progress_gauge(f, state, step, chunks[1]);
    render_step_tracker(f, state, step, chunks[2]);

    let panel = question_panel(chunks[3]);
    match step {
        WizardStep::Age => render_age_question(f, state, panel),
        WizardStep::Gender | WizardStep::Education | WizardStep::Interest => {
            render_choice_question(f, state, step, panel)
        }
        _ => {
            if let Some(kind) = step.trait_kind() {
                match state.wizard.mode() {
                    QuestionnaireMode::Quick => render_slider_question(f, state, kind, panel),
                    QuestionnaireMode::Detailed => {
                        render_sub_questions(f, state, kind, panel)
                    }
                }
            }
        }
    }

    render_status(f, state, chunks[4]);
    render_hints(f, chunks[5], &step_hints(state, step));
}

/// Progress gauge titled with the step position.
fn render_progress_gauge(f: &mut Frame, state: &AppState, step: WizardStep, area: Rect) {
    let title = format!(" Step {} of {} ", step.number(), WizardStep::COUNT);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Styles::progress())
        .percent(u16::from(state.wizard.progress_percent()));
    f.render_widget(gauge, area);
}

/// One marker per step, colored by recorded/active state.
fn render_step_tracker(f: &mut Frame, state: &AppState, current: WizardStep, area: Rect) {
    let mut spans = Vec::new();
    for step in WizardStep::all_steps() {
        let active = *step == current;
        let recorded = state.wizard.is_step_recorded(*step);
        spans.push(Span::styled(
            format!(" {} {} ", Theme::step_marker(recorded, active), step.number()),
            Theme::step_style(recorded, active),
        ));
    }
    let tracker = Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center);
    f.render_widget(tracker, area);
}

fn step_hints(state: &AppState, step: WizardStep) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&'static str, &'static str)> = Vec::new();

    match step {
        WizardStep::Age => hints.push(("0-9", "Type age")),
        WizardStep::Gender | WizardStep::Education | WizardStep::Interest => {
            hints.push(("j/k", "Select"))
        }
        _ => match state.wizard.mode() {
            QuestionnaireMode::Quick => hints.push(("←/→", "Adjust")),
            QuestionnaireMode::Detailed => {
                hints.push(("j/k", "Question"));
                hints.push(("←/→", "Adjust"));
            }
        },
    }

    if step.is_last() {
        hints.push(("Enter", "Predict Personality Type"));
    } else {
        hints.push(("Enter", "Next"));
    }
    if !step.is_first() {
        hints.push(("Esc", "Previous"));
    }
    hints.push(("q", "Quit"));
    hints
}

// ----------------------------------------------------------------------------
// Age Question
// ----------------------------------------------------------------------------

fn render_age_question(f: &mut Frame, state: &AppState, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(WizardStep::Age.prompt(), Styles::text_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Age: ", Styles::text()),
            Span::styled(
                format!("{}▏", state.age_input),
                Styles::focused(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Accepted range: {AGE_MIN}-{AGE_MAX}"),
            Styles::text_muted(),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(question_block(WizardStep::Age));
    f.render_widget(panel, area);
}

// ----------------------------------------------------------------------------
// Choice Questions (gender, education, interest)
// ----------------------------------------------------------------------------

fn choice_labels(step: WizardStep) -> Vec<String> {
    match step {
        WizardStep::Gender => Gender::choices().iter().map(Gender::to_string).collect(),
        WizardStep::Education => Education::choices()
            .iter()
            .map(|e| e.choice_label().to_string())
            .collect(),
        WizardStep::Interest => Interest::choices()
            .iter()
            .map(Interest::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn render_choice_question(f: &mut Frame, state: &AppState, step: WizardStep, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Min(4),    // Choices
        ])
        .split(area);

    let prompt = Paragraph::new(step.prompt())
        .style(Styles::text_bold())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = choice_labels(step)
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if i == state.choice_index {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            ListItem::new(format!("  {label}  ")).style(style)
        })
        .collect();

    let list = List::new(items).block(question_block(step));

    let mut list_state = ListState::default();
    list_state.select(Some(state.choice_index));
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

// ----------------------------------------------------------------------------
// Trait Questions
// ----------------------------------------------------------------------------

/// Single 0-10 slider for the quick questionnaire.
fn render_slider_question(f: &mut Frame, state: &AppState, kind: TraitKind, area: Rect) {
    let step = state.wizard.current_step().unwrap_or(WizardStep::Age);
    let value = state
        .wizard
        .session()
        .axis_value(kind)
        .unwrap_or_default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Prompt
            Constraint::Length(3), // Slider gauge
            Constraint::Min(1),    // Scale labels
        ])
        .split(area);

    let prompt = Paragraph::new(kind.prompt())
        .style(Styles::text_bold())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(prompt, chunks[0]);

    let slider_width = UiConstants::SLIDER_WIDTH.min(chunks[1].width);
    let slider_x = chunks[1].x + (chunks[1].width.saturating_sub(slider_width)) / 2;
    let slider_area = Rect::new(slider_x, chunks[1].y, slider_width, chunks[1].height);

    let gauge = Gauge::default()
        .block(question_block(step))
        .gauge_style(Styles::progress())
        .ratio((value / SCORE_MAX).clamp(0.0, 1.0))
        .label(format!("{value:.1}"));
    f.render_widget(gauge, slider_area);

    let scale = Paragraph::new(vec![Line::from(vec![
        Span::styled("0.0 ↞", Styles::text_muted()),
        Span::raw("  ·  "),
        Span::styled("↠ 10.0", Styles::text_muted()),
    ])])
    .alignment(Alignment::Center);
    f.render_widget(scale, chunks[2]);
}

/// Three agree-level bars for the detailed questionnaire.
fn render_sub_questions(f: &mut Frame, state: &AppState, kind: TraitKind, area: Rect) {
    let axis = state.wizard.session().axis(kind);
    let prompts = kind.sub_prompts();

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{kind}: rate your agreement with each statement"),
            Styles::text_bold(),
        )),
        Line::from(""),
    ];

    for (i, sub) in SubQuestion::all().iter().enumerate() {
        let focused = *sub == state.focused_sub;
        let marker = if focused { "▶ " } else { "  " };
        let prompt_style = if focused {
            Styles::focused()
        } else {
            Styles::text()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Styles::focused()),
            Span::styled(prompts[i], prompt_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            sub_answer_bar(axis.sub(*sub)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(match axis.value() {
        Some(score) => Line::from(vec![
            Span::styled("Trait score: ", Styles::text_secondary()),
            Span::styled(format!("{score:.1} / 9.9"), Styles::success()),
        ]),
        None => Line::from(Span::styled(
            format!(
                "Trait score: unset ({} of 3 answered)",
                axis.answered_subs()
            ),
            Styles::warning(),
        )),
    });

    let panel = Paragraph::new(lines)
        .block(question_block(
            state.wizard.current_step().unwrap_or(WizardStep::Age),
        ))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

/// Fixed-width agreement bar for one sub-answer.
fn sub_answer_bar(raw: Option<f64>) -> Span<'static> {
    const BAR_WIDTH: usize = 20;
    match raw {
        Some(value) => {
            let filled = ((value * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
            Span::styled(
                format!("[{bar}] {value:.2}"),
                Style::default().fg(Colors::PROGRESS),
            )
        }
        None => Span::styled(
            format!("[{}] not answered", "░".repeat(BAR_WIDTH)),
            Styles::text_muted(),
        ),
    }
}

/// Bordered block titled with the step name.
fn question_block(step: WizardStep) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", step.title()))
        .title_style(Style::default().fg(Colors::SECONDARY))
        .border_style(Styles::border_active())
}

// ============================================================================
// Result Screen
// ============================================================================

/// Render the terminal result screen with the predicted type.
pub fn render_result_screen(f: &mut Frame, state: &AppState, area: Rect, header: &HeaderRenderer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(UiConstants::HEADER_HEIGHT), // ASCII art header
            Constraint::Length(3),                          // Title
            Constraint::Min(10),                            // Result panel
            Constraint::Length(3),                          // Instructions
        ])
        .split(area);

    header.render_header(f, chunks[0]);
    header.render_title(f, chunks[1], "Your Predicted Personality Type");

    let session = state.wizard.session();
    let mut lines = vec![Line::from("")];

    match session.prediction {
        Some(personality) => {
            let spaced: String = personality
                .to_string()
                .chars()
                .flat_map(|c| [c, ' '])
                .collect();
            lines.push(Line::from(Span::styled(spaced, Styles::result_type())));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                state.descriptions.describe(personality).to_string(),
                Styles::text(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                answers_summary(state),
                Styles::text_muted(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(UiText::THANKS, Styles::success())));
        }
        // Result phase always carries a prediction; keep a fallback anyway
        None => lines.push(Line::from(Span::styled(
            UiText::INCOMPLETE,
            Styles::error(),
        ))),
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active()),
        );
    f.render_widget(panel, question_panel(chunks[2]));

    render_hints(
        f,
        chunks[3],
        &[("r", "Restart Test"), ("q", "Quit")],
    );
}

/// One-line recap of the recorded answers.
fn answers_summary(state: &AppState) -> String {
    let session = state.wizard.session();
    let score = |kind: TraitKind| -> String {
        session
            .axis_value(kind)
            .map(|v| format!("{v:.1}"))
            .unwrap_or_else(|| "-".to_string())
    };
    format!(
        "Age {} · {} · {} · I {} · S {} · T {} · J {} · {}",
        session.age,
        session.gender,
        session.education.choice_label(),
        score(TraitKind::Introversion),
        score(TraitKind::Sensing),
        score(TraitKind::Thinking),
        score(TraitKind::Judging),
        session.interest,
    )
}
