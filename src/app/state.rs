//! Application state definitions
//!
//! Holds the questionnaire wizard, its collaborators, and the transient
//! per-screen control state (the age entry buffer, the highlighted choice,
//! the focused sub-question, the status line). All keyboard handling lives
//! here so it can be driven in tests without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::error::{PersonaError, Result};
use crate::labels::{Education, Gender, Interest};
use crate::mapping_file::Descriptions;
use crate::predictor::{build_feature_vector, Predictor};
use crate::session::{
    QuestionnaireMode, SubQuestion, TraitKind, AGE_MAX, AGE_MIN, SCORE_DEFAULT, SCORE_MAX,
    SCORE_MIN, SUB_RAW_MAX, SUB_RAW_MIN,
};
use crate::theme::UiText;
use crate::wizard::{StepInput, WizardController, WizardPhase, WizardStep};

/// Slider movement per keypress on quick trait steps
const SLIDER_STEP: f64 = 0.1;
/// Sub-answer movement per keypress on detailed trait steps
const SUB_STEP: f64 = 0.05;
/// Sub-answer assumed before the first adjustment keypress
const SUB_START: f64 = 0.5;

/// Kind of message on the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    #[allow(dead_code)] // Available for future use
    Success,
    Error,
}

/// Transient one-line message under the question panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// Main application state
pub struct AppState {
    /// The questionnaire wizard
    pub wizard: WizardController,
    /// Prediction pipeline around the injected classifier
    pub predictor: Predictor,
    /// Result-screen description texts
    pub descriptions: Descriptions,
    /// Digit buffer for the age step
    pub age_input: String,
    /// Highlighted row on choice steps
    pub choice_index: usize,
    /// Focused sub-question on detailed trait steps
    pub focused_sub: SubQuestion,
    /// Status message for user feedback
    pub status: Option<StatusLine>,
}

impl AppState {
    /// State on the introduction screen with the given collaborators
    pub fn new(mode: QuestionnaireMode, predictor: Predictor, descriptions: Descriptions) -> Self {
        Self {
            wizard: WizardController::new(mode),
            predictor,
            descriptions,
            age_input: String::new(),
            choice_index: 0,
            focused_sub: SubQuestion::First,
            status: None,
        }
    }

    // -------------------------------------------------------------------------
    // Status line
    // -------------------------------------------------------------------------

    #[allow(dead_code)] // API method available for future use
    pub fn set_status_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_status_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind: StatusKind::Error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // -------------------------------------------------------------------------
    // Keyboard handling
    // -------------------------------------------------------------------------

    /// Handle a key event. Returns `Ok(true)` when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        // Ctrl+C always exits
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Ok(true);
        }

        match self.wizard.phase() {
            WizardPhase::Intro => self.handle_intro_key(key_event),
            WizardPhase::Collecting(step) => self.handle_step_key(key_event, step),
            WizardPhase::Result => self.handle_result_key(key_event),
        }
    }

    fn handle_intro_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.wizard.start();
                self.sync_step_controls();
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_step_key(&mut self, key_event: KeyEvent, step: WizardStep) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Esc | KeyCode::Char('p') => {
                self.wizard.retreat();
                self.sync_step_controls();
                return Ok(false);
            }
            KeyCode::Enter => {
                if self.wizard.can_predict() {
                    self.run_prediction()?;
                } else {
                    self.wizard.advance();
                    self.sync_step_controls();
                }
                return Ok(false);
            }
            _ => {}
        }

        match step {
            WizardStep::Age => self.handle_age_key(key_event),
            WizardStep::Gender | WizardStep::Education | WizardStep::Interest => {
                self.handle_choice_key(key_event, step)
            }
            _ => match self.wizard.mode() {
                QuestionnaireMode::Quick => self.handle_slider_key(key_event),
                QuestionnaireMode::Detailed => self.handle_sub_question_key(key_event),
            },
        }

        Ok(false)
    }

    fn handle_result_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(true),
            KeyCode::Char('r') => {
                self.wizard.reset();
                self.age_input.clear();
                self.choice_index = 0;
                self.focused_sub = SubQuestion::First;
                self.clear_status();
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    // -------------------------------------------------------------------------
    // Age step
    // -------------------------------------------------------------------------

    fn handle_age_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.age_input.len() < 2 {
                    self.age_input.push(c);
                    self.commit_age_input();
                }
            }
            KeyCode::Backspace => {
                self.age_input.pop();
                self.commit_age_input();
            }
            KeyCode::Up | KeyCode::Char('k') => self.step_age(1),
            KeyCode::Down | KeyCode::Char('j') => self.step_age(-1),
            _ => {}
        }
    }

    /// Record the buffered age when it is a valid answer
    fn commit_age_input(&mut self) {
        match self.age_input.parse::<u32>() {
            Ok(age) if (AGE_MIN..=AGE_MAX).contains(&age) => {
                self.clear_status();
                self.try_record(StepInput::Age(age));
            }
            _ if self.age_input.is_empty() => {
                self.clear_status();
            }
            _ => {
                self.set_status_error(format!("Age must be between {AGE_MIN} and {AGE_MAX}"));
            }
        }
    }

    /// Step the recorded age up or down, clamped to the accepted range
    fn step_age(&mut self, delta: i64) {
        let current = i64::from(self.wizard.session().age);
        let age = (current + delta).clamp(i64::from(AGE_MIN), i64::from(AGE_MAX)) as u32;
        self.age_input = age.to_string();
        self.clear_status();
        self.try_record(StepInput::Age(age));
    }

    // -------------------------------------------------------------------------
    // Choice steps (gender, education, interest)
    // -------------------------------------------------------------------------

    fn handle_choice_key(&mut self, key_event: KeyEvent, step: WizardStep) {
        let count = Self::choice_count(step);
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.choice_index = self.choice_index.saturating_sub(1);
                self.record_choice(step);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.choice_index + 1 < count {
                    self.choice_index += 1;
                }
                self.record_choice(step);
            }
            _ => {}
        }
    }

    /// Number of rows on a choice step
    pub fn choice_count(step: WizardStep) -> usize {
        match step {
            WizardStep::Gender => Gender::choices().len(),
            WizardStep::Education => Education::choices().len(),
            WizardStep::Interest => Interest::choices().len(),
            _ => 0,
        }
    }

    fn record_choice(&mut self, step: WizardStep) {
        let input = match step {
            WizardStep::Gender => StepInput::Gender(Gender::choices()[self.choice_index]),
            WizardStep::Education => StepInput::Education(Education::choices()[self.choice_index]),
            WizardStep::Interest => StepInput::Interest(Interest::choices()[self.choice_index]),
            _ => return,
        };
        self.try_record(input);
    }

    // -------------------------------------------------------------------------
    // Trait steps
    // -------------------------------------------------------------------------

    fn handle_slider_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Left | KeyCode::Char('h') => self.adjust_slider(-SLIDER_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.adjust_slider(SLIDER_STEP),
            _ => {}
        }
    }

    fn adjust_slider(&mut self, delta: f64) {
        let Some(kind) = self.current_trait_kind() else {
            return;
        };
        let current = self
            .wizard
            .session()
            .axis_value(kind)
            .unwrap_or(SCORE_DEFAULT);
        let value = ((current + delta) * 10.0).round() / 10.0;
        let value = value.clamp(SCORE_MIN, SCORE_MAX);
        self.try_record(StepInput::TraitScore(value));
    }

    fn handle_sub_question_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_sub_focus(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_sub_focus(1),
            KeyCode::Left | KeyCode::Char('h') => self.adjust_sub(-SUB_STEP),
            KeyCode::Right | KeyCode::Char('l') => self.adjust_sub(SUB_STEP),
            KeyCode::Backspace => {
                if let Err(err) = self.wizard.clear_sub_answer(self.focused_sub) {
                    self.set_status_error(err.to_string());
                }
            }
            _ => {}
        }
    }

    fn move_sub_focus(&mut self, delta: i32) {
        let index = self.focused_sub.index() as i32 + delta;
        let index = index.clamp(0, SubQuestion::all().len() as i32 - 1) as usize;
        self.focused_sub = SubQuestion::all()[index];
    }

    fn adjust_sub(&mut self, delta: f64) {
        let Some(kind) = self.current_trait_kind() else {
            return;
        };
        let current = self
            .wizard
            .session()
            .axis(kind)
            .sub(self.focused_sub)
            .unwrap_or(SUB_START);
        let raw = ((current + delta) * 100.0).round() / 100.0;
        let raw = raw.clamp(SUB_RAW_MIN, SUB_RAW_MAX);
        self.try_record(StepInput::SubAnswer {
            sub: self.focused_sub,
            raw,
        });
    }

    fn current_trait_kind(&self) -> Option<TraitKind> {
        self.wizard.current_step().and_then(WizardStep::trait_kind)
    }

    // -------------------------------------------------------------------------
    // Recording and prediction
    // -------------------------------------------------------------------------

    /// Record an input, reporting any rejection on the status line
    fn try_record(&mut self, input: StepInput) {
        if let Err(err) = self.wizard.record_input(input) {
            warn!(%err, "Input rejected");
            self.set_status_error(err.to_string());
        }
    }

    /// Build the feature vector, run the classifier, and move to the result.
    ///
    /// An incomplete questionnaire stays on the current step with a status
    /// message; an unknown label code aborts the app, since the model and
    /// the label mapping disagree.
    fn run_prediction(&mut self) -> Result<()> {
        let features = match build_feature_vector(self.wizard.session()) {
            Ok(features) => features,
            Err(err @ PersonaError::InvalidInput(_)) => {
                warn!(%err, "Prediction requested on incomplete questionnaire");
                self.set_status_error(UiText::INCOMPLETE);
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let personality = self.predictor.predict(&features)?;
        self.wizard.finish(personality)?;
        self.clear_status();
        Ok(())
    }

    /// Load the current step's values into the screen controls.
    ///
    /// Called after every navigation so the controls always show what the
    /// session holds for the step being entered.
    pub fn sync_step_controls(&mut self) {
        self.clear_status();
        let Some(step) = self.wizard.current_step() else {
            return;
        };
        let session = self.wizard.session();

        match step {
            WizardStep::Age => {
                self.age_input = session.age.to_string();
            }
            WizardStep::Gender => {
                self.choice_index = Gender::choices()
                    .iter()
                    .position(|g| *g == session.gender)
                    .unwrap_or(0);
            }
            WizardStep::Education => {
                self.choice_index = Education::choices()
                    .iter()
                    .position(|e| *e == session.education)
                    .unwrap_or(0);
            }
            WizardStep::Interest => {
                self.choice_index = Interest::choices()
                    .iter()
                    .position(|i| *i == session.interest)
                    .unwrap_or(0);
            }
            _ => {
                self.focused_sub = SubQuestion::First;
            }
        }
    }
}
