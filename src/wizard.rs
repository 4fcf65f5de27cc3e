//! Questionnaire Wizard State Machine
//!
//! This module is the authoritative source of truth for questionnaire
//! progress. It owns the current phase, the current step, and the collected
//! session answers, and validates every recorded input against the step it
//! belongs to.
//!
//! # Design Principles
//!
//! - **Single Source of Truth**: the `WizardController` owns the phase and
//!   the `SessionState`
//! - **Clamped Navigation**: Next/Previous never leave the step range;
//!   at a boundary they are no-ops, not errors
//! - **No Global State**: state is owned by the controller, not global/static
//! - **Typed Inputs**: recording an input that does not belong to the
//!   current step returns an error immediately
//!
//! # Phase Flow
//!
//! ```text
//! Intro
//!   ↓ start
//! Collecting(step 1..=8)   ← Next/Previous move within, clamped at [1, 8]
//!   ↓ predict (final step only)
//! Result
//!   ↓ restart
//! Intro
//! ```

use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::labels::{Education, Gender, Interest, PersonalityType};
use crate::session::{AxisScore, QuestionnaireMode, SessionState, SubQuestion, TraitKind};

/// Questionnaire steps in presentation order.
///
/// Step numbers are 1-indexed to match on-screen "Step N of 8" labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WizardStep {
    Age = 1,
    Gender = 2,
    Education = 3,
    Introversion = 4,
    Sensing = 5,
    Thinking = 6,
    Judging = 7,
    Interest = 8,
}

impl WizardStep {
    /// Number of questionnaire steps
    pub const COUNT: usize = 8;

    /// 1-indexed step number for display
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// The first questionnaire step
    #[inline]
    pub const fn first() -> Self {
        Self::Age
    }

    /// The final questionnaire step
    #[inline]
    pub const fn last() -> Self {
        Self::Interest
    }

    /// True for the first step (Previous is a no-op here)
    #[inline]
    pub const fn is_first(self) -> bool {
        matches!(self, Self::Age)
    }

    /// True for the final step (Next is a no-op here, predict unlocks)
    #[inline]
    pub const fn is_last(self) -> bool {
        matches!(self, Self::Interest)
    }

    /// The next step, or None at the final step
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Age => Some(Self::Gender),
            Self::Gender => Some(Self::Education),
            Self::Education => Some(Self::Introversion),
            Self::Introversion => Some(Self::Sensing),
            Self::Sensing => Some(Self::Thinking),
            Self::Thinking => Some(Self::Judging),
            Self::Judging => Some(Self::Interest),
            Self::Interest => None,
        }
    }

    /// The previous step, or None at the first step
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Age => None,
            Self::Gender => Some(Self::Age),
            Self::Education => Some(Self::Gender),
            Self::Introversion => Some(Self::Education),
            Self::Sensing => Some(Self::Introversion),
            Self::Thinking => Some(Self::Sensing),
            Self::Judging => Some(Self::Thinking),
            Self::Interest => Some(Self::Judging),
        }
    }

    /// Short screen title for this step
    pub const fn title(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Education => "Education",
            Self::Introversion => "Social Energy",
            Self::Sensing => "Perception Style",
            Self::Thinking => "Decision Making",
            Self::Judging => "Lifestyle",
            Self::Interest => "Primary Interest",
        }
    }

    /// The question shown on this step's screen
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Age => "How old are you?",
            Self::Gender => "What is your gender?",
            Self::Education => "What is your highest level of education?",
            Self::Introversion => TraitKind::Introversion.prompt(),
            Self::Sensing => TraitKind::Sensing.prompt(),
            Self::Thinking => TraitKind::Thinking.prompt(),
            Self::Judging => TraitKind::Judging.prompt(),
            Self::Interest => "What is your primary area of interest?",
        }
    }

    /// The trait axis this step measures, if it is a trait step
    pub const fn trait_kind(self) -> Option<TraitKind> {
        match self {
            Self::Introversion => Some(TraitKind::Introversion),
            Self::Sensing => Some(TraitKind::Sensing),
            Self::Thinking => Some(TraitKind::Thinking),
            Self::Judging => Some(TraitKind::Judging),
            _ => None,
        }
    }

    /// Approximate progress through the questionnaire at this step
    pub const fn progress_percent(self) -> u8 {
        (self.number() as u16 * 100 / Self::COUNT as u16) as u8
    }

    /// All steps in presentation order
    pub const fn all_steps() -> &'static [Self] {
        &[
            Self::Age,
            Self::Gender,
            Self::Education,
            Self::Introversion,
            Self::Sensing,
            Self::Thinking,
            Self::Judging,
            Self::Interest,
        ]
    }

    /// Decode a 1-indexed step number
    #[allow(dead_code)] // API method available for future use
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Age),
            2 => Some(Self::Gender),
            3 => Some(Self::Education),
            4 => Some(Self::Introversion),
            5 => Some(Self::Sensing),
            6 => Some(Self::Thinking),
            7 => Some(Self::Judging),
            8 => Some(Self::Interest),
            _ => None,
        }
    }

    /// Zero-based position, used to index per-step bookkeeping
    #[inline]
    const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// The wizard's top-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    /// Introduction screen, before any questions
    #[default]
    Intro,
    /// Collecting answers on the contained step
    Collecting(WizardStep),
    /// Terminal screen showing the prediction
    Result,
}

impl WizardPhase {
    /// The active step while collecting, if any
    #[inline]
    pub const fn step(self) -> Option<WizardStep> {
        match self {
            Self::Collecting(step) => Some(step),
            _ => None,
        }
    }

    /// Name used in error messages and logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::Intro => "introduction",
            Self::Collecting(_) => "collecting",
            Self::Result => "result",
        }
    }
}

/// A raw value recorded for one questionnaire step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepInput {
    Age(u32),
    Gender(Gender),
    Education(Education),
    /// Single-slider trait score (quick questionnaire)
    TraitScore(f64),
    /// One raw 0-1 sub-answer on a trait step (detailed questionnaire)
    SubAnswer { sub: SubQuestion, raw: f64 },
    Interest(Interest),
}

impl StepInput {
    /// Name used in mismatch error messages
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Age(_) => "age",
            Self::Gender(_) => "gender",
            Self::Education(_) => "education",
            Self::TraitScore(_) => "trait score",
            Self::SubAnswer { .. } => "sub-answer",
            Self::Interest(_) => "interest",
        }
    }
}

/// Errors that can occur when driving the wizard
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// Input recorded outside the collecting phase
    #[error("Cannot record input during the {phase} phase")]
    NotCollecting { phase: &'static str },

    /// Input kind does not belong to the current step
    #[error("Cannot record {input} input on the {step} step")]
    InputMismatch {
        step: WizardStep,
        input: &'static str,
    },

    /// Input kind belongs to the other questionnaire variant
    #[error("{input} input is not part of the {mode} questionnaire")]
    ModeMismatch {
        mode: QuestionnaireMode,
        input: &'static str,
    },

    /// Prediction requested away from the final step
    #[error("Prediction is only available on the final step (currently at {step})")]
    PredictLocked { step: WizardStep },
}

/// Controller for one questionnaire run.
///
/// Owns the phase, the current step, the collected [`SessionState`], and a
/// per-step record of which inputs have been stored. Navigation is clamped:
/// advancing past the final step or retreating past the first step leaves
/// the controller unchanged.
///
/// # Example
///
/// ```
/// use personatui::wizard::{WizardController, WizardPhase, WizardStep};
///
/// let mut wizard = WizardController::default();
/// assert_eq!(wizard.phase(), WizardPhase::Intro);
///
/// wizard.start();
/// assert_eq!(wizard.current_step(), Some(WizardStep::Age));
///
/// // Previous on the first step is a no-op
/// wizard.retreat();
/// assert_eq!(wizard.current_step(), Some(WizardStep::Age));
/// ```
#[derive(Debug, Clone)]
pub struct WizardController {
    /// Which questionnaire variant this run uses
    mode: QuestionnaireMode,

    /// Current phase (intro, collecting at a step, result)
    phase: WizardPhase,

    /// Answers collected so far
    session: SessionState,

    /// Which steps have had their input recorded, by step index
    recorded: [bool; WizardStep::COUNT],
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new(QuestionnaireMode::default())
    }
}

impl WizardController {
    /// Create a controller on the introduction screen with default answers
    pub fn new(mode: QuestionnaireMode) -> Self {
        Self {
            mode,
            phase: WizardPhase::Intro,
            session: SessionState::new(mode),
            recorded: [false; WizardStep::COUNT],
        }
    }

    /// The questionnaire variant this controller runs
    #[inline]
    pub fn mode(&self) -> QuestionnaireMode {
        self.mode
    }

    /// Current wizard phase
    #[inline]
    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// The active step, if collecting
    #[inline]
    pub fn current_step(&self) -> Option<WizardStep> {
        self.phase.step()
    }

    /// Borrow the collected answers
    #[inline]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// True once the final step's input has been recorded
    #[allow(dead_code)] // API method available for future use
    pub fn is_complete(&self) -> bool {
        self.recorded[WizardStep::last().index()]
    }

    /// True if the given step's input has been recorded
    pub fn is_step_recorded(&self, step: WizardStep) -> bool {
        self.recorded[step.index()]
    }

    /// True when the predict action is enabled (final step reached)
    pub fn can_predict(&self) -> bool {
        self.phase == WizardPhase::Collecting(WizardStep::last())
    }

    /// Progress through the questionnaire for the current phase
    pub fn progress_percent(&self) -> u8 {
        match self.phase {
            WizardPhase::Intro => 0,
            WizardPhase::Collecting(step) => step.progress_percent(),
            WizardPhase::Result => 100,
        }
    }

    /// Leave the introduction and begin collecting at the first step.
    ///
    /// No-op unless the wizard is on the introduction screen.
    pub fn start(&mut self) {
        if self.phase == WizardPhase::Intro {
            debug!("Questionnaire started");
            self.enter_step(WizardStep::first());
        }
    }

    /// Move to the next step, clamped at the final step.
    ///
    /// Returns the step the wizard is on afterwards, or None when not
    /// collecting.
    pub fn advance(&mut self) -> Option<WizardStep> {
        let step = self.phase.step()?;
        match step.next() {
            Some(next) => {
                debug!(from = %step, to = %next, "Advancing");
                self.enter_step(next);
                Some(next)
            }
            // Already at the final step
            None => Some(step),
        }
    }

    /// Move to the previous step, clamped at the first step.
    ///
    /// Returns the step the wizard is on afterwards, or None when not
    /// collecting.
    pub fn retreat(&mut self) -> Option<WizardStep> {
        let step = self.phase.step()?;
        match step.previous() {
            Some(prev) => {
                debug!(from = %step, to = %prev, "Retreating");
                self.enter_step(prev);
                Some(prev)
            }
            // Already at the first step
            None => Some(step),
        }
    }

    /// Record a raw value for the current step.
    ///
    /// Trait steps accept a single slider score in the quick questionnaire
    /// and individual sub-answers in the detailed questionnaire; a detailed
    /// trait step counts as recorded only once all three sub-answers are
    /// present.
    ///
    /// # Errors
    ///
    /// - `NotCollecting` if the wizard is not on a question screen
    /// - `InputMismatch` if the input kind does not belong to the step
    /// - `ModeMismatch` if the input kind belongs to the other variant
    pub fn record_input(&mut self, input: StepInput) -> Result<(), WizardError> {
        let step = self.phase.step().ok_or(WizardError::NotCollecting {
            phase: self.phase.name(),
        })?;

        match (step.trait_kind(), input) {
            (None, StepInput::Age(age)) if step == WizardStep::Age => {
                self.session.age = age;
            }
            (None, StepInput::Gender(gender)) if step == WizardStep::Gender => {
                self.session.gender = gender;
            }
            (None, StepInput::Education(education)) if step == WizardStep::Education => {
                self.session.education = education;
            }
            (None, StepInput::Interest(interest)) if step == WizardStep::Interest => {
                self.session.interest = interest;
            }
            (Some(kind), StepInput::TraitScore(score)) => {
                if self.mode != QuestionnaireMode::Quick {
                    return Err(WizardError::ModeMismatch {
                        mode: self.mode,
                        input: input.kind_name(),
                    });
                }
                *self.session.axis_mut(kind) = AxisScore::Direct(score);
            }
            (Some(kind), StepInput::SubAnswer { sub, raw }) => {
                if self.mode != QuestionnaireMode::Detailed {
                    return Err(WizardError::ModeMismatch {
                        mode: self.mode,
                        input: input.kind_name(),
                    });
                }
                let axis = self.session.axis_mut(kind);
                axis.set_sub(sub, raw);
                // The step is recorded only once the composite is determined
                self.recorded[step.index()] = axis.value().is_some();
                return Ok(());
            }
            _ => {
                return Err(WizardError::InputMismatch {
                    step,
                    input: input.kind_name(),
                });
            }
        }

        self.recorded[step.index()] = true;
        Ok(())
    }

    /// Remove one recorded sub-answer on the current detailed trait step,
    /// returning its composite to unset.
    ///
    /// # Errors
    ///
    /// - `NotCollecting` if the wizard is not on a question screen
    /// - `ModeMismatch` outside the detailed questionnaire
    /// - `InputMismatch` if the current step is not a trait step
    pub fn clear_sub_answer(&mut self, sub: SubQuestion) -> Result<(), WizardError> {
        let step = self.phase.step().ok_or(WizardError::NotCollecting {
            phase: self.phase.name(),
        })?;
        if self.mode != QuestionnaireMode::Detailed {
            return Err(WizardError::ModeMismatch {
                mode: self.mode,
                input: "sub-answer",
            });
        }
        let kind = step.trait_kind().ok_or(WizardError::InputMismatch {
            step,
            input: "sub-answer",
        })?;

        self.session.axis_mut(kind).clear_sub(sub);
        self.recorded[step.index()] = false;
        Ok(())
    }

    /// Record a successful prediction and move to the result screen.
    ///
    /// # Errors
    ///
    /// - `NotCollecting` if the wizard is not on a question screen
    /// - `PredictLocked` away from the final step
    pub fn finish(&mut self, prediction: PersonalityType) -> Result<(), WizardError> {
        let step = self.phase.step().ok_or(WizardError::NotCollecting {
            phase: self.phase.name(),
        })?;
        if !step.is_last() {
            return Err(WizardError::PredictLocked { step });
        }

        debug!(%prediction, "Prediction recorded");
        self.session.prediction = Some(prediction);
        self.session.prediction_done = true;
        self.phase = WizardPhase::Result;
        Ok(())
    }

    /// Return every field to its default and the phase to the introduction
    pub fn reset(&mut self) {
        debug!("Wizard reset");
        self.phase = WizardPhase::Intro;
        self.session = SessionState::new(self.mode);
        self.recorded = [false; WizardStep::COUNT];
    }

    /// Move to a step and materialize its on-entry value.
    ///
    /// Steps whose control always holds a valid value (age entry, choice
    /// lists, quick-mode sliders) record that value simply by being shown;
    /// detailed trait steps stay unrecorded until their sub-answers are in.
    fn enter_step(&mut self, step: WizardStep) {
        self.phase = WizardPhase::Collecting(step);
        let auto_records = match step.trait_kind() {
            Some(_) => self.mode == QuestionnaireMode::Quick,
            None => true,
        };
        if auto_records {
            self.recorded[step.index()] = true;
        }
    }
}

// Convert WizardError to the main PersonaError type
impl From<WizardError> for crate::error::PersonaError {
    fn from(err: WizardError) -> Self {
        crate::error::PersonaError::Wizard(err.to_string())
    }
}
