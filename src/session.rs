//! Session state for a questionnaire run
//!
//! One respondent's answers live in an explicit [`SessionState`] value owned
//! by the wizard controller. There is no global or static session; restart
//! replaces the state with a fresh default.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::labels::{Education, Gender, Interest, PersonalityType};

/// Youngest accepted respondent age
pub const AGE_MIN: u32 = 18;
/// Oldest accepted respondent age
pub const AGE_MAX: u32 = 57;
/// Age preselected when a session starts
pub const AGE_DEFAULT: u32 = 18;

/// Lower bound of a trait axis score
pub const SCORE_MIN: f64 = 0.0;
/// Upper bound of a trait axis score
pub const SCORE_MAX: f64 = 10.0;
/// Axis score preselected on the single-slider questionnaire
pub const SCORE_DEFAULT: f64 = 5.0;

/// Scale factor applied to each raw 0-1 sub-answer.
/// Three scaled sub-answers sum to a composite score in 0.0-9.9.
pub const SUB_ANSWER_SCALE: f64 = 3.3;
/// Lower bound of a raw sub-answer
pub const SUB_RAW_MIN: f64 = 0.0;
/// Upper bound of a raw sub-answer
pub const SUB_RAW_MAX: f64 = 1.0;

/// Which questionnaire variant a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum QuestionnaireMode {
    /// One 0-10 slider per trait axis
    #[default]
    #[strum(serialize = "quick")]
    Quick,
    /// Three 0-1 sub-questions per trait axis, summed into a composite
    #[strum(serialize = "detailed")]
    Detailed,
}

/// The four MBTI trait axes measured by the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum TraitKind {
    #[strum(serialize = "Introversion")]
    Introversion,
    #[strum(serialize = "Sensing")]
    Sensing,
    #[strum(serialize = "Thinking")]
    Thinking,
    #[strum(serialize = "Judging")]
    Judging,
}

impl TraitKind {
    /// All axes in questionnaire order
    pub const fn all() -> &'static [Self] {
        &[Self::Introversion, Self::Sensing, Self::Thinking, Self::Judging]
    }

    /// Slider prompt for the single-question variant.
    ///
    /// The arrows mark which end of the slider each answer lives at; a
    /// high score is the right-hand pole.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Introversion => {
                "Do you find that you recharge more effectively after engaging in \
                 social gatherings (↠) or after enjoying some quiet time alone (↞)?"
            }
            Self::Sensing => {
                "Do you focus more on practical details (↠) or prefer to think \
                 about the big picture and abstract concepts (↞)?"
            }
            Self::Thinking => {
                "When making decisions, do you prioritize logic and objectivity (↠) \
                 over personal feelings and values (↞)?"
            }
            Self::Judging => {
                "Do you prefer planning and sticking to schedules (↠), or are you \
                 more comfortable going with the flow and being spontaneous (↞)?"
            }
        }
    }

    /// The three agree-level sub-questions for the detailed variant.
    ///
    /// Each is answered 0.0 (disagree) to 1.0 (agree); agreement points at
    /// the same pole as a high slider score.
    pub const fn sub_prompts(self) -> [&'static str; 3] {
        match self {
            Self::Introversion => [
                "I feel energized after spending time with a group of people.",
                "I seek out conversations with strangers at social events.",
                "I prefer working through problems out loud with others.",
            ],
            Self::Sensing => [
                "I trust hands-on experience more than theories.",
                "I notice small practical details that others overlook.",
                "I prefer concrete facts over abstract concepts.",
            ],
            Self::Thinking => [
                "I base important decisions on objective analysis.",
                "I value being right over being agreeable.",
                "I stay detached when weighing difficult choices.",
            ],
            Self::Judging => [
                "I plan my days in advance and stick to the schedule.",
                "I finish tasks well before their deadlines.",
                "I find unexpected changes of plan unsettling.",
            ],
        }
    }
}

/// One of the three sub-questions of a detailed trait step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubQuestion {
    First,
    Second,
    Third,
}

impl SubQuestion {
    /// All sub-questions in order
    pub const fn all() -> &'static [Self; 3] {
        &[Self::First, Self::Second, Self::Third]
    }

    /// Zero-based position within the step
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// How one trait axis score has been recorded.
///
/// The composite value is a pure function of the three sub-answers: it is
/// recomputed whenever any of them changes and stays unset while any of
/// them is missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScore {
    /// Value from the single 0-10 slider
    Direct(f64),
    /// Raw 0-1 answers to the three sub-questions
    Composite {
        first: Option<f64>,
        second: Option<f64>,
        third: Option<f64>,
    },
}

impl AxisScore {
    /// Starting representation for the given questionnaire mode
    pub const fn default_for(mode: QuestionnaireMode) -> Self {
        match mode {
            QuestionnaireMode::Quick => Self::Direct(SCORE_DEFAULT),
            QuestionnaireMode::Detailed => Self::Composite {
                first: None,
                second: None,
                third: None,
            },
        }
    }

    /// The effective axis score, if it is determined.
    ///
    /// Direct scores are always determined; a composite is determined only
    /// once all three sub-answers are present.
    pub fn value(&self) -> Option<f64> {
        match *self {
            Self::Direct(v) => Some(v),
            Self::Composite {
                first: Some(a),
                second: Some(b),
                third: Some(c),
            } => Some((a + b + c) * SUB_ANSWER_SCALE),
            Self::Composite { .. } => None,
        }
    }

    /// The raw answer to one sub-question, if recorded
    pub fn sub(&self, sub: SubQuestion) -> Option<f64> {
        match *self {
            Self::Direct(_) => None,
            Self::Composite {
                first,
                second,
                third,
            } => match sub {
                SubQuestion::First => first,
                SubQuestion::Second => second,
                SubQuestion::Third => third,
            },
        }
    }

    /// Record one raw sub-answer.
    ///
    /// A direct score switches to composite form, losing the slider value;
    /// the controller only routes sub-answers here in detailed mode.
    pub fn set_sub(&mut self, sub: SubQuestion, raw: f64) {
        if let Self::Direct(_) = self {
            *self = Self::Composite {
                first: None,
                second: None,
                third: None,
            };
        }
        if let Self::Composite {
            first,
            second,
            third,
        } = self
        {
            match sub {
                SubQuestion::First => *first = Some(raw),
                SubQuestion::Second => *second = Some(raw),
                SubQuestion::Third => *third = Some(raw),
            }
        }
    }

    /// Remove one recorded sub-answer, unsetting the composite
    pub fn clear_sub(&mut self, sub: SubQuestion) {
        if let Self::Composite {
            first,
            second,
            third,
        } = self
        {
            match sub {
                SubQuestion::First => *first = None,
                SubQuestion::Second => *second = None,
                SubQuestion::Third => *third = None,
            }
        }
    }

    /// Number of recorded sub-answers, 0 to 3 (always 0 for direct scores)
    pub fn answered_subs(&self) -> usize {
        match *self {
            Self::Direct(_) => 0,
            Self::Composite {
                first,
                second,
                third,
            } => [first, second, third].iter().filter(|s| s.is_some()).count(),
        }
    }
}

/// All answers collected during one questionnaire run.
///
/// Initialized with defaults when a session starts, mutated step by step,
/// and replaced with a fresh default on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub age: u32,
    pub gender: Gender,
    pub education: Education,
    pub introversion: AxisScore,
    pub sensing: AxisScore,
    pub thinking: AxisScore,
    pub judging: AxisScore,
    pub interest: Interest,
    /// Set once a prediction has been produced for this session
    pub prediction_done: bool,
    /// The predicted type, present only after a successful prediction
    pub prediction: Option<PersonalityType>,
}

impl SessionState {
    /// Fresh session with the documented defaults for the given mode
    pub fn new(mode: QuestionnaireMode) -> Self {
        Self {
            age: AGE_DEFAULT,
            gender: Gender::default(),
            education: Education::default(),
            introversion: AxisScore::default_for(mode),
            sensing: AxisScore::default_for(mode),
            thinking: AxisScore::default_for(mode),
            judging: AxisScore::default_for(mode),
            interest: Interest::default(),
            prediction_done: false,
            prediction: None,
        }
    }

    /// Borrow the score for one trait axis
    pub fn axis(&self, kind: TraitKind) -> &AxisScore {
        match kind {
            TraitKind::Introversion => &self.introversion,
            TraitKind::Sensing => &self.sensing,
            TraitKind::Thinking => &self.thinking,
            TraitKind::Judging => &self.judging,
        }
    }

    /// Mutably borrow the score for one trait axis
    pub fn axis_mut(&mut self, kind: TraitKind) -> &mut AxisScore {
        match kind {
            TraitKind::Introversion => &mut self.introversion,
            TraitKind::Sensing => &mut self.sensing,
            TraitKind::Thinking => &mut self.thinking,
            TraitKind::Judging => &mut self.judging,
        }
    }

    /// The effective score for one axis, if determined
    pub fn axis_value(&self, kind: TraitKind) -> Option<f64> {
        self.axis(kind).value()
    }

    /// True when every axis has a determined score
    #[allow(dead_code)] // API method available for future use
    pub fn is_fully_scored(&self) -> bool {
        TraitKind::all()
            .iter()
            .all(|kind| self.axis_value(*kind).is_some())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(QuestionnaireMode::default())
    }
}
