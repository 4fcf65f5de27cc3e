//! PersonaTUI Library
//!
//! This library provides the core functionality for the MBTI questionnaire TUI:
//! the wizard step machine, session scoring, the rule classifier, and the
//! JSON resources (answers, label mappings, descriptions) around them.

pub mod answers_file;
pub mod app;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod labels;
pub mod mapping_file;
pub mod predictor;
pub mod session;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppState, StatusKind, StatusLine};
pub use classifier::{Classifier, FixedClassifier, RuleClassifier};
pub use error::{PersonaError, Result};
pub use labels::{Education, Gender, Interest, PersonalityType};
pub use mapping_file::{Descriptions, LabelMappingFile, DESCRIPTION_FALLBACK};
pub use predictor::{build_feature_vector, FeatureVector, Predictor, FEATURE_COUNT};
pub use wizard::{StepInput, WizardController, WizardError, WizardPhase, WizardStep};

// Session scoring model and its ranges
pub use session::{
    AxisScore, QuestionnaireMode, SessionState, SubQuestion, TraitKind, AGE_DEFAULT, AGE_MAX,
    AGE_MIN, SCORE_DEFAULT, SCORE_MAX, SCORE_MIN, SUB_ANSWER_SCALE, SUB_RAW_MAX, SUB_RAW_MIN,
};

// Saved-answers interchange format
pub use answers_file::AnswersFile;

// Rendering entry point
pub use ui::UiRenderer;
