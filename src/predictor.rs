//! Prediction pipeline.
//!
//! Turns a completed questionnaire session into a personality type in two
//! explicit stages:
//!
//! 1. `build_feature_vector()` flattens the session into a fixed-order
//!    numeric vector
//! 2. `Predictor::predict()` asks the injected classifier for a label code
//!    and decodes it
//!
//! # Feature Order
//!
//! The vector order is a hard contract with the classifier's training order
//! and MUST NOT change:
//!
//! ```text
//! [age, gender, education, introversion, sensing, thinking, judging, interest]
//! ```
//!
//! Categorical fields travel as their numeric label codes, trait axes as
//! their 0-10 scores.

use std::fmt;
use tracing::{debug, info};

use crate::classifier::{Classifier, RuleClassifier};
use crate::error::{PersonaError, Result};
use crate::labels::PersonalityType;
use crate::session::{SessionState, TraitKind};

/// Number of features the classifier expects
pub const FEATURE_COUNT: usize = 8;

/// Fixed-order numeric input for the classifier.
///
/// See the module docs for the order contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

#[allow(dead_code)] // Accessors available for future use
impl FeatureVector {
    const AGE: usize = 0;
    const GENDER: usize = 1;
    const EDUCATION: usize = 2;
    const INTROVERSION: usize = 3;
    const SENSING: usize = 4;
    const THINKING: usize = 5;
    const JUDGING: usize = 6;
    const INTEREST: usize = 7;

    /// Wrap an already-ordered feature array
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// All features in classifier order
    pub const fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn age(&self) -> f64 {
        self.0[Self::AGE]
    }

    pub fn gender(&self) -> f64 {
        self.0[Self::GENDER]
    }

    pub fn education(&self) -> f64 {
        self.0[Self::EDUCATION]
    }

    pub fn introversion(&self) -> f64 {
        self.0[Self::INTROVERSION]
    }

    pub fn sensing(&self) -> f64 {
        self.0[Self::SENSING]
    }

    pub fn thinking(&self) -> f64 {
        self.0[Self::THINKING]
    }

    pub fn judging(&self) -> f64 {
        self.0[Self::JUDGING]
    }

    pub fn interest(&self) -> f64 {
        self.0[Self::INTEREST]
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

/// Flatten a session into the classifier's fixed-order feature vector.
///
/// # Errors
///
/// Returns `PersonaError::InvalidInput` if any trait axis score is still
/// unset, naming the missing axis.
pub fn build_feature_vector(session: &SessionState) -> Result<FeatureVector> {
    let mut scores = [0.0; 4];
    for (slot, kind) in scores.iter_mut().zip(TraitKind::all()) {
        *slot = session
            .axis_value(*kind)
            .ok_or_else(|| PersonaError::invalid_input(format!("the {kind} score is not set")))?;
    }

    Ok(FeatureVector::new([
        f64::from(session.age),
        f64::from(session.gender.code()),
        f64::from(session.education.code()),
        scores[0],
        scores[1],
        scores[2],
        scores[3],
        f64::from(session.interest.code()),
    ]))
}

/// Runs an injected classifier and decodes its label codes.
pub struct Predictor {
    classifier: Box<dyn Classifier>,
}

impl Predictor {
    /// Predictor around the given classifier
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Predictor around the built-in threshold rules
    pub fn with_rules() -> Self {
        Self::new(Box::new(RuleClassifier::new()))
    }

    /// Name of the underlying classifier, for logs and the CLI
    pub fn classifier_name(&self) -> &'static str {
        self.classifier.name()
    }

    /// Decode the classifier's label code for a feature vector.
    ///
    /// # Errors
    ///
    /// Returns `PersonaError::UnknownLabel` if the classifier produces a
    /// code with no personality mapping. That means the model and the label
    /// mapping disagree and the result cannot be trusted.
    pub fn predict(&self, features: &FeatureVector) -> Result<PersonalityType> {
        debug!(classifier = self.classifier.name(), %features, "Predicting");
        let code = self.classifier.predict(features);
        let personality =
            PersonalityType::from_code(code).ok_or(PersonaError::UnknownLabel { code })?;
        info!(%personality, code, "Prediction complete");
        Ok(personality)
    }

    /// Build the feature vector for a session and predict from it.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidInput` from vector construction and
    /// `UnknownLabel` from decoding.
    pub fn predict_session(&self, session: &SessionState) -> Result<PersonalityType> {
        let features = build_feature_vector(session)?;
        self.predict(&features)
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::with_rules()
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}
