//! Pluggable personality classifiers.
//!
//! This module provides the `Classifier` trait that decouples the prediction
//! pipeline from any concrete model. The pipeline hands a classifier a fixed
//! 8-feature vector and receives a numeric label code back; decoding that
//! code into a personality type happens in the predictor, so a classifier
//! returning a code with no mapping entry is detected there.
//!
//! # Design Goals
//!
//! 1. **Injection**: the predictor owns a boxed classifier, so tests and the
//!    CLI can swap the built-in rules for stubs or fixed outputs.
//! 2. **Determinism**: identical feature vectors must yield identical codes.
//! 3. **Raw Codes**: classifiers speak numeric label codes only; they never
//!    see personality names or descriptions.

use crate::labels::PersonalityType;
use crate::predictor::FeatureVector;
use crate::session::SCORE_DEFAULT;

/// A model that maps a feature vector to a numeric personality label code.
///
/// # Contract
///
/// - `predict()` MUST be deterministic: the same vector always produces the
///   same code.
/// - The returned code SHOULD be a valid personality label code (0-15);
///   returning anything else makes the prediction fail as a model/mapping
///   mismatch.
pub trait Classifier {
    /// Label code for the given feature vector.
    fn predict(&self, features: &FeatureVector) -> i64;

    /// Short name for logs and the CLI.
    fn name(&self) -> &'static str;
}

/// Built-in threshold classifier.
///
/// Each trait axis score runs 0-10 with the questionnaire midpoint at 5.0;
/// a score strictly above the midpoint selects the right-hand pole of its
/// slider (extraverted, sensing, thinking, judging), anything else the left.
/// The four poles combine into one of the 16 personality types.
///
/// Age, gender, education and interest are carried in the vector for parity
/// with the training order but do not move the thresholds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleClassifier;

impl RuleClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for RuleClassifier {
    fn predict(&self, features: &FeatureVector) -> i64 {
        let personality = PersonalityType::from_axes(
            features.introversion() > SCORE_DEFAULT,
            features.sensing() > SCORE_DEFAULT,
            features.thinking() > SCORE_DEFAULT,
            features.judging() > SCORE_DEFAULT,
        );
        personality.code() as i64
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

/// Classifier that ignores its input and always returns one code.
///
/// Lets callers pin the pipeline's output, including codes with no mapping
/// entry to exercise the mismatch path.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier {
    code: i64,
}

#[allow(dead_code)] // Constructor available for future use
impl FixedClassifier {
    pub fn new(code: i64) -> Self {
        Self { code }
    }
}

impl Classifier for FixedClassifier {
    fn predict(&self, _features: &FeatureVector) -> i64 {
        self.code
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}
