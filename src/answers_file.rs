//! Saved questionnaire answers.
//!
//! A small JSON format holding one respondent's eight answers, used to run
//! predictions without the interactive questionnaire and to share filled-in
//! questionnaires between machines. Absent fields take the questionnaire's
//! starting defaults, so a hand-written file only needs the answers that
//! differ from them.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::labels::{Education, Gender, Interest};
use crate::session::{
    AxisScore, QuestionnaireMode, SessionState, AGE_DEFAULT, AGE_MAX, AGE_MIN, SCORE_DEFAULT,
    SCORE_MAX, SCORE_MIN,
};

fn default_age() -> u32 {
    AGE_DEFAULT
}

fn default_score() -> f64 {
    SCORE_DEFAULT
}

/// One respondent's answers in serializable form.
///
/// Trait axes are stored as their effective 0-10 scores regardless of which
/// questionnaire variant produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswersFile {
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub education: Education,
    #[serde(default = "default_score")]
    pub introversion: f64,
    #[serde(default = "default_score")]
    pub sensing: f64,
    #[serde(default = "default_score")]
    pub thinking: f64,
    #[serde(default = "default_score")]
    pub judging: f64,
    #[serde(default)]
    pub interest: Interest,
}

impl Default for AnswersFile {
    fn default() -> Self {
        Self {
            age: AGE_DEFAULT,
            gender: Gender::default(),
            education: Education::default(),
            introversion: SCORE_DEFAULT,
            sensing: SCORE_DEFAULT,
            thinking: SCORE_DEFAULT,
            judging: SCORE_DEFAULT,
            interest: Interest::default(),
        }
    }
}

impl AnswersFile {
    /// Capture a session's answers.
    ///
    /// Fails if any trait axis score is still unset, since the file format
    /// has no notion of a partially answered questionnaire.
    #[allow(dead_code)] // API method available for future use
    pub fn from_session(session: &SessionState) -> Result<Self> {
        let score = |axis: &AxisScore, name: &str| -> Result<f64> {
            match axis.value() {
                Some(value) => Ok(value),
                None => bail!("Cannot save answers: the {} score is not set", name),
            }
        };

        Ok(Self {
            age: session.age,
            gender: session.gender,
            education: session.education,
            introversion: score(&session.introversion, "Introversion")?,
            sensing: score(&session.sensing, "Sensing")?,
            thinking: score(&session.thinking, "Thinking")?,
            judging: score(&session.judging, "Judging")?,
            interest: session.interest,
        })
    }

    /// Rebuild a session from these answers.
    ///
    /// The session carries the scores as direct slider values and has no
    /// prediction yet.
    pub fn to_session(&self) -> SessionState {
        let mut session = SessionState::new(QuestionnaireMode::Quick);
        session.age = self.age;
        session.gender = self.gender;
        session.education = self.education;
        session.introversion = AxisScore::Direct(self.introversion);
        session.sensing = AxisScore::Direct(self.sensing);
        session.thinking = AxisScore::Direct(self.thinking);
        session.judging = AxisScore::Direct(self.judging);
        session.interest = self.interest;
        session
    }

    /// Load answers from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json_string = fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers file: {}", path.display()))?;

        let answers: Self = serde_json::from_str(&json_string)
            .with_context(|| format!("Failed to parse answers file: {}", path.display()))?;

        Ok(answers)
    }

    /// Save these answers as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json_string =
            serde_json::to_string_pretty(self).context("Failed to serialize answers")?;

        fs::write(path, json_string)
            .with_context(|| format!("Failed to write answers file: {}", path.display()))?;

        Ok(())
    }

    /// Check every answer against the questionnaire's accepted ranges
    pub fn validate(&self) -> Result<()> {
        if self.age < AGE_MIN || self.age > AGE_MAX {
            bail!(
                "Age {} is outside the accepted range {}-{}",
                self.age,
                AGE_MIN,
                AGE_MAX
            );
        }

        let scores = [
            ("Introversion", self.introversion),
            ("Sensing", self.sensing),
            ("Thinking", self.thinking),
            ("Judging", self.judging),
        ];
        for (name, score) in scores {
            if !score.is_finite() {
                bail!("{} score must be a finite number", name);
            }
            if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                bail!(
                    "{} score {} is outside the accepted range {}-{}",
                    name,
                    score,
                    SCORE_MIN,
                    SCORE_MAX
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::build_feature_vector;
    use tempfile::tempdir;

    #[test]
    fn test_default_answers_validate() {
        let answers = AnswersFile::default();
        assert!(answers.validate().is_ok());
        assert_eq!(answers.age, 18);
        assert_eq!(answers.introversion, SCORE_DEFAULT);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempdir().expect("should create temp dir");
        let path = dir.path().join("answers.json");

        let answers = AnswersFile {
            age: 34,
            gender: Gender::Female,
            education: Education::Graduate,
            introversion: 7.5,
            sensing: 2.0,
            thinking: 9.9,
            judging: 0.0,
            interest: Interest::Technology,
        };
        answers.save(&path).expect("should save");

        let loaded = AnswersFile::load(&path).expect("should load");
        assert_eq!(loaded, answers);
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let answers: AnswersFile =
            serde_json::from_str(r#"{"age": 30, "interest": "Sports"}"#).expect("should parse");

        assert_eq!(answers.age, 30);
        assert_eq!(answers.interest, Interest::Sports);
        assert_eq!(answers.gender, Gender::Male);
        assert_eq!(answers.thinking, SCORE_DEFAULT);
    }

    #[test]
    fn test_validate_rejects_out_of_range_age() {
        let mut answers = AnswersFile::default();

        answers.age = 17;
        assert!(answers.validate().is_err());

        answers.age = 58;
        let err = answers.validate().unwrap_err();
        assert!(err.to_string().contains("18-57"));

        answers.age = 57;
        assert!(answers.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_scores() {
        let mut answers = AnswersFile::default();

        answers.sensing = 10.5;
        let err = answers.validate().unwrap_err();
        assert!(err.to_string().contains("Sensing"));

        answers.sensing = -0.1;
        assert!(answers.validate().is_err());

        answers.sensing = f64::NAN;
        assert!(answers.validate().is_err());

        answers.sensing = SCORE_MAX;
        assert!(answers.validate().is_ok());
    }

    #[test]
    fn test_session_roundtrip_preserves_features() {
        let answers = AnswersFile {
            age: 21,
            gender: Gender::Male,
            education: Education::Undergraduate,
            introversion: 6.6,
            sensing: 3.3,
            thinking: 9.9,
            judging: 0.0,
            interest: Interest::Sports,
        };

        let session = answers.to_session();
        let features = build_feature_vector(&session).expect("fully populated");
        assert_eq!(features.values(), &[21.0, 1.0, 0.0, 6.6, 3.3, 9.9, 0.0, 2.0]);

        let captured = AnswersFile::from_session(&session).expect("fully scored");
        assert_eq!(captured, answers);
    }

    #[test]
    fn test_from_session_requires_scored_axes() {
        let session = SessionState::new(QuestionnaireMode::Detailed);
        let err = AnswersFile::from_session(&session).unwrap_err();
        assert!(err.to_string().contains("Introversion"));
    }

    #[test]
    fn test_load_missing_file_names_the_path() {
        let dir = tempdir().expect("should create temp dir");
        let path = dir.path().join("absent.json");

        let err = AnswersFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
    }
}
