//! Label mapping and description resources.
//!
//! The label codes the classifier was trained against are compiled into the
//! enums in [`crate::labels`]. Deployments that ship a `label_mappings.json`
//! next to their model can still point the app at it: the file is loaded
//! once at startup and verified against the compiled-in tables, so a
//! model/mapping mismatch is caught before any prediction runs instead of
//! surfacing as a wrong personality name.
//!
//! Result-screen descriptions follow the same pattern: a built-in set
//! covers all sixteen types, and an external JSON file can replace it.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;

use crate::labels::{Gender, Interest, PersonalityType};

/// Text shown when a loaded description set has no entry for a type
pub const DESCRIPTION_FALLBACK: &str = "No description available.";

/// On-disk label mapping, as produced by the model training pipeline.
///
/// Three named sections, each mapping a human-readable label to the numeric
/// code the classifier uses for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelMappingFile {
    #[serde(rename = "Gender")]
    pub gender: BTreeMap<String, i64>,
    #[serde(rename = "Interest")]
    pub interest: BTreeMap<String, i64>,
    #[serde(rename = "Personality")]
    pub personality: BTreeMap<String, i64>,
}

impl LabelMappingFile {
    /// The mapping the enums are compiled against
    pub fn builtin() -> Self {
        Self {
            gender: Gender::iter()
                .map(|g| (g.to_string(), g.code() as i64))
                .collect(),
            interest: Interest::iter()
                .map(|i| (i.to_string(), i.code() as i64))
                .collect(),
            personality: PersonalityType::iter()
                .map(|p| (p.to_string(), p.code() as i64))
                .collect(),
        }
    }

    /// Load a label mapping from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json_string = fs::read_to_string(path)
            .with_context(|| format!("Failed to read label mapping file: {}", path.display()))?;

        let mapping: Self = serde_json::from_str(&json_string)
            .with_context(|| format!("Failed to parse label mapping file: {}", path.display()))?;

        Ok(mapping)
    }

    /// Save this mapping as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json_string =
            serde_json::to_string_pretty(self).context("Failed to serialize label mapping")?;

        fs::write(path, json_string)
            .with_context(|| format!("Failed to write label mapping file: {}", path.display()))?;

        Ok(())
    }

    /// Load a mapping file and verify it against the compiled-in tables
    pub fn load_verified(path: &Path) -> Result<Self> {
        let mapping = Self::load(path)?;
        mapping
            .validate()
            .with_context(|| format!("Label mapping file rejected: {}", path.display()))?;
        Ok(mapping)
    }

    /// Verify every section against the compiled-in label tables.
    ///
    /// A renamed label, a shifted code, a missing entry, or an extra entry
    /// all fail: any of them means the model this mapping came from
    /// disagrees with the codes this build produces and consumes.
    pub fn validate(&self) -> Result<()> {
        let builtin = Self::builtin();
        check_section("Gender", &self.gender, &builtin.gender)?;
        check_section("Interest", &self.interest, &builtin.interest)?;
        check_section("Personality", &self.personality, &builtin.personality)?;
        Ok(())
    }
}

impl Default for LabelMappingFile {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_section(
    name: &str,
    found: &BTreeMap<String, i64>,
    expected: &BTreeMap<String, i64>,
) -> Result<()> {
    for (label, code) in expected {
        match found.get(label) {
            Some(c) if c == code => {}
            Some(c) => bail!(
                "{} mapping assigns code {} to '{}', expected {}",
                name,
                c,
                label,
                code
            ),
            None => bail!("{} mapping has no entry for '{}'", name, label),
        }
    }

    if let Some(extra) = found.keys().find(|label| !expected.contains_key(*label)) {
        bail!("{} mapping has an unexpected entry '{}'", name, extra);
    }

    Ok(())
}

/// Result-screen descriptions keyed by personality name.
///
/// Serialized as a flat JSON object, e.g. `{"INTJ": "The Architect: ..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptions {
    entries: BTreeMap<String, String>,
}

impl Descriptions {
    /// The built-in description set, covering all sixteen types
    pub fn builtin() -> Self {
        Self {
            entries: PersonalityType::iter()
                .map(|p| (p.to_string(), p.description().to_string()))
                .collect(),
        }
    }

    /// Load descriptions from a JSON file, replacing the built-in set
    pub fn load(path: &Path) -> Result<Self> {
        let json_string = fs::read_to_string(path)
            .with_context(|| format!("Failed to read descriptions file: {}", path.display()))?;

        let descriptions: Self = serde_json::from_str(&json_string)
            .with_context(|| format!("Failed to parse descriptions file: {}", path.display()))?;

        Ok(descriptions)
    }

    /// Save this description set as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json_string =
            serde_json::to_string_pretty(self).context("Failed to serialize descriptions")?;

        fs::write(path, json_string)
            .with_context(|| format!("Failed to write descriptions file: {}", path.display()))?;

        Ok(())
    }

    /// Description text for a personality type.
    ///
    /// Falls back to a placeholder when the loaded set has no entry, so the
    /// result screen always has something to show.
    pub fn describe(&self, personality: PersonalityType) -> &str {
        self.entries
            .get(&personality.to_string())
            .map(String::as_str)
            .unwrap_or(DESCRIPTION_FALLBACK)
    }

    /// Types this set has no text for
    pub fn missing(&self) -> Vec<PersonalityType> {
        PersonalityType::iter()
            .filter(|p| !self.entries.contains_key(&p.to_string()))
            .collect()
    }
}
