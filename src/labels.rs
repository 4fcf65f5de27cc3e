//! Type-safe label enums for the questionnaire and classifier
//!
//! This module replaces stringly-typed label lookups with proper Rust enums
//! that provide compile-time validation and exhaustive matching. Each enum
//! carries the integer code the classifier was trained against, so
//! conversions are total and checked instead of runtime dictionary lookups.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Gender of the respondent
///
/// Codes follow the training data's label encoding (Female=0, Male=1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[repr(u8)]
pub enum Gender {
    #[strum(serialize = "Female")]
    Female = 0,
    #[default]
    #[strum(serialize = "Male")]
    Male = 1,
}

impl Gender {
    /// Numeric code used in the feature vector
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a classifier-side code, if it is in range
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Female),
            1 => Some(Self::Male),
            _ => None,
        }
    }

    /// Choices in the order the questionnaire presents them
    pub const fn choices() -> &'static [Self] {
        &[Self::Male, Self::Female]
    }
}

/// Highest education level of the respondent
///
/// A binary code like gender: 0 below graduate level, 1 graduate or higher.
/// Not part of the label-mapping resource; the code is fixed by the
/// questionnaire itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[repr(u8)]
pub enum Education {
    #[default]
    #[strum(serialize = "Undergraduate")]
    Undergraduate = 0,
    #[strum(serialize = "Graduate")]
    Graduate = 1,
}

impl Education {
    /// Numeric code used in the feature vector
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a code, if it is in range
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Undergraduate),
            1 => Some(Self::Graduate),
            _ => None,
        }
    }

    /// Long answer text shown on the questionnaire screen
    pub const fn choice_label(self) -> &'static str {
        match self {
            Self::Undergraduate => "Undergraduate/High School/Uneducated",
            Self::Graduate => "Graduate or Higher",
        }
    }

    /// Choices in the order the questionnaire presents them
    pub const fn choices() -> &'static [Self] {
        &[Self::Undergraduate, Self::Graduate]
    }
}

/// Primary area of interest of the respondent
///
/// Codes follow the training data's alphabetical label encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[repr(u8)]
pub enum Interest {
    #[default]
    #[strum(serialize = "Arts")]
    Arts = 0,
    #[strum(serialize = "Others")]
    Others = 1,
    #[strum(serialize = "Sports")]
    Sports = 2,
    #[strum(serialize = "Technology")]
    Technology = 3,
    #[strum(serialize = "Unknown")]
    Unknown = 4,
}

impl Interest {
    /// Numeric code used in the feature vector
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a code, if it is in range
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Arts),
            1 => Some(Self::Others),
            2 => Some(Self::Sports),
            3 => Some(Self::Technology),
            4 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Choices in the order the questionnaire presents them
    /// (display order differs from code order)
    pub const fn choices() -> &'static [Self] {
        &[
            Self::Arts,
            Self::Sports,
            Self::Technology,
            Self::Others,
            Self::Unknown,
        ]
    }
}

/// The sixteen MBTI personality types the classifier can return
///
/// Codes follow the training data's alphabetical label encoding
/// (ENFJ=0 through ISTP=15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum PersonalityType {
    #[strum(serialize = "ENFJ")]
    Enfj = 0,
    #[strum(serialize = "ENFP")]
    Enfp = 1,
    #[strum(serialize = "ENTJ")]
    Entj = 2,
    #[strum(serialize = "ENTP")]
    Entp = 3,
    #[strum(serialize = "ESFJ")]
    Esfj = 4,
    #[strum(serialize = "ESFP")]
    Esfp = 5,
    #[strum(serialize = "ESTJ")]
    Estj = 6,
    #[strum(serialize = "ESTP")]
    Estp = 7,
    #[strum(serialize = "INFJ")]
    Infj = 8,
    #[strum(serialize = "INFP")]
    Infp = 9,
    #[strum(serialize = "INTJ")]
    Intj = 10,
    #[strum(serialize = "INTP")]
    Intp = 11,
    #[strum(serialize = "ISFJ")]
    Isfj = 12,
    #[strum(serialize = "ISFP")]
    Isfp = 13,
    #[strum(serialize = "ISTJ")]
    Istj = 14,
    #[strum(serialize = "ISTP")]
    Istp = 15,
}

impl PersonalityType {
    /// Numeric code used by the classifier
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a classifier-side code, if it is in range
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Enfj),
            1 => Some(Self::Enfp),
            2 => Some(Self::Entj),
            3 => Some(Self::Entp),
            4 => Some(Self::Esfj),
            5 => Some(Self::Esfp),
            6 => Some(Self::Estj),
            7 => Some(Self::Estp),
            8 => Some(Self::Infj),
            9 => Some(Self::Infp),
            10 => Some(Self::Intj),
            11 => Some(Self::Intp),
            12 => Some(Self::Isfj),
            13 => Some(Self::Isfp),
            14 => Some(Self::Istj),
            15 => Some(Self::Istp),
            _ => None,
        }
    }

    /// Compose a type from its four axis poles.
    ///
    /// The flags name the first pole of each axis: Extraversion (vs
    /// Introversion), Sensing (vs Intuition), Thinking (vs Feeling),
    /// Judging (vs Perceiving).
    pub const fn from_axes(
        extraverted: bool,
        sensing: bool,
        thinking: bool,
        judging: bool,
    ) -> Self {
        match (extraverted, sensing, thinking, judging) {
            (true, true, true, true) => Self::Estj,
            (true, true, true, false) => Self::Estp,
            (true, true, false, true) => Self::Esfj,
            (true, true, false, false) => Self::Esfp,
            (true, false, true, true) => Self::Entj,
            (true, false, true, false) => Self::Entp,
            (true, false, false, true) => Self::Enfj,
            (true, false, false, false) => Self::Enfp,
            (false, true, true, true) => Self::Istj,
            (false, true, true, false) => Self::Istp,
            (false, true, false, true) => Self::Isfj,
            (false, true, false, false) => Self::Isfp,
            (false, false, true, true) => Self::Intj,
            (false, false, true, false) => Self::Intp,
            (false, false, false, true) => Self::Infj,
            (false, false, false, false) => Self::Infp,
        }
    }

    /// True for the eight Extraversion types
    pub const fn is_extraverted(self) -> bool {
        matches!(
            self,
            Self::Enfj
                | Self::Enfp
                | Self::Entj
                | Self::Entp
                | Self::Esfj
                | Self::Esfp
                | Self::Estj
                | Self::Estp
        )
    }

    /// True for the eight Sensing types
    pub const fn is_sensing(self) -> bool {
        matches!(
            self,
            Self::Esfj
                | Self::Esfp
                | Self::Estj
                | Self::Estp
                | Self::Isfj
                | Self::Isfp
                | Self::Istj
                | Self::Istp
        )
    }

    /// True for the eight Thinking types
    pub const fn is_thinking(self) -> bool {
        matches!(
            self,
            Self::Entj
                | Self::Entp
                | Self::Estj
                | Self::Estp
                | Self::Intj
                | Self::Intp
                | Self::Istj
                | Self::Istp
        )
    }

    /// True for the eight Judging types
    pub const fn is_judging(self) -> bool {
        matches!(
            self,
            Self::Enfj
                | Self::Entj
                | Self::Esfj
                | Self::Estj
                | Self::Infj
                | Self::Intj
                | Self::Isfj
                | Self::Istj
        )
    }

    /// Built-in description shown on the result screen.
    ///
    /// An external descriptions file can replace these texts.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Enfj => {
                "The Protagonist: warm, charismatic, and driven to help others grow. \
                 ENFJs organize people around a shared vision and lead through encouragement."
            }
            Self::Enfp => {
                "The Campaigner: enthusiastic, imaginative, and sociable. \
                 ENFPs see possibilities everywhere and energize the people around them."
            }
            Self::Entj => {
                "The Commander: bold, strategic, and decisive. \
                 ENTJs set ambitious goals and mobilize others to reach them."
            }
            Self::Entp => {
                "The Debater: quick-witted, curious, and unafraid of challenge. \
                 ENTPs enjoy dismantling assumptions and exploring new ideas."
            }
            Self::Esfj => {
                "The Consul: caring, sociable, and dependable. \
                 ESFJs look after the practical needs of their community."
            }
            Self::Esfp => {
                "The Entertainer: spontaneous, energetic, and fun-loving. \
                 ESFPs live in the moment and bring others along with them."
            }
            Self::Estj => {
                "The Executive: organized, direct, and tradition-minded. \
                 ESTJs manage people and projects with clear rules and follow-through."
            }
            Self::Estp => {
                "The Entrepreneur: bold, pragmatic, and action-oriented. \
                 ESTPs think on their feet and thrive in fast-moving situations."
            }
            Self::Infj => {
                "The Advocate: insightful, principled, and quietly inspiring. \
                 INFJs pursue deeply held ideals with steady determination."
            }
            Self::Infp => {
                "The Mediator: idealistic, empathetic, and loyal to their values. \
                 INFPs seek harmony and meaning in everything they do."
            }
            Self::Intj => {
                "The Architect: independent, analytical, and strategic. \
                 INTJs build long-range plans and hold themselves to high standards."
            }
            Self::Intp => {
                "The Logician: inventive, abstract, and relentlessly curious. \
                 INTPs take ideas apart to understand how the world works."
            }
            Self::Isfj => {
                "The Defender: devoted, meticulous, and protective. \
                 ISFJs quietly take care of the people and duties entrusted to them."
            }
            Self::Isfp => {
                "The Adventurer: gentle, flexible, and artistic. \
                 ISFPs explore the world through the senses and value personal freedom."
            }
            Self::Istj => {
                "The Logistician: practical, reliable, and thorough. \
                 ISTJs honor their commitments and keep things running as promised."
            }
            Self::Istp => {
                "The Virtuoso: hands-on, observant, and coolly rational. \
                 ISTPs master tools and systems and stay calm under pressure."
            }
        }
    }
}
