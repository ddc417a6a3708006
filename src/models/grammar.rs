//! Grammatical categories of a Latin noun form.
//!
//! Every category is a closed enum. Sub-attributes that only some declensions
//! admit (gender, stem type) live inside [`Paradigm`], so a gender on the 1st
//! declension or a type on the 2nd cannot be expressed.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a grammatical category from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGrammarError {
    #[error("declension must be a number from 1 to 5, got `{0}`")]
    Declension(String),

    #[error("unknown case `{0}`")]
    Case(String),
}

/// One of the five Latin noun declensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Declension {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

impl Declension {
    pub const ALL: [Declension; 5] = [
        Declension::First,
        Declension::Second,
        Declension::Third,
        Declension::Fourth,
        Declension::Fifth,
    ];

    /// The declension's ordinal number, `1..=5`.
    pub fn number(self) -> u8 {
        match self {
            Declension::First => 1,
            Declension::Second => 2,
            Declension::Third => 3,
            Declension::Fourth => 4,
            Declension::Fifth => 5,
        }
    }

    pub fn ordinal_suffix(self) -> &'static str {
        match self {
            Declension::First => "st",
            Declension::Second => "nd",
            Declension::Third => "rd",
            Declension::Fourth | Declension::Fifth => "th",
        }
    }
}

impl TryFrom<u8> for Declension {
    type Error = ParseGrammarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Declension::First),
            2 => Ok(Declension::Second),
            3 => Ok(Declension::Third),
            4 => Ok(Declension::Fourth),
            5 => Ok(Declension::Fifth),
            other => Err(ParseGrammarError::Declension(other.to_string())),
        }
    }
}

impl From<Declension> for u8 {
    fn from(declension: Declension) -> Self {
        declension.number()
    }
}

impl FromStr for Declension {
    type Err = ParseGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| ParseGrammarError::Declension(trimmed.to_string()))
            .and_then(Declension::try_from)
    }
}

impl fmt::Display for Declension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} Declension", self.number(), self.ordinal_suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    /// Fixed iteration order used by the option samplers.
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Number::Singular
        } else {
            Number::Plural
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Number::Singular => "Singular",
            Number::Plural => "Plural",
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Case {
    Nominative,
    Vocative,
    Accusative,
    Genitive,
    Dative,
    Ablative,
    Locative,
}

impl Case {
    pub const ALL: [Case; 7] = [
        Case::Nominative,
        Case::Vocative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
        Case::Ablative,
        Case::Locative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Case::Nominative => "Nominative",
            Case::Vocative => "Vocative",
            Case::Accusative => "Accusative",
            Case::Genitive => "Genitive",
            Case::Dative => "Dative",
            Case::Ablative => "Ablative",
            Case::Locative => "Locative",
        }
    }
}

impl FromStr for Case {
    type Err = ParseGrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Case::ALL
            .into_iter()
            .find(|case| case.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseGrammarError::Case(trimmed.to_string()))
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Masculine => "Masculine",
            Gender::Feminine => "Feminine",
            Gender::Neuter => "Neuter",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stem class of a 3rd declension noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    /// Consonant stem (`rēx, rēgis`).
    Pure,
    /// Mixed i-stem (`urbs, urbis`, genitive plural `-ium`).
    Mixed,
}

impl Stem {
    pub fn as_str(self) -> &'static str {
        match self {
            Stem::Pure => "Pure",
            Stem::Mixed => "Mixed",
        }
    }
}

/// Nominative type of a 4th declension noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FourthKind {
    #[serde(rename = "us")]
    Us,
    #[serde(rename = "u")]
    U,
}

impl FourthKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FourthKind::Us => "us",
            FourthKind::U => "u",
        }
    }
}

/// Nominative type of a 5th declension noun; `ies` nouns keep a long `ē`
/// before the genitive and dative `-ī`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FifthKind {
    #[serde(rename = "ies")]
    Ies,
    #[serde(rename = "es")]
    Es,
}

impl FifthKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FifthKind::Ies => "ies",
            FifthKind::Es => "es",
        }
    }
}

/// A declension together with the sub-attributes that select one concrete
/// ending table.
///
/// `None` means "unspecified": lookups fall back to the declension's default
/// (Masculine, Pure, `us`, `ies`) and descriptions omit the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "declension")]
pub enum Paradigm {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second { gender: Option<Gender> },
    #[serde(rename = "3")]
    Third {
        gender: Option<Gender>,
        #[serde(rename = "type")]
        stem: Option<Stem>,
    },
    #[serde(rename = "4")]
    Fourth {
        #[serde(rename = "type")]
        kind: Option<FourthKind>,
    },
    #[serde(rename = "5")]
    Fifth {
        #[serde(rename = "type")]
        kind: Option<FifthKind>,
    },
}

impl Paradigm {
    /// Paradigm of `declension` with every sub-attribute left unspecified.
    pub fn unspecified(declension: Declension) -> Self {
        match declension {
            Declension::First => Paradigm::First,
            Declension::Second => Paradigm::Second { gender: None },
            Declension::Third => Paradigm::Third {
                gender: None,
                stem: None,
            },
            Declension::Fourth => Paradigm::Fourth { kind: None },
            Declension::Fifth => Paradigm::Fifth { kind: None },
        }
    }

    /// Picks gender and type uniformly among the values `declension` admits.
    ///
    /// Random 2nd declension genders are Masculine or Neuter only.
    pub fn random<R: Rng + ?Sized>(declension: Declension, rng: &mut R) -> Self {
        match declension {
            Declension::First => Paradigm::First,
            Declension::Second => {
                let gender = if rng.gen_bool(0.5) {
                    Gender::Masculine
                } else {
                    Gender::Neuter
                };
                Paradigm::Second {
                    gender: Some(gender),
                }
            }
            Declension::Third => {
                let genders = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
                let gender = genders[rng.gen_range(0..genders.len())];
                let stem = if rng.gen_bool(0.5) {
                    Stem::Pure
                } else {
                    Stem::Mixed
                };
                Paradigm::Third {
                    gender: Some(gender),
                    stem: Some(stem),
                }
            }
            Declension::Fourth => {
                let kind = if rng.gen_bool(0.5) {
                    FourthKind::Us
                } else {
                    FourthKind::U
                };
                Paradigm::Fourth { kind: Some(kind) }
            }
            Declension::Fifth => {
                let kind = if rng.gen_bool(0.5) {
                    FifthKind::Ies
                } else {
                    FifthKind::Es
                };
                Paradigm::Fifth { kind: Some(kind) }
            }
        }
    }

    pub fn declension(&self) -> Declension {
        match self {
            Paradigm::First => Declension::First,
            Paradigm::Second { .. } => Declension::Second,
            Paradigm::Third { .. } => Declension::Third,
            Paradigm::Fourth { .. } => Declension::Fourth,
            Paradigm::Fifth { .. } => Declension::Fifth,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match *self {
            Paradigm::Second { gender } | Paradigm::Third { gender, .. } => gender,
            _ => None,
        }
    }

    /// Label of the type sub-attribute (`Pure`, `us`, `ies`, ...), if set.
    pub fn type_label(&self) -> Option<&'static str> {
        match *self {
            Paradigm::Third { stem, .. } => stem.map(Stem::as_str),
            Paradigm::Fourth { kind } => kind.map(FourthKind::as_str),
            Paradigm::Fifth { kind } => kind.map(FifthKind::as_str),
            _ => None,
        }
    }
}
