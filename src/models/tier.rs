use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::nutrient::{Nutrient, Unit};
use crate::tiering::TierThresholds;

/// Letter grade, `S` best and `F` worst.
///
/// The derived ordering follows declaration order, so `Tier::S < Tier::F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Tier {
    pub const ALL: [Tier; 7] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D, Tier::E, Tier::F];

    pub fn code(self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
            Tier::E => "E",
            Tier::F => "F",
        }
    }

    pub fn from_score(score: f64, thresholds: &TierThresholds) -> Tier {
        thresholds.tier_for(score)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Density basis the amounts were normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Basis {
    Per100Grams,
    PerServing,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Per100Grams => f.write_str("per 100 g"),
            Basis::PerServing => f.write_str("per serving"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonKind {
    Positive,
    Negative,
    Info,
}

/// Structured cause behind a reason. Message text is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReasonCode {
    #[serde(rename_all = "camelCase")]
    GoodSource {
        nutrient: Nutrient,
        percent_of_rdi: f64,
        basis: Basis,
    },
    #[serde(rename_all = "camelCase")]
    HighIn {
        nutrient: Nutrient,
        percent_of_rdi: f64,
        basis: Basis,
    },
    ServingSizeUnknown,
    CaloriesUnknown,
    MissingAmount {
        nutrient: Nutrient,
    },
    IncompatibleUnit {
        nutrient: Nutrient,
        unit: Unit,
        expected: Unit,
    },
    UnrecognizedComponent {
        nutrient: Nutrient,
    },
    InvalidReference {
        nutrient: Nutrient,
    },
    NoNutrientData,
    NoStandoutNutrients,
}

impl ReasonCode {
    pub fn kind(&self) -> ReasonKind {
        match self {
            ReasonCode::GoodSource { .. } => ReasonKind::Positive,
            ReasonCode::HighIn { .. } => ReasonKind::Negative,
            _ => ReasonKind::Info,
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasonCode::GoodSource {
                nutrient,
                percent_of_rdi,
                basis,
            } => write!(
                f,
                "Good source of {} ({:.0}% of daily value {})",
                nutrient, percent_of_rdi, basis
            ),
            ReasonCode::HighIn {
                nutrient,
                percent_of_rdi,
                basis,
            } => write!(
                f,
                "High in {} ({:.0}% of daily limit {})",
                nutrient, percent_of_rdi, basis
            ),
            ReasonCode::ServingSizeUnknown => {
                f.write_str("Serving size unknown, amounts compared per serving")
            }
            ReasonCode::CaloriesUnknown => f.write_str("Calorie amount unknown"),
            ReasonCode::MissingAmount { nutrient } => {
                write!(f, "Amount of {} unknown, not scored", nutrient)
            }
            ReasonCode::IncompatibleUnit {
                nutrient,
                unit,
                expected,
            } => write!(
                f,
                "{} given in {} cannot be compared to {}, ignored in scoring",
                nutrient, unit, expected
            ),
            ReasonCode::UnrecognizedComponent { nutrient } => {
                write!(f, "Unrecognized component {}, ignored in scoring", nutrient)
            }
            ReasonCode::InvalidReference { nutrient } => {
                write!(f, "Reference data for {} is invalid, not scored", nutrient)
            }
            ReasonCode::NoNutrientData => f.write_str("No nutrient data available"),
            ReasonCode::NoStandoutNutrients => f.write_str("No standout nutrients"),
        }
    }
}

/// One explanation line of a tier result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub kind: ReasonKind,
    pub code: ReasonCode,
    pub message: String,
}

impl From<ReasonCode> for Reason {
    fn from(code: ReasonCode) -> Self {
        Self {
            kind: code.kind(),
            message: code.to_string(),
            code,
        }
    }
}

/// Outcome of grading one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodTierResult {
    pub tier: Tier,
    pub score: f64,
    pub reasons: Vec<Reason>,
    pub is_estimate: bool,
}
