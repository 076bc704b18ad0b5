use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use strsim::jaro_winkler;

use crate::error::TierError;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// A nutrient label from the fixed catalog.
///
/// Labels serialize as camelCase keys (`saturatedFat`, `vitaminB12`, ...).
/// Parsing is lenient about case and separators, so `saturated_fat` and
/// `Saturated Fat` resolve to the same nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Nutrient {
    Protein,
    Fiber,
    Sugar,
    AddedSugar,
    Sodium,
    SaturatedFat,
    TransFat,
    TotalFat,
    Cholesterol,
    Carbohydrate,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    VitaminB6,
    VitaminB12,
    Folate,
    Calcium,
    Iron,
    Potassium,
    Magnesium,
    Zinc,
}

impl Nutrient {
    pub const ALL: [Nutrient; 23] = [
        Nutrient::Protein,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::AddedSugar,
        Nutrient::Sodium,
        Nutrient::SaturatedFat,
        Nutrient::TransFat,
        Nutrient::TotalFat,
        Nutrient::Cholesterol,
        Nutrient::Carbohydrate,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::VitaminB6,
        Nutrient::VitaminB12,
        Nutrient::Folate,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Potassium,
        Nutrient::Magnesium,
        Nutrient::Zinc,
    ];

    /// Canonical camelCase key. Also the tie-break order for reasons.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Protein => "protein",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::AddedSugar => "addedSugar",
            Nutrient::Sodium => "sodium",
            Nutrient::SaturatedFat => "saturatedFat",
            Nutrient::TransFat => "transFat",
            Nutrient::TotalFat => "totalFat",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::Carbohydrate => "carbohydrate",
            Nutrient::VitaminA => "vitaminA",
            Nutrient::VitaminC => "vitaminC",
            Nutrient::VitaminD => "vitaminD",
            Nutrient::VitaminE => "vitaminE",
            Nutrient::VitaminK => "vitaminK",
            Nutrient::VitaminB6 => "vitaminB6",
            Nutrient::VitaminB12 => "vitaminB12",
            Nutrient::Folate => "folate",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Potassium => "potassium",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Zinc => "zinc",
        }
    }

    /// Human-readable name used in reason messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Nutrient::Protein => "protein",
            Nutrient::Fiber => "fiber",
            Nutrient::Sugar => "sugar",
            Nutrient::AddedSugar => "added sugar",
            Nutrient::Sodium => "sodium",
            Nutrient::SaturatedFat => "saturated fat",
            Nutrient::TransFat => "trans fat",
            Nutrient::TotalFat => "total fat",
            Nutrient::Cholesterol => "cholesterol",
            Nutrient::Carbohydrate => "carbohydrate",
            Nutrient::VitaminA => "vitamin A",
            Nutrient::VitaminC => "vitamin C",
            Nutrient::VitaminD => "vitamin D",
            Nutrient::VitaminE => "vitamin E",
            Nutrient::VitaminK => "vitamin K",
            Nutrient::VitaminB6 => "vitamin B6",
            Nutrient::VitaminB12 => "vitamin B12",
            Nutrient::Folate => "folate",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Potassium => "potassium",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Zinc => "zinc",
        }
    }

    /// Closest catalog key to an unrecognized label, if any is close enough.
    pub fn suggest(label: &str) -> Option<&'static str> {
        let needle = normalize_label(label);
        Nutrient::ALL
            .iter()
            .map(|n| (n.key(), jaro_winkler(&normalize_label(n.key()), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(key, _)| key)
    }
}

/// Lowercase and drop separators so `Vitamin_B12` matches `vitaminB12`.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Nutrient {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = normalize_label(s);
        Nutrient::ALL
            .into_iter()
            .find(|n| normalize_label(n.key()) == needle)
            .ok_or_else(|| TierError::UnknownNutrient {
                label: s.to_string(),
                suggestion: Nutrient::suggest(s).map(str::to_string),
            })
    }
}

impl TryFrom<String> for Nutrient {
    type Error = TierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Nutrient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Measurement unit of a component amount or a reference intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Unit {
    Grams,
    Milligrams,
    Micrograms,
    Kilocalories,
    InternationalUnits,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milligrams => "mg",
            Unit::Micrograms => "µg",
            Unit::Kilocalories => "kcal",
            Unit::InternationalUnits => "IU",
        }
    }

    /// Grams per one unit, for mass units only.
    fn grams_per_unit(self) -> Option<f64> {
        match self {
            Unit::Grams => Some(1.0),
            Unit::Milligrams => Some(1e-3),
            Unit::Micrograms => Some(1e-6),
            Unit::Kilocalories | Unit::InternationalUnits => None,
        }
    }

    /// Convert `amount` from `self` into `target` for the given nutrient.
    ///
    /// Mass units convert freely. International units only convert for the
    /// vitamins with a fixed IU activity factor. Anything else is `None`.
    pub fn convert(self, amount: f64, target: Unit, nutrient: Nutrient) -> Option<f64> {
        if self == target {
            return Some(amount);
        }

        let to_grams = match (self, self.grams_per_unit()) {
            (_, Some(g)) => amount * g,
            (Unit::InternationalUnits, None) => amount * iu_in_grams(nutrient)?,
            _ => return None,
        };

        match (target, target.grams_per_unit()) {
            (_, Some(g)) => Some(to_grams / g),
            (Unit::InternationalUnits, None) => Some(to_grams / iu_in_grams(nutrient)?),
            _ => None,
        }
    }
}

/// Mass of one international unit of activity.
fn iu_in_grams(nutrient: Nutrient) -> Option<f64> {
    match nutrient {
        Nutrient::VitaminA => Some(0.3e-6),
        Nutrient::VitaminD => Some(0.025e-6),
        Nutrient::VitaminE => Some(0.67e-3),
        _ => None,
    }
}

impl FromStr for Unit {
    type Err = TierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gram" | "grams" => Ok(Unit::Grams),
            "mg" | "milligram" | "milligrams" => Ok(Unit::Milligrams),
            "µg" | "μg" | "ug" | "mcg" | "microgram" | "micrograms" => Ok(Unit::Micrograms),
            "kcal" | "kilocalorie" | "kilocalories" => Ok(Unit::Kilocalories),
            "iu" | "international_units" => Ok(Unit::InternationalUnits),
            _ => Err(TierError::UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = TierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
