use serde::{Deserialize, Serialize};

use crate::error::{Result, TierError};
use crate::models::nutrient::{Nutrient, Unit};

/// Quantity of a listed component.
///
/// `Unknown` means the nutrient is listed but its quantity is not; a nutrient
/// missing from the component list entirely is a different case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Amount {
    Known(f64),
    Unknown,
}

impl Amount {
    pub fn value(self) -> Option<f64> {
        match self {
            Amount::Known(v) => Some(v),
            Amount::Unknown => None,
        }
    }
}

impl From<Option<f64>> for Amount {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Amount::Unknown, Amount::Known)
    }
}

impl From<Amount> for Option<f64> {
    fn from(value: Amount) -> Self {
        value.value()
    }
}

/// One named nutrient entry of a food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentAmount {
    pub name: Nutrient,
    pub unit: Unit,
    #[serde(default = "unknown_amount")]
    pub amount: Amount,
}

fn unknown_amount() -> Amount {
    Amount::Unknown
}

impl ComponentAmount {
    pub fn new(name: Nutrient, unit: Unit, amount: f64) -> Self {
        Self {
            name,
            unit,
            amount: Amount::Known(amount),
        }
    }

    /// A component listed without a quantity.
    pub fn unknown(name: Nutrient, unit: Unit) -> Self {
        Self {
            name,
            unit,
            amount: Amount::Unknown,
        }
    }
}

/// Plain wire shape of a food profile, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodProfileRecord {
    #[serde(default)]
    pub serving_total_grams: Option<f64>,
    #[serde(default)]
    pub calorie_amount: Option<f64>,
    #[serde(default)]
    pub components: Vec<ComponentAmount>,
}

/// Nutritional profile of one food or meal.
///
/// Only constructible through [`FoodProfile::new`] (serde goes through it as
/// well), so every profile that reaches the engine has non-negative, finite
/// quantities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FoodProfileRecord", into = "FoodProfileRecord")]
pub struct FoodProfile {
    serving_total_grams: Option<f64>,
    calorie_amount: Option<f64>,
    components: Vec<ComponentAmount>,
}

fn check_quantity(what: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TierError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            what, value
        )));
    }
    Ok(())
}

impl FoodProfile {
    pub fn new(
        serving_total_grams: Option<f64>,
        calorie_amount: Option<f64>,
        components: Vec<ComponentAmount>,
    ) -> Result<Self> {
        if let Some(grams) = serving_total_grams {
            check_quantity("servingTotalGrams", grams)?;
        }
        if let Some(kcal) = calorie_amount {
            check_quantity("calorieAmount", kcal)?;
        }
        for component in &components {
            if let Amount::Known(v) = component.amount {
                check_quantity(&format!("amount of {}", component.name.key()), v)?;
            }
        }

        Ok(Self {
            serving_total_grams,
            calorie_amount,
            components,
        })
    }

    /// Profile with no nutrient data at all.
    pub fn empty() -> Self {
        Self {
            serving_total_grams: None,
            calorie_amount: None,
            components: Vec::new(),
        }
    }

    /// Combine several foods into one meal profile.
    ///
    /// Serving mass and calories add up; either becomes unknown as soon as one
    /// part lacks it. Components are concatenated in input order.
    pub fn meal(parts: &[FoodProfile]) -> Self {
        if parts.is_empty() {
            return Self::empty();
        }

        Self {
            serving_total_grams: parts.iter().map(|p| p.serving_total_grams).sum(),
            calorie_amount: parts.iter().map(|p| p.calorie_amount).sum(),
            components: parts
                .iter()
                .flat_map(|p| p.components.iter().cloned())
                .collect(),
        }
    }

    pub fn serving_total_grams(&self) -> Option<f64> {
        self.serving_total_grams
    }

    pub fn calorie_amount(&self) -> Option<f64> {
        self.calorie_amount
    }

    pub fn components(&self) -> &[ComponentAmount] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl TryFrom<FoodProfileRecord> for FoodProfile {
    type Error = TierError;

    fn try_from(record: FoodProfileRecord) -> Result<Self> {
        FoodProfile::new(
            record.serving_total_grams,
            record.calorie_amount,
            record.components,
        )
    }
}

impl From<FoodProfile> for FoodProfileRecord {
    fn from(profile: FoodProfile) -> Self {
        Self {
            serving_total_grams: profile.serving_total_grams,
            calorie_amount: profile.calorie_amount,
            components: profile.components,
        }
    }
}
