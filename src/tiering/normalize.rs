use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::models::{Amount, Basis, FoodProfile, Nutrient, Unit};
use crate::reference::{ReferenceEntry, ReferenceLookup};
use crate::tiering::constants::DENSITY_BASIS_GRAMS;

/// State of one nutrient after all its listed components are merged.
#[derive(Debug, Clone, PartialEq)]
pub enum NutrientDensity {
    /// No reference entry; treated as neutral with zero weight.
    Unrecognized,
    /// The reference entry failed validation (non-positive RDI, weight
    /// outside [0, 1]); never scored.
    InvalidReference,
    Resolved {
        entry: ReferenceEntry,
        /// Sum of the known amounts on the chosen basis, in `entry.unit`.
        density: Option<f64>,
        /// At least one listed component had no quantity.
        missing: bool,
        /// First unit that could not be converted to `entry.unit`.
        incompatible: Option<Unit>,
    },
}

/// A profile reduced to per-nutrient densities on a single basis.
#[derive(Debug, Clone)]
pub struct NormalizedProfile {
    pub basis: Basis,
    pub calories_known: bool,
    pub nutrients: BTreeMap<Nutrient, NutrientDensity>,
}

/// Scale factor from a per-serving amount to the chosen basis.
fn basis_for(profile: &FoodProfile) -> (Basis, f64) {
    match profile.serving_total_grams() {
        Some(grams) if grams > 0.0 => (Basis::Per100Grams, DENSITY_BASIS_GRAMS / grams),
        _ => (Basis::PerServing, 1.0),
    }
}

/// Convert every component to a density against its reference entry.
///
/// Repeated entries of the same nutrient are summed.
pub fn normalize<R: ReferenceLookup + ?Sized>(
    profile: &FoodProfile,
    reference: &R,
) -> NormalizedProfile {
    let (basis, factor) = basis_for(profile);
    let mut nutrients: BTreeMap<Nutrient, NutrientDensity> = BTreeMap::new();

    for component in profile.components() {
        let Some(entry) = reference.lookup(component.name) else {
            trace!(nutrient = component.name.key(), "no reference entry");
            nutrients.insert(component.name, NutrientDensity::Unrecognized);
            continue;
        };

        // Lookups over raw maps bypass table validation.
        if let Err(e) = entry.validate(component.name) {
            debug!(nutrient = component.name.key(), error = %e, "rejected reference entry");
            nutrients.insert(component.name, NutrientDensity::InvalidReference);
            continue;
        }

        let state = nutrients
            .entry(component.name)
            .or_insert(NutrientDensity::Resolved {
                entry,
                density: None,
                missing: false,
                incompatible: None,
            });

        let NutrientDensity::Resolved {
            density,
            missing,
            incompatible,
            ..
        } = state
        else {
            continue;
        };

        // Conversions are linear, so the factor for one unit scales any amount.
        // Compatibility is checked even when the quantity is unknown.
        let Some(per_unit) = component.unit.convert(1.0, entry.unit, component.name) else {
            trace!(
                nutrient = component.name.key(),
                unit = component.unit.symbol(),
                expected = entry.unit.symbol(),
                "unconvertible unit"
            );
            incompatible.get_or_insert(component.unit);
            continue;
        };

        match component.amount {
            Amount::Known(value) => {
                *density = Some(density.unwrap_or(0.0) + value * per_unit * factor);
            }
            Amount::Unknown => *missing = true,
        }
    }

    NormalizedProfile {
        basis,
        calories_known: profile.calorie_amount().is_some(),
        nutrients,
    }
}
