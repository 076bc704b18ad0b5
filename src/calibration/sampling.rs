use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{ComponentAmount, FoodProfile, Nutrient, Unit};
use crate::reference::ReferenceLookup;

/// Bounds for randomly generated profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRanges {
    /// Number of listed nutrients per profile (min, max).
    pub components: (usize, usize),
    /// Serving mass in grams (min, max).
    pub serving_grams: (f64, f64),
    /// Calories per serving (min, max).
    pub calories: (f64, f64),
    /// Density per 100 g as a fraction of the RDI (min, max).
    pub rdi_fraction: (f64, f64),
    /// Chance that the serving mass is unknown.
    pub serving_missing_rate: f64,
    /// Chance that the calorie amount is unknown.
    pub calories_missing_rate: f64,
    /// Chance that a listed component has no quantity.
    pub amount_missing_rate: f64,
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            components: (1, 8),
            serving_grams: (20.0, 400.0),
            calories: (0.0, 800.0),
            rdi_fraction: (0.0, 1.5),
            serving_missing_rate: 0.1,
            calories_missing_rate: 0.1,
            amount_missing_rate: 0.05,
        }
    }
}

impl SampleRanges {
    /// Ranges with every field clamped into a usable order.
    pub fn sanitized(&self) -> Self {
        // Profiles reject negative or non-finite quantities.
        let order = |(a, b): (f64, f64)| {
            let (a, b) = (non_negative(a), non_negative(b));
            if a <= b { (a, b) } else { (b, a) }
        };
        let rate = |r: f64| if r.is_nan() { 0.0 } else { r.clamp(0.0, 1.0) };
        let max_components = self.components.1.clamp(1, Nutrient::ALL.len());
        Self {
            components: (self.components.0.clamp(1, max_components), max_components),
            serving_grams: order(self.serving_grams),
            calories: order(self.calories),
            rdi_fraction: order(self.rdi_fraction),
            serving_missing_rate: rate(self.serving_missing_rate),
            calories_missing_rate: rate(self.calories_missing_rate),
            amount_missing_rate: rate(self.amount_missing_rate),
        }
    }
}

fn non_negative(x: f64) -> f64 {
    if x.is_finite() { x.max(0.0) } else { 0.0 }
}

/// Generate one random, valid profile.
///
/// Amounts are drawn as fractions of each nutrient's RDI per 100 g and then
/// scaled to the serving, so the generated densities cover the scoring range
/// evenly.
pub fn random_profile<R: ReferenceLookup + ?Sized>(
    rng: &mut impl Rng,
    reference: &R,
    ranges: &SampleRanges,
) -> FoodProfile {
    let ranges = ranges.sanitized();

    let serving = if rng.gen_bool(ranges.serving_missing_rate) {
        None
    } else {
        Some(rng.gen_range(ranges.serving_grams.0..=ranges.serving_grams.1))
    };
    let calories = if rng.gen_bool(ranges.calories_missing_rate) {
        None
    } else {
        Some(rng.gen_range(ranges.calories.0..=ranges.calories.1))
    };

    let count = rng.gen_range(ranges.components.0..=ranges.components.1);
    let scale = serving.unwrap_or(100.0) / 100.0;

    let components = Nutrient::ALL
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .into_iter()
        .map(|nutrient| {
            let (unit, rdi) = reference
                .lookup(nutrient)
                .map(|e| (e.unit, e.rdi))
                .unwrap_or((Unit::Grams, 1.0));
            if rng.gen_bool(ranges.amount_missing_rate) {
                ComponentAmount::unknown(nutrient, unit)
            } else {
                let fraction = rng.gen_range(ranges.rdi_fraction.0..=ranges.rdi_fraction.1);
                ComponentAmount::new(nutrient, unit, fraction * rdi * scale)
            }
        })
        .collect();

    FoodProfile::new(serving, calories, components).unwrap_or_else(|e| {
        warn!(error = %e, "generated profile rejected, sampling an empty profile instead");
        FoodProfile::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_negative_ranges_still_yield_listed_components() {
        let mut rng = StdRng::seed_from_u64(5);
        let table = ReferenceTable::builtin();
        let ranges = SampleRanges {
            serving_grams: (-50.0, -10.0),
            calories: (-200.0, 100.0),
            rdi_fraction: (-1.0, 0.5),
            amount_missing_rate: 0.0,
            ..Default::default()
        };

        let sane = ranges.sanitized();
        assert_eq!(sane.serving_grams, (0.0, 0.0));
        assert_eq!(sane.calories, (0.0, 100.0));
        assert_eq!(sane.rdi_fraction, (0.0, 0.5));

        for _ in 0..100 {
            let profile = random_profile(&mut rng, &table, &ranges);
            assert!(!profile.is_empty());
            if let Some(c) = profile.calorie_amount() {
                assert!(c >= 0.0);
            }
        }
    }

    #[test]
    fn test_random_profile_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let table = ReferenceTable::builtin();
        let ranges = SampleRanges::default();

        for _ in 0..200 {
            let profile = random_profile(&mut rng, &table, &ranges);
            let n = profile.components().len();
            assert!((1..=8).contains(&n));
            if let Some(g) = profile.serving_total_grams() {
                assert!((20.0..=400.0).contains(&g));
            }
        }
    }

    #[test]
    fn test_same_seed_same_profiles() {
        let table = ReferenceTable::builtin();
        let ranges = SampleRanges::default();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                random_profile(&mut a, &table, &ranges),
                random_profile(&mut b, &table, &ranges)
            );
        }
    }

    #[test]
    fn test_sanitized_orders_and_clamps() {
        let ranges = SampleRanges {
            components: (0, 100),
            serving_grams: (300.0, 50.0),
            amount_missing_rate: 2.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(ranges.components, (1, Nutrient::ALL.len()));
        assert_eq!(ranges.serving_grams, (50.0, 300.0));
        assert_eq!(ranges.amount_missing_rate, 1.0);
    }
}
