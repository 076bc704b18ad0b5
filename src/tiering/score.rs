use crate::models::Nutrient;
use crate::reference::{Polarity, ReferenceEntry};
use crate::tiering::constants::BENEFICIAL_CREDIT_CAP;

/// Signed effect of one nutrient on the composite sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub nutrient: Nutrient,
    pub value: f64,
    /// density / RDI before clamping, for display.
    pub raw_ratio: f64,
}

/// density / RDI, clamped to [0, cap].
pub fn clamped_ratio(density: f64, rdi: f64, cap: f64) -> f64 {
    (density / rdi).clamp(0.0, cap)
}

/// Saturating response: beneficial credit stops at 100% of the RDI, harmful
/// penalties keep growing up to the ratio cap.
pub fn response(polarity: Polarity, ratio: f64) -> f64 {
    match polarity {
        Polarity::Beneficial => ratio.min(BENEFICIAL_CREDIT_CAP),
        Polarity::Harmful => ratio,
        Polarity::Neutral => 0.0,
    }
}

/// `None` when the ratio is undefined (NaN), so it is never credited.
pub fn contribution(
    nutrient: Nutrient,
    entry: &ReferenceEntry,
    density: f64,
    ratio_cap: f64,
) -> Option<Contribution> {
    let raw_ratio = density / entry.rdi;
    if raw_ratio.is_nan() || !entry.weight.is_finite() {
        return None;
    }
    let ratio = clamped_ratio(density, entry.rdi, ratio_cap);
    Some(Contribution {
        nutrient,
        value: entry.weight * entry.polarity.sign() * response(entry.polarity, ratio),
        raw_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use crate::tiering::constants::RATIO_CAP;

    fn entry(polarity: Polarity, rdi: f64, weight: f64) -> ReferenceEntry {
        ReferenceEntry::new(rdi, Unit::Grams, polarity, weight)
    }

    #[test]
    fn test_ratio_is_clamped() {
        assert_eq!(clamped_ratio(10.0, 5.0, RATIO_CAP), 2.0);
        assert_eq!(clamped_ratio(50.0, 5.0, RATIO_CAP), 2.0);
        assert!((clamped_ratio(1.0, 4.0, RATIO_CAP) - 0.25).abs() < 1e-12);
        assert_eq!(clamped_ratio(0.0, 4.0, RATIO_CAP), 0.0);
    }

    #[test]
    fn test_beneficial_credit_saturates_at_rdi() {
        let protein = entry(Polarity::Beneficial, 50.0, 1.0);
        let c = contribution(Nutrient::Protein, &protein, 75.0, RATIO_CAP).unwrap();
        assert_eq!(c.value, 1.0);
        assert!((c.raw_ratio - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_harmful_penalty_grows_to_cap() {
        let sugar = entry(Polarity::Harmful, 25.0, 1.0);
        let c = contribution(Nutrient::Sugar, &sugar, 30.0, RATIO_CAP).unwrap();
        assert!((c.value + 1.2).abs() < 1e-12);

        // 10x the limit is penalized like 2x.
        let extreme = contribution(Nutrient::Sugar, &sugar, 250.0, RATIO_CAP).unwrap();
        assert_eq!(extreme.value, -2.0);
    }

    #[test]
    fn test_weight_scales_and_neutral_is_zero() {
        let sodium = entry(Polarity::Harmful, 2300.0, 0.5);
        let c = contribution(Nutrient::Sodium, &sodium, 2300.0, RATIO_CAP).unwrap();
        assert!((c.value + 0.5).abs() < 1e-12);

        let fat = entry(Polarity::Neutral, 78.0, 1.0);
        assert_eq!(
            contribution(Nutrient::TotalFat, &fat, 100.0, RATIO_CAP)
                .unwrap()
                .value,
            0.0
        );
    }

    #[test]
    fn test_undefined_ratio_is_not_credited() {
        let iron = entry(Polarity::Beneficial, 0.0, 1.0);
        assert!(contribution(Nutrient::Iron, &iron, 0.0, RATIO_CAP).is_none());
    }
}
