use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use food_tier::calibration::{random_profile, SampleRanges};
use food_tier::models::{ComponentAmount, FoodProfile, Nutrient};
use food_tier::reference::{Polarity, ReferenceTable};
use food_tier::tiering::{TieringEngine, MAX_REASONS};

fn sample_profiles(seed: u64, n: usize) -> Vec<FoodProfile> {
    let mut rng = StdRng::seed_from_u64(seed);
    let table = ReferenceTable::builtin();
    let ranges = SampleRanges::default();
    (0..n)
        .map(|_| random_profile(&mut rng, &table, &ranges))
        .collect()
}

/// Same profile with one nutrient's amount replaced.
fn with_amount(profile: &FoodProfile, nutrient: Nutrient, amount: f64) -> FoodProfile {
    let table = ReferenceTable::builtin();
    let unit = table.get(nutrient).map(|e| e.unit).unwrap();
    let mut components: Vec<ComponentAmount> = profile
        .components()
        .iter()
        .filter(|c| c.name != nutrient)
        .cloned()
        .collect();
    components.push(ComponentAmount::new(nutrient, unit, amount));
    FoodProfile::new(
        profile.serving_total_grams(),
        profile.calorie_amount(),
        components,
    )
    .unwrap()
}

#[test]
fn test_score_bounds_and_reason_cap() {
    let engine = TieringEngine::default();
    let table = ReferenceTable::builtin();

    for profile in sample_profiles(7, 500) {
        let result = engine.evaluate(&profile, &table);
        assert!((0.0..=100.0).contains(&result.score));
        assert!(!result.reasons.is_empty());
        assert!(result.reasons.len() <= MAX_REASONS);
        assert_eq!(result.tier, engine.policy().thresholds.tier_for(result.score));
    }
}

#[test]
fn test_evaluation_is_deterministic() {
    let engine = TieringEngine::default();
    let table = ReferenceTable::builtin();

    for profile in sample_profiles(11, 100) {
        let first = engine.evaluate(&profile, &table);
        let second = engine.evaluate(&profile, &table);
        assert_eq!(first, second);
    }
}

#[test]
fn test_missing_serving_is_always_estimate() {
    let engine = TieringEngine::default();
    let table = ReferenceTable::builtin();

    for profile in sample_profiles(13, 200) {
        if profile.serving_total_grams().is_none() {
            assert!(engine.evaluate(&profile, &table).is_estimate);
        }
    }
}

#[test]
fn test_monotone_in_each_nutrient() {
    let engine = TieringEngine::default();
    let table = ReferenceTable::builtin();
    let mut rng = StdRng::seed_from_u64(17);

    for profile in sample_profiles(19, 100) {
        for (nutrient, entry) in table.iter() {
            let low = rng.gen_range(0.0..entry.rdi * 2.0);
            let high = low + rng.gen_range(0.0..entry.rdi * 2.0);

            let low_score = engine.evaluate(&with_amount(&profile, nutrient, low), &table).score;
            let high_score = engine.evaluate(&with_amount(&profile, nutrient, high), &table).score;

            match entry.polarity {
                Polarity::Beneficial => assert!(
                    high_score >= low_score - 1e-9,
                    "{} increased from {} to {} lowered score",
                    nutrient.key(),
                    low,
                    high
                ),
                Polarity::Harmful => assert!(
                    high_score <= low_score + 1e-9,
                    "{} increased from {} to {} raised score",
                    nutrient.key(),
                    low,
                    high
                ),
                Polarity::Neutral => assert!((high_score - low_score).abs() < 1e-9),
            }
        }
    }
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = Arc::new(TieringEngine::default());
    let table = Arc::new(ReferenceTable::builtin());
    let profiles = sample_profiles(23, 40);
    let expected: Vec<_> = profiles
        .iter()
        .map(|p| engine.evaluate(p, table.as_ref()))
        .collect();

    let handles: Vec<_> = profiles
        .into_iter()
        .map(|profile| {
            let engine = Arc::clone(&engine);
            let table = Arc::clone(&table);
            thread::spawn(move || engine.evaluate(&profile, table.as_ref()))
        })
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
