use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::calibration::sampling::{random_profile, SampleRanges};
use crate::models::Tier;
use crate::reference::ReferenceLookup;
use crate::tiering::TieringEngine;

/// Configuration for a calibration run.
#[derive(Debug, Clone)]
pub struct CalibrationConfig {
    pub samples: usize,
    pub seed: u64,
    pub ranges: SampleRanges,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            samples: 1000,
            seed: 123,
            ranges: SampleRanges::default(),
        }
    }
}

/// Outcome of grading one random profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationSample {
    pub index: usize,
    pub components: usize,
    pub score: f64,
    pub tier: Tier,
    pub is_estimate: bool,
    pub reasons: usize,
}

/// Score distribution of a calibration run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationReport {
    pub seed: u64,
    pub tier_counts: BTreeMap<Tier, usize>,
    pub mean_score: f64,
    pub median_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub estimate_share: f64,
    #[serde(skip)]
    pub samples: Vec<CalibrationSample>,
}

impl CalibrationReport {
    /// Summarize a set of samples. Every tier appears in `tier_counts`.
    pub fn from_samples(seed: u64, samples: Vec<CalibrationSample>) -> Self {
        let mut tier_counts: BTreeMap<Tier, usize> = Tier::ALL.iter().map(|t| (*t, 0)).collect();
        for sample in &samples {
            *tier_counts.entry(sample.tier).or_insert(0) += 1;
        }

        let n = samples.len();
        let mut scores: Vec<f64> = samples.iter().map(|s| s.score).collect();
        scores.sort_by(f64::total_cmp);

        let (mean_score, median_score, min_score, max_score, estimate_share) = if n == 0 {
            (0.0, 0.0, 0.0, 0.0, 0.0)
        } else {
            let median = if n % 2 == 1 {
                scores[n / 2]
            } else {
                (scores[n / 2 - 1] + scores[n / 2]) / 2.0
            };
            (
                scores.iter().sum::<f64>() / n as f64,
                median,
                scores[0],
                scores[n - 1],
                samples.iter().filter(|s| s.is_estimate).count() as f64 / n as f64,
            )
        };

        Self {
            seed,
            tier_counts,
            mean_score,
            median_score,
            min_score,
            max_score,
            estimate_share,
            samples,
        }
    }

    /// Share of samples in a tier, 0.0 when there are no samples.
    pub fn tier_share(&self, tier: Tier) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.tier_counts.get(&tier).copied().unwrap_or(0) as f64 / self.samples.len() as f64
    }
}

/// Grade `config.samples` random profiles and summarize the distribution.
pub fn run_calibration<R: ReferenceLookup + ?Sized>(
    config: &CalibrationConfig,
    engine: &TieringEngine,
    reference: &R,
) -> CalibrationReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.samples);

    info!(samples = config.samples, seed = config.seed, "starting calibration");

    for index in 0..config.samples {
        let profile = random_profile(&mut rng, reference, &config.ranges);
        let result = engine.evaluate(&profile, reference);

        samples.push(CalibrationSample {
            index,
            components: profile.components().len(),
            score: result.score,
            tier: result.tier,
            is_estimate: result.is_estimate,
            reasons: result.reasons.len(),
        });

        // Progress indicator every 10%
        if (index + 1) % (config.samples / 10).max(1) == 0 {
            let pct = ((index + 1) as f64 / config.samples as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    if config.samples > 0 {
        eprintln!();
    }

    CalibrationReport::from_samples(config.seed, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceTable;

    fn sample(score: f64, tier: Tier, is_estimate: bool) -> CalibrationSample {
        CalibrationSample {
            index: 0,
            components: 1,
            score,
            tier,
            is_estimate,
            reasons: 1,
        }
    }

    #[test]
    fn test_report_statistics() {
        let report = CalibrationReport::from_samples(
            1,
            vec![
                sample(95.0, Tier::S, false),
                sample(50.0, Tier::C, true),
                sample(20.0, Tier::E, false),
                sample(10.0, Tier::F, false),
            ],
        );
        assert_eq!(report.tier_counts[&Tier::S], 1);
        assert_eq!(report.tier_counts[&Tier::A], 0);
        assert!((report.mean_score - 43.75).abs() < 1e-9);
        assert!((report.median_score - 35.0).abs() < 1e-9);
        assert_eq!(report.min_score, 10.0);
        assert_eq!(report.max_score, 95.0);
        assert!((report.estimate_share - 0.25).abs() < 1e-9);
        assert!((report.tier_share(Tier::C) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = CalibrationReport::from_samples(1, vec![]);
        assert_eq!(report.mean_score, 0.0);
        assert_eq!(report.tier_share(Tier::S), 0.0);
        assert_eq!(report.tier_counts.len(), 7);
    }

    #[test]
    fn test_run_is_reproducible_and_bounded() {
        let config = CalibrationConfig {
            samples: 200,
            seed: 9,
            ..Default::default()
        };
        let engine = TieringEngine::default();
        let table = ReferenceTable::builtin();

        let a = run_calibration(&config, &engine, &table);
        let b = run_calibration(&config, &engine, &table);

        assert_eq!(a.samples.len(), 200);
        assert_eq!(a.tier_counts, b.tier_counts);
        assert_eq!(a.mean_score, b.mean_score);
        assert!(a.min_score >= 0.0 && a.max_score <= 100.0);
        assert_eq!(a.tier_counts.values().sum::<usize>(), 200);
    }
}
