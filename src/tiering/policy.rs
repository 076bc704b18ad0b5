use serde::{Deserialize, Serialize};

use crate::error::{Result, TierError};
use crate::models::Tier;
use crate::tiering::constants::*;

/// Logistic curve mapping an unbounded contribution sum onto [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquashConfig {
    pub center: f64,
    pub scale: f64,
}

impl Default for SquashConfig {
    fn default() -> Self {
        Self {
            center: SQUASH_CENTER,
            scale: SQUASH_SCALE,
        }
    }
}

impl SquashConfig {
    /// Map a contribution sum to a score. Non-finite input lands on the midpoint.
    pub fn squash(&self, sum: f64) -> f64 {
        if !sum.is_finite() {
            return NEUTRAL_SCORE;
        }
        let score = MAX_SCORE / (1.0 + (-(sum - self.center) / self.scale).exp());
        if score.is_finite() {
            score.clamp(MIN_SCORE, MAX_SCORE)
        } else {
            NEUTRAL_SCORE
        }
    }
}

/// Inclusive lower score bound of each tier above F.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            s: TIER_S_MIN,
            a: TIER_A_MIN,
            b: TIER_B_MIN,
            c: TIER_C_MIN,
            d: TIER_D_MIN,
            e: TIER_E_MIN,
        }
    }
}

impl TierThresholds {
    /// Bounds paired with their tier, highest first.
    pub fn bounds(&self) -> [(Tier, f64); 6] {
        [
            (Tier::S, self.s),
            (Tier::A, self.a),
            (Tier::B, self.b),
            (Tier::C, self.c),
            (Tier::D, self.d),
            (Tier::E, self.e),
        ]
    }

    /// The unique tier whose bucket contains `score`.
    pub fn tier_for(&self, score: f64) -> Tier {
        self.bounds()
            .into_iter()
            .find(|(_, min)| score >= *min)
            .map(|(tier, _)| tier)
            .unwrap_or(Tier::F)
    }

    fn validate(&self) -> Result<()> {
        let bounds = self.bounds();
        for (tier, min) in bounds {
            if !min.is_finite() || min <= MIN_SCORE || min > MAX_SCORE {
                return Err(TierError::InvalidInput(format!(
                    "threshold for tier {} must be within (0, 100], got {}",
                    tier, min
                )));
            }
        }
        for pair in bounds.windows(2) {
            let ((upper, upper_min), (lower, lower_min)) = (pair[0], pair[1]);
            if lower_min >= upper_min {
                return Err(TierError::InvalidInput(format!(
                    "threshold for tier {} ({}) must be below tier {} ({})",
                    lower, lower_min, upper, upper_min
                )));
            }
        }
        Ok(())
    }
}

/// Every tunable policy constant of the tiering engine.
///
/// Omitted JSON fields fall back to the defaults in `tiering::constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TierPolicy {
    pub squash: SquashConfig,
    pub thresholds: TierThresholds,
    pub ratio_cap: f64,
    pub min_impact: f64,
    pub max_reasons: usize,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            squash: SquashConfig::default(),
            thresholds: TierThresholds::default(),
            ratio_cap: RATIO_CAP,
            min_impact: MIN_IMPACT,
            max_reasons: MAX_REASONS,
        }
    }
}

impl TierPolicy {
    /// Reject configurations that could yield scores outside [0, 100] or
    /// ambiguous tiers.
    pub fn validate(&self) -> Result<()> {
        if !self.squash.center.is_finite() {
            return Err(TierError::InvalidInput(format!(
                "squash center must be finite, got {}",
                self.squash.center
            )));
        }
        if !self.squash.scale.is_finite() || self.squash.scale <= 0.0 {
            return Err(TierError::InvalidInput(format!(
                "squash scale must be positive, got {}",
                self.squash.scale
            )));
        }
        if !self.ratio_cap.is_finite() || self.ratio_cap < BENEFICIAL_CREDIT_CAP {
            return Err(TierError::InvalidInput(format!(
                "ratio cap must be at least {}, got {}",
                BENEFICIAL_CREDIT_CAP, self.ratio_cap
            )));
        }
        if !self.min_impact.is_finite() || self.min_impact < 0.0 {
            return Err(TierError::InvalidInput(format!(
                "min impact must be non-negative, got {}",
                self.min_impact
            )));
        }
        if self.max_reasons == 0 {
            return Err(TierError::InvalidInput(
                "max reasons must be at least 1".to_string(),
            ));
        }
        self.thresholds.validate()
    }
}
