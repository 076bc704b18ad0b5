use tracing::debug;

use crate::error::Result;
use crate::models::{Basis, FoodProfile, FoodTierResult, Reason, ReasonCode, Tier};
use crate::reference::ReferenceLookup;
use crate::tiering::constants::NEUTRAL_SCORE;
use crate::tiering::normalize::{normalize, NutrientDensity};
use crate::tiering::policy::TierPolicy;
use crate::tiering::reasons::build_reasons;
use crate::tiering::score::{contribution, Contribution};

/// Grades food profiles under a fixed, validated policy.
///
/// Evaluation is pure: it reads only the profile, the reference snapshot and
/// the policy, so one engine can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct TieringEngine {
    policy: TierPolicy,
}

impl TieringEngine {
    pub fn new(policy: TierPolicy) -> Result<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &TierPolicy {
        &self.policy
    }

    /// Compute tier, score, reasons and the estimate flag for one profile.
    pub fn evaluate<R: ReferenceLookup + ?Sized>(
        &self,
        profile: &FoodProfile,
        reference: &R,
    ) -> FoodTierResult {
        if profile.is_empty() {
            return FoodTierResult {
                tier: self.policy.thresholds.tier_for(NEUTRAL_SCORE),
                score: NEUTRAL_SCORE,
                reasons: vec![Reason::from(ReasonCode::NoNutrientData)],
                is_estimate: true,
            };
        }

        let normalized = normalize(profile, reference);
        let mut is_estimate = false;
        let mut info = Vec::new();

        if normalized.basis == Basis::PerServing {
            is_estimate = true;
            info.push(ReasonCode::ServingSizeUnknown);
        }
        if !normalized.calories_known {
            is_estimate = true;
            info.push(ReasonCode::CaloriesUnknown);
        }

        let mut contributions: Vec<Contribution> = Vec::new();
        let mut nutrient_info = Vec::new();

        for (nutrient, state) in &normalized.nutrients {
            let (entry, density, missing, incompatible) = match state {
                NutrientDensity::Resolved {
                    entry,
                    density,
                    missing,
                    incompatible,
                } => (entry, density, missing, incompatible),
                NutrientDensity::Unrecognized => {
                    nutrient_info.push((
                        *nutrient,
                        ReasonCode::UnrecognizedComponent {
                            nutrient: *nutrient,
                        },
                    ));
                    continue;
                }
                NutrientDensity::InvalidReference => {
                    is_estimate = true;
                    nutrient_info.push((
                        *nutrient,
                        ReasonCode::InvalidReference {
                            nutrient: *nutrient,
                        },
                    ));
                    continue;
                }
            };

            // Any nonzero weight counts for the estimate flag, even when neutral.
            let weighted = entry.weight > 0.0;
            if *missing && weighted {
                is_estimate = true;
                nutrient_info.push((
                    *nutrient,
                    ReasonCode::MissingAmount {
                        nutrient: *nutrient,
                    },
                ));
            }
            if let Some(unit) = incompatible {
                is_estimate |= weighted;
                nutrient_info.push((
                    *nutrient,
                    ReasonCode::IncompatibleUnit {
                        nutrient: *nutrient,
                        unit: *unit,
                        expected: entry.unit,
                    },
                ));
            }
            if let Some(density) = density {
                match contribution(*nutrient, entry, *density, self.policy.ratio_cap) {
                    Some(c) => contributions.push(c),
                    None => {
                        is_estimate = true;
                        nutrient_info.push((
                            *nutrient,
                            ReasonCode::InvalidReference {
                                nutrient: *nutrient,
                            },
                        ));
                    }
                }
            }
        }

        // Stable sort keeps MissingAmount ahead of IncompatibleUnit per nutrient.
        nutrient_info.sort_by(|a, b| a.0.key().cmp(b.0.key()));
        info.extend(nutrient_info.into_iter().map(|(_, code)| code));

        let sum: f64 = contributions.iter().map(|c| c.value).sum();
        let score = self.policy.squash.squash(sum);
        let tier = Tier::from_score(score, &self.policy.thresholds);
        let reasons = build_reasons(&contributions, normalized.basis, info, &self.policy);

        debug!(
            sum,
            score,
            tier = tier.code(),
            is_estimate,
            reasons = reasons.len(),
            "evaluated food profile"
        );

        FoodTierResult {
            tier,
            score,
            reasons,
            is_estimate,
        }
    }
}

/// Evaluate with the default policy.
pub fn evaluate<R: ReferenceLookup + ?Sized>(
    profile: &FoodProfile,
    reference: &R,
) -> FoodTierResult {
    TieringEngine::default().evaluate(profile, reference)
}
