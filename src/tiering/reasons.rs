use crate::models::{Basis, Reason, ReasonCode};
use crate::tiering::policy::TierPolicy;
use crate::tiering::score::Contribution;

/// Order reasons most impactful first and cap them.
///
/// Scored nutrients come first, by |contribution| descending with ties broken
/// by nutrient key. Info reasons follow in the order given. If nothing at all
/// qualifies, a single `NoStandoutNutrients` reason is returned.
pub fn build_reasons(
    contributions: &[Contribution],
    basis: Basis,
    info: Vec<ReasonCode>,
    policy: &TierPolicy,
) -> Vec<Reason> {
    let mut impactful: Vec<&Contribution> = contributions
        .iter()
        .filter(|c| c.value.abs() > policy.min_impact)
        .collect();

    impactful.sort_by(|a, b| {
        b.value
            .abs()
            .total_cmp(&a.value.abs())
            .then_with(|| a.nutrient.key().cmp(b.nutrient.key()))
    });

    let mut reasons: Vec<Reason> = impactful
        .into_iter()
        .map(|c| {
            let percent_of_rdi = c.raw_ratio * 100.0;
            if c.value > 0.0 {
                ReasonCode::GoodSource {
                    nutrient: c.nutrient,
                    percent_of_rdi,
                    basis,
                }
            } else {
                ReasonCode::HighIn {
                    nutrient: c.nutrient,
                    percent_of_rdi,
                    basis,
                }
            }
        })
        .chain(info)
        .map(Reason::from)
        .collect();

    if reasons.is_empty() {
        reasons.push(Reason::from(ReasonCode::NoStandoutNutrients));
    }

    reasons.truncate(policy.max_reasons);
    reasons
}
