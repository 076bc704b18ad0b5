/// Lower and upper bound of every score.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Score of a profile with no nutrient data. Also the squash midpoint.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Grams that make up the per-100 g density basis.
pub const DENSITY_BASIS_GRAMS: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Squashing curve: score = 100 / (1 + exp(-(sum - center) / scale))
// ─────────────────────────────────────────────────────────────────────────────

/// Contribution sum that maps to `NEUTRAL_SCORE`.
pub const SQUASH_CENTER: f64 = 0.0;

/// Contribution units per logistic e-fold. A sum of ±1 lands near 73 / 27.
pub const SQUASH_SCALE: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Per-component contribution
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound of density / RDI. Keeps one extreme nutrient from dominating.
pub const RATIO_CAP: f64 = 2.0;

/// Beneficial nutrients earn no extra credit past 100% of the RDI.
pub const BENEFICIAL_CREDIT_CAP: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Tier thresholds (inclusive lower bounds)
// ─────────────────────────────────────────────────────────────────────────────

pub const TIER_S_MIN: f64 = 90.0;
pub const TIER_A_MIN: f64 = 75.0;
pub const TIER_B_MIN: f64 = 60.0;
pub const TIER_C_MIN: f64 = 45.0;
pub const TIER_D_MIN: f64 = 30.0;
pub const TIER_E_MIN: f64 = 15.0;

// ─────────────────────────────────────────────────────────────────────────────
// Reasons
// ─────────────────────────────────────────────────────────────────────────────

/// A component needs |contribution| above this to earn a reason.
pub const MIN_IMPACT: f64 = 0.05;

/// Maximum number of reasons in a result.
pub const MAX_REASONS: usize = 5;
