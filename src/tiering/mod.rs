pub mod constants;
pub mod engine;
pub mod normalize;
pub mod policy;
pub mod reasons;
pub mod score;

pub use constants::*;
pub use engine::{evaluate, TieringEngine};
pub use normalize::{normalize, NormalizedProfile, NutrientDensity};
pub use policy::{SquashConfig, TierPolicy, TierThresholds};
pub use score::Contribution;
