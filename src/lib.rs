pub mod calibration;
pub mod cli;
pub mod data;
pub mod error;
pub mod interface;
pub mod models;
pub mod reference;
pub mod tiering;

pub use error::{Result, TierError};
pub use models::{ComponentAmount, FoodProfile, FoodTierResult, Tier};
pub use reference::{ReferenceLookup, ReferenceTable};
pub use tiering::{evaluate, TierPolicy, TieringEngine};
