pub mod food;
pub mod nutrient;
pub mod tier;

pub use food::{Amount, ComponentAmount, FoodProfile, FoodProfileRecord};
pub use nutrient::{Nutrient, Unit};
pub use tier::{Basis, FoodTierResult, Reason, ReasonCode, ReasonKind, Tier};
