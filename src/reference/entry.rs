use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TierError};
use crate::models::{Nutrient, Unit};

/// Whether more of a nutrient is good, bad, or irrelevant for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Polarity {
    Beneficial,
    Harmful,
    Neutral,
}

impl Polarity {
    /// +1 for beneficial, -1 for harmful, 0 for neutral.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Beneficial => 1.0,
            Polarity::Harmful => -1.0,
            Polarity::Neutral => 0.0,
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

/// Daily reference intake for one nutrient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub rdi: f64,
    pub unit: Unit,
    pub polarity: Polarity,
    /// Importance multiplier in [0, 1].
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl ReferenceEntry {
    pub const fn new(rdi: f64, unit: Unit, polarity: Polarity, weight: f64) -> Self {
        Self {
            rdi,
            unit,
            polarity,
            weight,
        }
    }

    /// True when the entry can move a score at all.
    pub fn is_scored(&self) -> bool {
        self.weight > 0.0 && self.polarity != Polarity::Neutral
    }

    pub fn validate(&self, nutrient: Nutrient) -> Result<()> {
        if !self.rdi.is_finite() || self.rdi <= 0.0 {
            return Err(TierError::InvalidInput(format!(
                "rdi for {} must be positive, got {}",
                nutrient.key(),
                self.rdi
            )));
        }
        if !(0.0..=1.0).contains(&self.weight) {
            return Err(TierError::InvalidInput(format!(
                "weight for {} must be within [0, 1], got {}",
                nutrient.key(),
                self.weight
            )));
        }
        Ok(())
    }
}

/// Read-only source of reference entries.
///
/// Implementations must be in-memory lookups; the engine calls this once per
/// component and assumes no I/O behind it.
pub trait ReferenceLookup {
    fn lookup(&self, nutrient: Nutrient) -> Option<ReferenceEntry>;
}

impl ReferenceLookup for HashMap<Nutrient, ReferenceEntry> {
    fn lookup(&self, nutrient: Nutrient) -> Option<ReferenceEntry> {
        self.get(&nutrient).copied()
    }
}

impl ReferenceLookup for BTreeMap<Nutrient, ReferenceEntry> {
    fn lookup(&self, nutrient: Nutrient) -> Option<ReferenceEntry> {
        self.get(&nutrient).copied()
    }
}

impl<T: ReferenceLookup + ?Sized> ReferenceLookup for &T {
    fn lookup(&self, nutrient: Nutrient) -> Option<ReferenceEntry> {
        (**self).lookup(nutrient)
    }
}
