use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TierError};
use crate::models::{Nutrient, Unit};
use crate::reference::entry::{Polarity, ReferenceEntry, ReferenceLookup};

/// Adult daily values shipped with the crate.
pub static BUILTIN_REFERENCE: LazyLock<ReferenceTable> = LazyLock::new(|| {
    use Polarity::{Beneficial, Harmful, Neutral};
    use Unit::{Grams, Micrograms, Milligrams};

    let rows = [
        (Nutrient::Protein, 50.0, Grams, Beneficial, 0.8),
        (Nutrient::Fiber, 28.0, Grams, Beneficial, 0.8),
        (Nutrient::Sugar, 50.0, Grams, Harmful, 0.6),
        (Nutrient::AddedSugar, 50.0, Grams, Harmful, 0.9),
        (Nutrient::Sodium, 2300.0, Milligrams, Harmful, 0.8),
        (Nutrient::SaturatedFat, 20.0, Grams, Harmful, 0.8),
        (Nutrient::TransFat, 2.0, Grams, Harmful, 1.0),
        (Nutrient::TotalFat, 78.0, Grams, Neutral, 0.0),
        (Nutrient::Cholesterol, 300.0, Milligrams, Harmful, 0.4),
        (Nutrient::Carbohydrate, 275.0, Grams, Neutral, 0.0),
        (Nutrient::VitaminA, 900.0, Micrograms, Beneficial, 0.3),
        (Nutrient::VitaminC, 90.0, Milligrams, Beneficial, 0.3),
        (Nutrient::VitaminD, 20.0, Micrograms, Beneficial, 0.3),
        (Nutrient::VitaminE, 15.0, Milligrams, Beneficial, 0.2),
        (Nutrient::VitaminK, 120.0, Micrograms, Beneficial, 0.2),
        (Nutrient::VitaminB6, 1.7, Milligrams, Beneficial, 0.2),
        (Nutrient::VitaminB12, 2.4, Micrograms, Beneficial, 0.2),
        (Nutrient::Folate, 400.0, Micrograms, Beneficial, 0.2),
        (Nutrient::Calcium, 1300.0, Milligrams, Beneficial, 0.4),
        (Nutrient::Iron, 18.0, Milligrams, Beneficial, 0.4),
        (Nutrient::Potassium, 4700.0, Milligrams, Beneficial, 0.4),
        (Nutrient::Magnesium, 420.0, Milligrams, Beneficial, 0.3),
        (Nutrient::Zinc, 11.0, Milligrams, Beneficial, 0.2),
    ];

    ReferenceTable {
        entries: rows
            .into_iter()
            .map(|(n, rdi, unit, polarity, weight)| {
                (n, ReferenceEntry::new(rdi, unit, polarity, weight))
            })
            .collect(),
    }
});

/// Immutable snapshot of reference entries keyed by nutrient.
///
/// Deserializing validates every entry, so a table that exists is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Nutrient, ReferenceEntry>",
    into = "BTreeMap<Nutrient, ReferenceEntry>"
)]
pub struct ReferenceTable {
    entries: BTreeMap<Nutrient, ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(entries: BTreeMap<Nutrient, ReferenceEntry>) -> Result<Self> {
        for (nutrient, entry) in &entries {
            entry.validate(*nutrient)?;
        }
        Ok(Self { entries })
    }

    /// Validated table from `(nutrient, entry)` pairs. Later pairs win.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Nutrient, ReferenceEntry)>,
    {
        Self::new(entries.into_iter().collect())
    }

    /// Copy of the built-in adult daily values.
    pub fn builtin() -> Self {
        BUILTIN_REFERENCE.clone()
    }

    /// Replace entries with those named in `overrides`.
    pub fn merge(mut self, overrides: ReferenceTable) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<&ReferenceEntry> {
        self.entries.get(&nutrient)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Nutrient, &ReferenceEntry)> {
        self.entries.iter().map(|(n, e)| (*n, e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ReferenceLookup for ReferenceTable {
    fn lookup(&self, nutrient: Nutrient) -> Option<ReferenceEntry> {
        self.entries.get(&nutrient).copied()
    }
}

impl TryFrom<BTreeMap<Nutrient, ReferenceEntry>> for ReferenceTable {
    type Error = TierError;

    fn try_from(entries: BTreeMap<Nutrient, ReferenceEntry>) -> Result<Self> {
        ReferenceTable::new(entries)
    }
}

impl From<ReferenceTable> for BTreeMap<Nutrient, ReferenceEntry> {
    fn from(table: ReferenceTable) -> Self {
        table.entries
    }
}
