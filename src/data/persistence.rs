use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{FoodProfile, FoodTierResult};
use crate::reference::ReferenceTable;
use crate::tiering::TierPolicy;

/// A profile file holds either one profile or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileFile {
    Many(Vec<FoodProfile>),
    One(FoodProfile),
}

/// Load food profiles from a JSON file.
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<FoodProfile>> {
    let content = fs::read_to_string(path)?;
    let profiles = match serde_json::from_str::<ProfileFile>(&content) {
        Ok(ProfileFile::Many(list)) => list,
        Ok(ProfileFile::One(profile)) => vec![profile],
        // Untagged errors are vague; re-parse as a single profile for a precise message.
        Err(_) => vec![serde_json::from_str::<FoodProfile>(&content)?],
    };
    Ok(profiles)
}

/// Load a reference table and layer it over the built-in daily values.
pub fn load_reference<P: AsRef<Path>>(path: P) -> Result<ReferenceTable> {
    let content = fs::read_to_string(path)?;
    let overrides: ReferenceTable = serde_json::from_str(&content)?;
    Ok(ReferenceTable::builtin().merge(overrides))
}

/// Load and validate a tier policy.
pub fn load_policy<P: AsRef<Path>>(path: P) -> Result<TierPolicy> {
    let content = fs::read_to_string(path)?;
    let policy: TierPolicy = serde_json::from_str(&content)?;
    policy.validate()?;
    Ok(policy)
}

/// Write any serializable value as pretty JSON.
pub fn save_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save tier results to a JSON file.
pub fn save_results<P: AsRef<Path>>(path: P, results: &[FoodTierResult]) -> Result<()> {
    save_json(path, results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TierError;
    use crate::models::Nutrient;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_single_and_list() {
        let single = write_temp(
            r#"{"servingTotalGrams": 100, "calorieAmount": 200,
                "components": [{"name": "protein", "unit": "g", "amount": 20}]}"#,
        );
        assert_eq!(load_profiles(single.path()).unwrap().len(), 1);

        let list = write_temp(
            r#"[{"components": []}, {"servingTotalGrams": 30, "components": []}]"#,
        );
        let profiles = load_profiles(list.path()).unwrap();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[1].serving_total_grams(), Some(30.0));
    }

    #[test]
    fn test_load_rejects_negative_amount() {
        let bad = write_temp(
            r#"{"components": [{"name": "sugar", "unit": "g", "amount": -3}]}"#,
        );
        assert!(matches!(load_profiles(bad.path()), Err(TierError::Json(_))));
    }

    #[test]
    fn test_reference_overrides_builtin() {
        let file = write_temp(
            r#"{"sugar": {"rdi": 25, "unit": "g", "polarity": "harmful", "weight": 1.0}}"#,
        );
        let table = load_reference(file.path()).unwrap();
        assert_eq!(table.get(Nutrient::Sugar).unwrap().rdi, 25.0);
        assert_eq!(table.get(Nutrient::Sodium).unwrap().rdi, 2300.0);
    }

    #[test]
    fn test_policy_validated_on_load() {
        let file = write_temp(r#"{"squash": {"scale": -1.0}}"#);
        assert!(matches!(
            load_policy(file.path()),
            Err(TierError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_policy_round_trip() {
        let out = NamedTempFile::new().unwrap();
        save_json(out.path(), &TierPolicy::default()).unwrap();
        assert_eq!(load_policy(out.path()).unwrap(), TierPolicy::default());
    }
}
