mod persistence;

pub use persistence::{load_policy, load_profiles, load_reference, save_json, save_results};
