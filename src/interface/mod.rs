pub mod render;

pub use render::{display_reference_table, display_result, display_results};
