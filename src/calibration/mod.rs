pub mod output;
pub mod run;
pub mod sampling;

pub use output::{print_histogram, write_csv, write_reports, write_summary_json};
pub use run::{run_calibration, CalibrationConfig, CalibrationReport, CalibrationSample};
pub use sampling::{random_profile, SampleRanges};
