use std::path::Path;

use crate::calibration::run::CalibrationReport;
use crate::data::save_json;
use crate::error::Result;

/// Width of the histogram bar for a 100% share.
const BAR_WIDTH: f64 = 50.0;

/// Write every sample to a CSV file.
pub fn write_csv(report: &CalibrationReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["index", "components", "score", "tier", "is_estimate", "reasons"])?;

    for sample in &report.samples {
        wtr.write_record([
            sample.index.to_string(),
            sample.components.to_string(),
            format!("{:.3}", sample.score),
            sample.tier.to_string(),
            sample.is_estimate.to_string(),
            sample.reasons.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the summary (without individual samples) to a JSON file.
pub fn write_summary_json(report: &CalibrationReport, path: &Path) -> Result<()> {
    save_json(path, report)
}

/// Write the CSV and the JSON summary, attempting both. Returns the first error.
pub fn write_reports(report: &CalibrationReport, csv_path: &Path, json_path: &Path) -> Result<()> {
    let csv_result = write_csv(report, csv_path);
    match &csv_result {
        Ok(()) => println!("Wrote all samples to {:?}", csv_path),
        Err(e) => eprintln!("Error writing CSV: {}", e),
    }

    let json_result = write_summary_json(report, json_path);
    match &json_result {
        Ok(()) => println!("Wrote summary to {:?}", json_path),
        Err(e) => eprintln!("Error writing JSON: {}", e),
    }

    csv_result.and(json_result)
}

/// Print a per-tier histogram and summary statistics.
pub fn print_histogram(report: &CalibrationReport) {
    println!(
        "\n=== Tier distribution ({} samples, seed {}) ===\n",
        report.samples.len(),
        report.seed
    );

    for (tier, count) in &report.tier_counts {
        let share = report.tier_share(*tier);
        let bar = "#".repeat((share * BAR_WIDTH).round() as usize);
        println!("  {}  {:>6}  {:>5.1}%  {}", tier, count, share * 100.0, bar);
    }

    println!();
    println!(
        "Score: mean={:.2} median={:.2} min={:.2} max={:.2}",
        report.mean_score, report.median_score, report.min_score, report.max_score
    );
    println!("Estimates: {:.1}%", report.estimate_share * 100.0);
    println!();
}
