use crate::models::{FoodTierResult, ReasonKind};
use crate::reference::ReferenceTable;

fn reason_marker(kind: ReasonKind) -> &'static str {
    match kind {
        ReasonKind::Positive => "+",
        ReasonKind::Negative => "-",
        ReasonKind::Info => "i",
    }
}

/// Display one tier result with its reasons.
pub fn display_result(result: &FoodTierResult, title: &str) {
    let estimate = if result.is_estimate { "  (estimate)" } else { "" };

    println!();
    println!("=== {} ===", title);
    println!("Tier {}  |  score {:.1}{}", result.tier, result.score, estimate);

    for reason in &result.reasons {
        println!("  [{}] {}", reason_marker(reason.kind), reason.message);
    }
    println!();
}

/// Display a batch of results followed by a tier summary line.
pub fn display_results(results: &[FoodTierResult]) {
    if results.is_empty() {
        println!("No profiles to evaluate.");
        return;
    }

    for (i, result) in results.iter().enumerate() {
        display_result(result, &format!("Profile {}", i + 1));
    }

    if results.len() > 1 {
        let tiers: Vec<String> = results.iter().map(|r| r.tier.to_string()).collect();
        let estimates = results.iter().filter(|r| r.is_estimate).count();
        println!("--- Summary ---");
        println!("Tiers: {}", tiers.join(" "));
        println!("Estimates: {} of {}", estimates, results.len());
        println!();
    }
}

/// Display the reference table in aligned columns.
pub fn display_reference_table(table: &ReferenceTable) {
    if table.is_empty() {
        println!("Reference table: (none)");
        return;
    }

    let width = table.iter().map(|(n, _)| n.key().len()).max().unwrap_or(10);

    println!();
    println!("=== Reference Table ({} nutrients) ===", table.len());
    println!();

    for (nutrient, entry) in table.iter() {
        println!(
            "  {:<width$}  {:>8} {:<4}  {:<10}  weight {:.2}",
            nutrient.key(),
            entry.rdi,
            entry.unit.symbol(),
            format!("{:?}", entry.polarity).to_lowercase(),
            entry.weight,
            width = width
        );
    }

    println!();
}
