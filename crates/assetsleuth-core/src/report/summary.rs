//! Operator-facing run summary. Presentation only.
use super::Report;
use crate::model::size::format_count;

const RULE_WIDTH: usize = 60;

/// Render the console summary for `report`.
pub fn render_summary(report: &Report) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        "ASSET ANALYSIS SUMMARY".to_string(),
        rule.clone(),
        format!(
            "Total size:  {:.2} MB ({:.2} GB)",
            report.total_size_mb, report.total_size_gb
        ),
        format!("Asset types: {}", report.categories.len()),
        format!("Total files: {}", format_count(report.file_count() as u64)),
    ];

    if !report.is_empty() {
        lines.push(String::new());
        lines.push("By type:".to_string());
        lines.extend(report.categories.iter().map(|summary| {
            format!(
                "  * {:<15} - {:>5} files - {:>8.2} MB ({:>5.1}%)",
                summary.category.label().to_uppercase(),
                summary.count,
                summary.total_size_mb,
                summary.percentage
            )
        }));
    }
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
