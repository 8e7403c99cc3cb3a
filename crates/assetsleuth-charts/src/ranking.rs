//! Cross-category ranking of the largest individual assets.
//!
//! Candidates come from each category's `top_10` leaderboard, not from the
//! full listings. If one category holds more than ten of the globally
//! largest files, its entries past the tenth cannot appear here.
use assetsleuth_core::model::Category;
use assetsleuth_core::report::Report;

/// Number of bars in the top-assets chart.
pub const TOP_ASSETS_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedAsset {
    pub category: Category,
    pub name: String,
    pub path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
}

/// The `n` largest leaderboard entries across all categories, largest first.
///
/// Ties keep report order (category order, then leaderboard order).
pub fn top_assets(report: &Report, n: usize) -> Vec<RankedAsset> {
    let mut ranked: Vec<RankedAsset> = report
        .categories
        .iter()
        .flat_map(|summary| {
            summary.top_10.iter().map(move |entry| RankedAsset {
                category: summary.category,
                name: entry.name.to_string(),
                path: entry.path.clone(),
                size_bytes: entry.size_bytes,
                size_mb: entry.size_mb,
            })
        })
        .collect();
    ranked.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
    ranked.truncate(n);
    ranked
}
