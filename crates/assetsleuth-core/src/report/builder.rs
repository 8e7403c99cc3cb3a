//! Report builder — turns a finished aggregation into an immutable [`Report`].
use super::{CategorySummary, LeaderboardEntry, ListingEntry, Report, DATE_FORMAT, LEADERBOARD_LEN};
use crate::model::size;
use crate::scanner::{Aggregation, CategoryBucket};
use chrono::{DateTime, Local};

/// Build a report stamped with the current local time.
pub fn build_report(aggregation: Aggregation) -> Report {
    build_report_at(aggregation, Local::now())
}

/// Build a report stamped with `generated_at`.
///
/// Everything except the timestamp fields is a pure function of the
/// aggregation, so identical trees produce identical reports.
pub fn build_report_at(aggregation: Aggregation, generated_at: DateTime<Local>) -> Report {
    let total = aggregation.total_bytes;

    let mut categories: Vec<CategorySummary> = aggregation
        .buckets
        .into_iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| summarise(bucket, total))
        .collect();
    // Buckets arrive in taxonomy order; a stable sort keeps it for equal totals.
    categories.sort_by(|a, b| b.total_size_bytes.cmp(&a.total_size_bytes));

    Report {
        timestamp: generated_at,
        date: generated_at.format(DATE_FORMAT).to_string(),
        total_size_bytes: total,
        total_size_kb: size::kb(total),
        total_size_mb: size::mb(total),
        total_size_gb: size::gb(total),
        categories,
    }
}

fn summarise(mut bucket: CategoryBucket, grand_total: u64) -> CategorySummary {
    // Stable: equal sizes stay in discovery order.
    bucket
        .records
        .sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));

    CategorySummary {
        category: bucket.category,
        count: bucket.records.len(),
        total_size_bytes: bucket.total_bytes,
        total_size_kb: size::kb(bucket.total_bytes),
        total_size_mb: size::mb(bucket.total_bytes),
        percentage: size::percentage(bucket.total_bytes, grand_total),
        top_10: bucket
            .records
            .iter()
            .take(LEADERBOARD_LEN)
            .map(LeaderboardEntry::from)
            .collect(),
        all_files: bucket.records.iter().map(ListingEntry::from).collect(),
    }
}
