//! Report model — the JSON snapshot shared with every downstream stage.
//!
//! The serialized field names are the contract read by the chart renderer
//! and any external tooling; keep them stable.
pub mod builder;
pub mod export;
pub mod io;
pub mod summary;

pub use builder::{build_report, build_report_at};
pub use export::export_listing;
pub use io::{load_report, write_report};
pub use summary::render_summary;

use crate::model::{AssetRecord, Category};
use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Maximum entries in a category's `top_10` leaderboard.
pub const LEADERBOARD_LEN: usize = 10;

/// Format of the human-readable `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scan's results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: DateTime<Local>,
    pub date: String,
    pub total_size_bytes: u64,
    pub total_size_kb: f64,
    pub total_size_mb: f64,
    pub total_size_gb: f64,
    /// Non-empty categories, largest total first.
    #[serde(rename = "metrics", with = "category_map")]
    pub categories: Vec<CategorySummary>,
}

impl Report {
    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn file_count(&self) -> usize {
        self.categories.iter().map(|c| c.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Per-category rollup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Carried as the map key in JSON.
    #[serde(skip)]
    pub category: Category,
    pub count: usize,
    pub total_size_bytes: u64,
    pub total_size_kb: f64,
    pub total_size_mb: f64,
    pub percentage: f64,
    /// Largest files, at most [`LEADERBOARD_LEN`]; a prefix of `all_files`.
    pub top_10: Vec<LeaderboardEntry>,
    /// Every file, largest first.
    pub all_files: Vec<ListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: CompactString,
    pub path: String,
    pub size_bytes: u64,
    pub size_kb: f64,
    pub size_mb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: CompactString,
    pub path: String,
    pub size_bytes: u64,
    pub size_mb: f64,
}

impl From<&AssetRecord> for LeaderboardEntry {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            path: record.relative_path.clone(),
            size_bytes: record.size_bytes,
            size_kb: record.size_kb(),
            size_mb: record.size_mb(),
        }
    }
}

impl From<&AssetRecord> for ListingEntry {
    fn from(record: &AssetRecord) -> Self {
        Self {
            name: record.name.clone(),
            path: record.relative_path.clone(),
            size_bytes: record.size_bytes,
            size_mb: record.size_mb(),
        }
    }
}

/// Serializes the summaries as a JSON object keyed by category label,
/// preserving vector order in both directions.
mod category_map {
    use super::CategorySummary;
    use crate::model::Category;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(
        summaries: &[CategorySummary],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(summaries.len()))?;
        for summary in summaries {
            map.serialize_entry(&summary.category, summary)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<CategorySummary>, D::Error> {
        struct SummaryMap;

        impl<'de> Visitor<'de> for SummaryMap {
            type Value = Vec<CategorySummary>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category summaries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut summaries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((category, mut summary)) =
                    access.next_entry::<Category, CategorySummary>()?
                {
                    summary.category = category;
                    summaries.push(summary);
                }
                Ok(summaries)
            }
        }

        deserializer.deserialize_map(SummaryMap)
    }
}
