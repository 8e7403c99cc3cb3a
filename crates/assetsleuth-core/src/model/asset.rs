//! A single discovered asset file.
use crate::model::size;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// File identity plus its byte size. Immutable once created.
///
/// `relative_path` always uses `/` separators regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: CompactString,
    pub relative_path: String,
    pub size_bytes: u64,
}

impl AssetRecord {
    pub fn new(name: impl Into<CompactString>, relative_path: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            relative_path: relative_path.into(),
            size_bytes,
        }
    }

    pub fn size_kb(&self) -> f64 {
        size::kb(self.size_bytes)
    }

    pub fn size_mb(&self) -> f64 {
        size::mb(self.size_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_sizes_use_shared_rounding() {
        let record = AssetRecord::new("hero.fbx", "Models/hero.fbx", 1_572_864);
        assert_eq!(record.size_kb(), 1536.0);
        assert_eq!(record.size_mb(), 1.5);
    }
}
